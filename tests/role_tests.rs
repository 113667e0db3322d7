mod common;

#[cfg(test)]
pub mod role_tests {
    use sabq::models::*;

    #[test]
    fn test_known_aliases_map_to_canonical_roles() {
        assert_eq!(Role::from_raw("admin"), Role::Admin);
        assert_eq!(Role::from_raw("system_admin"), Role::Admin);
        assert_eq!(Role::from_raw("superadmin"), Role::Admin);
        assert_eq!(Role::from_raw("chief_editor"), Role::Editor);
        assert_eq!(Role::from_raw("editor_in_chief"), Role::Editor);
        assert_eq!(Role::from_raw("content_creator"), Role::Author);
        assert_eq!(Role::from_raw("correspondent"), Role::Reporter);
        assert_eq!(Role::from_raw("columnist"), Role::OpinionAuthor);
        assert_eq!(Role::from_raw("fact_checker"), Role::Reviewer);
        assert_eq!(Role::from_raw("comment_moderator"), Role::CommentsModerator);
        assert_eq!(Role::from_raw("data_analyst"), Role::Analyst);
        assert_eq!(Role::from_raw("ad_manager"), Role::Advertiser);
        assert_eq!(Role::from_raw("subscriber"), Role::Reader);
    }

    #[test]
    fn test_unknown_and_empty_input_degrades_to_guest() {
        assert_eq!(Role::from_raw(""), Role::Guest);
        assert_eq!(Role::from_raw("root"), Role::Guest);
        assert_eq!(Role::from_raw("ADMIN"), Role::Guest);
        assert_eq!(Role::from_raw("editor "), Role::Guest);
        assert_eq!(Role::from_raw_many::<String>(&[]), Role::Guest);
    }

    #[test]
    fn test_role_list_folds_to_most_privileged() {
        let roles = vec![
            "reader".to_string(),
            "columnist".to_string(),
            "chief_editor".to_string(),
        ];
        assert_eq!(Role::from_raw_many(&roles), Role::Editor);

        let roles = vec!["nonsense".to_string(), "subscriber".to_string()];
        assert_eq!(Role::from_raw_many(&roles), Role::Reader);
    }

    #[test]
    fn test_canonical_role_from_session_user() {
        let user = UserPublic {
            id: uuid::Uuid::nil(),
            email: "desk@sabq.example".to_string(),
            name: "Desk".to_string(),
            roles: vec!["journalist".to_string(), "fact_checker".to_string()],
            permissions: vec![],
            avatar_url: None,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(user.canonical_role(), Role::Reviewer);
    }

    #[test]
    fn test_role_display_round_trips_through_from_raw() {
        for role in [
            Role::Reader,
            Role::Author,
            Role::Reporter,
            Role::OpinionAuthor,
            Role::Reviewer,
            Role::CommentsModerator,
            Role::Analyst,
            Role::Advertiser,
            Role::Editor,
            Role::Admin,
        ] {
            assert_eq!(Role::from_raw(role.as_str()), role);
        }
    }

    #[test]
    fn test_locale_from_path_prefixes() {
        assert_eq!(Locale::from_path("/"), Locale::Ar);
        assert_eq!(Locale::from_path("/article/x"), Locale::Ar);
        assert_eq!(Locale::from_path("/en"), Locale::En);
        assert_eq!(Locale::from_path("/en/article/x"), Locale::En);
        assert_eq!(Locale::from_path("/ur/dashboard"), Locale::Ur);
        // Prefix only counts on a segment boundary.
        assert_eq!(Locale::from_path("/energy"), Locale::Ar);
        assert_eq!(Locale::from_path("/urdu-news"), Locale::Ar);
    }

    #[test]
    fn test_locale_reader_paths_match_registered_routes() {
        assert_eq!(Locale::Ar.article_path("x"), "/article/x");
        assert_eq!(Locale::En.article_path("x"), "/en/article/x");
        assert_eq!(Locale::Ur.article_path("x"), "/ur/article/x");
        assert_eq!(Locale::Ar.category_path("sports"), "/category/sports");
        assert_eq!(Locale::En.category_path("sports"), "/en/category/sports");
        assert_eq!(Locale::Ur.category_path("sports"), "/ur/category/sports");

        // The generated links resolve back to the locale they came from.
        for locale in [Locale::Ar, Locale::En, Locale::Ur] {
            assert_eq!(Locale::from_path(&locale.category_path("sports")), locale);
            assert_eq!(Locale::from_path(&locale.article_path("x")), locale);
        }
    }

    #[test]
    fn test_locale_direction_and_home() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::Ur.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Ar.home_path(), "/");
        assert_eq!(Locale::Ur.home_path(), "/ur");
        assert_eq!(Locale::Ur.home_label(), "ہوم");
    }
}
