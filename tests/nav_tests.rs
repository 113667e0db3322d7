mod common;

#[cfg(test)]
pub mod nav_tests {
    use super::common::*;

    use sabq::models::*;
    use sabq::nav::*;

    #[test]
    fn test_resolve_is_deterministic() {
        let tree = fixture_tree();
        let flags = all_flags();
        let input = input(Role::Admin, &flags, "/app/a/one");

        let first = resolve(&tree, &input);
        let second = resolve(&tree, &input);

        assert_eq!(first, second);
    }

    #[test]
    fn test_filtering_hides_role_restricted_items() {
        let tree = fixture_tree();
        let flags = no_flags();

        let guest = resolve(&tree, &input(Role::Guest, &flags, "/app"));
        let ids = collect_ids(&guest.tree_filtered);
        assert!(ids.contains(&"root-home"));
        assert!(!ids.contains(&"parent-a"));
        assert!(!ids.contains(&"child-a1"));

        let editor = resolve(&tree, &input(Role::Editor, &flags, "/app"));
        let ids = collect_ids(&editor.tree_filtered);
        assert!(ids.contains(&"parent-a"));
        assert!(ids.contains(&"child-a1"));
        assert!(!ids.contains(&"child-a2"));
    }

    #[test]
    fn test_pathless_parent_dropped_when_children_filtered() {
        let tree = fixture_tree();
        let flags = no_flags();

        // parent-b has no path of its own and only an admin child.
        let editor = resolve(&tree, &input(Role::Editor, &flags, "/app"));
        assert!(!collect_ids(&editor.tree_filtered).contains(&"parent-b"));

        let admin = resolve(&tree, &input(Role::Admin, &flags, "/app"));
        assert!(collect_ids(&admin.tree_filtered).contains(&"parent-b"));
    }

    #[test]
    fn test_flag_gated_item_requires_enabled_flag() {
        let tree = fixture_tree();

        let off = no_flags();
        let resolved = resolve(&tree, &input(Role::Admin, &off, "/app"));
        assert!(!collect_ids(&resolved.tree_filtered).contains(&"flagged"));

        let mut explicit_off = no_flags();
        explicit_off.insert("beta".to_string(), false);
        let resolved = resolve(&tree, &input(Role::Admin, &explicit_off, "/app"));
        assert!(!collect_ids(&resolved.tree_filtered).contains(&"flagged"));

        let on = all_flags();
        let resolved = resolve(&tree, &input(Role::Admin, &on, "/app"));
        assert!(collect_ids(&resolved.tree_filtered).contains(&"flagged"));
    }

    #[test]
    fn test_permission_gate_only_enforced_with_grants() {
        let tree = fixture_tree();
        let flags = no_flags();

        // No grant list supplied: the item is visible.
        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app"));
        assert!(collect_ids(&resolved.tree_filtered).contains(&"gated"));

        // Grants supplied without the required one: hidden.
        let grants: Vec<String> = vec!["publish".to_string()];
        let mut with_grants = input(Role::Admin, &flags, "/app");
        with_grants.permissions = Some(&grants);
        let resolved = resolve(&tree, &with_grants);
        assert!(!collect_ids(&resolved.tree_filtered).contains(&"gated"));

        // Matching grant: visible again.
        let grants: Vec<String> = vec!["manage".to_string()];
        let mut with_grants = input(Role::Admin, &flags, "/app");
        with_grants.permissions = Some(&grants);
        let resolved = resolve(&tree, &with_grants);
        assert!(collect_ids(&resolved.tree_filtered).contains(&"gated"));
    }

    #[test]
    fn test_exact_match_beats_longer_prefix_logic() {
        let tree = fixture_tree();
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/a"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("parent-a"));

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/a/one"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("child-a1"));
    }

    #[test]
    fn test_prefix_match_picks_deepest_registered_item() {
        let tree = fixture_tree();
        let flags = no_flags();

        // No item registers the edit path; its closest ancestor highlights.
        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/a/one/42"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("child-a1"));

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/a/other"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("parent-a"));
    }

    #[test]
    fn test_prefix_match_respects_segment_boundary() {
        let tree = fixture_tree();
        let flags = no_flags();

        // "/app/ab" shares characters with "/app/a" but not a segment.
        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/ab"));
        assert_ne!(resolved.active_item.as_ref().map(|i| i.id), Some("parent-a"));
    }

    #[test]
    fn test_first_declared_item_wins_path_ties() {
        let tree = fixture_tree();
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/dup"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("dup-first"));

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/dup/detail"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("dup-first"));
    }

    #[test]
    fn test_unmatched_path_yields_no_active_item() {
        let tree = fixture_tree();
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/elsewhere"));
        assert!(resolved.active_item.is_none());
        assert!(resolved.parents.is_empty());
    }

    #[test]
    fn test_parents_exclude_active_item_and_dividers() {
        let tree = fixture_tree();
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app/a/one"));
        let parent_ids: Vec<_> = resolved.parents.iter().map(|p| p.id).collect();
        assert_eq!(parent_ids, vec!["parent-a"]);
        assert!(resolved.parents.iter().all(|p| !p.divider));
        assert!(!parent_ids.contains(&"child-a1"));
    }

    #[test]
    fn test_top_level_active_item_has_no_parents() {
        let tree = fixture_tree();
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("root-home"));
        assert!(resolved.parents.is_empty());
    }

    #[test]
    fn test_privilege_monotonicity_on_dashboard_tree() {
        let flags = all_flags();
        let ladder = [Role::Guest, Role::Author, Role::Editor, Role::Admin];

        let mut previous: Vec<&'static str> = Vec::new();
        for role in ladder {
            let resolved = resolve(dashboard_tree(), &input(role, &flags, "/dashboard"));
            let visible = collect_ids(&resolved.tree_filtered);
            for id in &previous {
                assert!(
                    visible.contains(id),
                    "{role} lost access to {id} held by a lesser role"
                );
            }
            previous = visible;
        }
    }

    #[test]
    fn test_unknown_role_sees_guest_dashboard() {
        let flags = all_flags();
        let garbage = Role::from_raw("intern_of_the_month");
        assert_eq!(garbage, Role::Guest);

        let as_garbage = resolve(dashboard_tree(), &input(garbage, &flags, "/dashboard"));
        let as_guest = resolve(dashboard_tree(), &input(Role::Guest, &flags, "/dashboard"));
        assert_eq!(as_garbage.tree_filtered, as_guest.tree_filtered);
    }

    #[test]
    fn test_reporter_article_edit_highlights_articles() {
        let flags = no_flags();
        let resolved = resolve(
            dashboard_tree(),
            &input(Role::Reporter, &flags, "/dashboard/articles/edit/123"),
        );

        assert_eq!(
            resolved.active_item.as_ref().map(|i| i.id),
            Some("dashboard-articles")
        );
        assert!(resolved.parents.is_empty());
    }

    #[test]
    fn test_urdu_tree_resolution_for_aliased_admin() {
        let flags = all_flags();
        let role = Role::from_raw("system_admin");
        assert_eq!(role, Role::Admin);

        let resolved = resolve(urdu_tree(), &input(role, &flags, "/ur/dashboard"));
        assert_eq!(resolved.active_item.as_ref().map(|i| i.id), Some("urdu-home"));

        let canonical = resolve(urdu_tree(), &input(Role::Admin, &flags, "/ur/dashboard"));
        assert_eq!(resolved.tree_filtered, canonical.tree_filtered);
    }

    #[test]
    fn test_sidebar_groups_split_on_dividers() {
        let tree = fixture_tree();
        let flags = all_flags();
        let resolved = resolve(&tree, &input(Role::Admin, &flags, "/app"));

        let groups = sidebar_groups(&resolved.tree_filtered);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key(), "main");
        assert!(groups[0].header.is_none());
        assert_eq!(groups[1].key(), "div-a");
        assert!(groups[1].items.iter().all(|item| !item.divider));
    }

    #[test]
    fn test_sidebar_groups_drop_emptied_sections() {
        let tree = vec![
            NavItem::divider("div-admin", "admin-section"),
            NavItem::leaf("only-admin", "only-admin")
                .path("/x")
                .roles(&[Role::Admin]),
        ];
        let flags = no_flags();

        let resolved = resolve(&tree, &input(Role::Reader, &flags, "/x"));
        assert!(sidebar_groups(&resolved.tree_filtered).is_empty());
    }
}
