mod common;

#[cfg(test)]
pub mod storage_tests {
    use super::common::*;

    use sabq::common::StorageError;
    use sabq::models::{Announcement, AnnouncementSeverity};
    use sabq::services::*;

    #[test]
    fn test_failing_store_defaults_to_expanded() {
        let prefs = SidebarPrefs::load(&FailingStore, SIDEBAR_KEY_DASHBOARD);
        assert!(!prefs.is_collapsed("main"));
        assert!(!prefs.is_collapsed("divider-content"));

        // Saving into a failing backend must not panic either.
        prefs.save(&FailingStore, SIDEBAR_KEY_DASHBOARD);
    }

    #[test]
    fn test_corrupt_payload_defaults_to_expanded() {
        let store = MemoryStore::new();
        store.set(SIDEBAR_KEY_URDU, "not json {{{");

        let prefs = SidebarPrefs::load(&store, SIDEBAR_KEY_URDU);
        assert_eq!(prefs, SidebarPrefs::default());
    }

    #[test]
    fn test_try_load_reports_corrupt_payload() {
        let store = MemoryStore::new();
        store.set(SIDEBAR_KEY_DASHBOARD, "[1,2,3]");

        let err = SidebarPrefs::try_load(&store, SIDEBAR_KEY_DASHBOARD);
        assert!(matches!(err, Err(StorageError::Corrupt(_))));

        // An absent key is the default state, not an error.
        let fresh = SidebarPrefs::try_load(&store, SIDEBAR_KEY_URDU);
        assert_eq!(fresh.ok(), Some(SidebarPrefs::default()));
    }

    #[test]
    fn test_toggle_save_reload_round_trip() {
        let store = MemoryStore::new();
        let mut prefs = SidebarPrefs::load(&store, SIDEBAR_KEY_DASHBOARD);

        prefs.toggle("divider-ads");
        assert!(prefs.is_collapsed("divider-ads"));
        prefs.save(&store, SIDEBAR_KEY_DASHBOARD);

        let reloaded = SidebarPrefs::load(&store, SIDEBAR_KEY_DASHBOARD);
        assert!(reloaded.is_collapsed("divider-ads"));
        assert!(!reloaded.is_collapsed("divider-content"));
    }

    #[test]
    fn test_double_toggle_restores_expanded() {
        let store = MemoryStore::new();
        let mut prefs = SidebarPrefs::load(&store, SIDEBAR_KEY_PUBLISHER);

        prefs.toggle("main");
        prefs.toggle("main");
        assert!(!prefs.is_collapsed("main"));
    }

    #[test]
    fn test_layout_keys_do_not_collide() {
        let store = MemoryStore::new();

        let mut dashboard = SidebarPrefs::load(&store, SIDEBAR_KEY_DASHBOARD);
        dashboard.toggle("divider-system");
        dashboard.save(&store, SIDEBAR_KEY_DASHBOARD);

        let urdu = SidebarPrefs::load(&store, SIDEBAR_KEY_URDU);
        assert!(!urdu.is_collapsed("divider-system"));
    }

    #[test]
    fn test_announcement_dismissal_markers() {
        let store = MemoryStore::new();
        let key = "announcement_dismissed_42";

        assert!(!announcement_dismissed(&store, key));
        mark_announcement(&store, key);
        assert!(announcement_dismissed(&store, key));

        // Other announcements stay unaffected.
        assert!(!announcement_dismissed(&store, "announcement_dismissed_43"));
        assert!(!announcement_dismissed(&FailingStore, key));
    }

    #[test]
    fn test_viewed_marker_does_not_dismiss() {
        let store = MemoryStore::new();
        let announcement = Announcement {
            id: uuid::Uuid::nil(),
            title: "صيانة مجدولة".to_string(),
            body: "توقف مؤقت الليلة".to_string(),
            severity: AnnouncementSeverity::Info,
            starts_at: None,
            ends_at: None,
        };

        // Re-marking the view is idempotent and never flips dismissal.
        mark_announcement(&store, &announcement.viewed_key());
        mark_announcement(&store, &announcement.viewed_key());
        assert!(announcement_dismissed(&store, &announcement.viewed_key()));
        assert!(!announcement_dismissed(&store, &announcement.dismissed_key()));

        mark_announcement(&store, &announcement.dismissed_key());
        assert!(announcement_dismissed(&store, &announcement.dismissed_key()));
    }
}
