use leptos::prelude::*;

use super::shell::LayoutShell;
use crate::nav::publisher_tree;
use crate::services::SIDEBAR_KEY_PUBLISHER;

/// Advertiser-facing shell under `/publisher`.
#[component]
pub fn PublisherLayout() -> impl IntoView {
    view! {
        <LayoutShell
            tree=publisher_tree()
            storage_key=SIDEBAR_KEY_PUBLISHER
            brand="بوابة المعلنين"
            login_path="/login"
            logout_label="تسجيل الخروج"
        />
    }
}
