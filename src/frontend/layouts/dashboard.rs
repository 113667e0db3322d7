use leptos::prelude::*;

use super::shell::LayoutShell;
use crate::nav::dashboard_tree;
use crate::services::SIDEBAR_KEY_DASHBOARD;

/// Main (Arabic) editorial dashboard shell under `/dashboard`.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <LayoutShell
            tree=dashboard_tree()
            storage_key=SIDEBAR_KEY_DASHBOARD
            brand="لوحة التحرير"
            login_path="/login"
            logout_label="تسجيل الخروج"
        />
    }
}
