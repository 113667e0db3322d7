use leptos::prelude::*;

use super::shell::LayoutShell;
use crate::nav::urdu_tree;
use crate::services::SIDEBAR_KEY_URDU;

/// Urdu editorial dashboard shell under `/ur/dashboard`.
#[component]
pub fn UrduLayout() -> impl IntoView {
    view! {
        <LayoutShell
            tree=urdu_tree()
            storage_key=SIDEBAR_KEY_URDU
            brand="اردو ڈیش بورڈ"
            login_path="/login"
            logout_label="لاگ آؤٹ"
        />
    }
}
