use leptos::prelude::*;

/// Resolves a symbolic icon identifier to its glyph. The nav model stays free
/// of view types; this is the only place identifiers become markup.
pub fn icon_glyph(id: &str) -> &'static str {
    match id {
        "home" => "🏠",
        "newspaper" => "📰",
        "pencil" => "✏️",
        "check" => "✅",
        "folder" => "🗂️",
        "chat" => "💬",
        "sparkles" => "✨",
        "chart" => "📈",
        "megaphone" => "📣",
        "phone" => "📱",
        "bell" => "🔔",
        "cog" => "⚙️",
        "image" => "🖼️",
        _ => "•",
    }
}

#[component]
pub fn Icon(#[prop(into)] id: String) -> impl IntoView {
    view! { <span class="nav-icon" aria-hidden="true">{icon_glyph(&id)}</span> }
}
