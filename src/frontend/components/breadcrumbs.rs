use leptos::prelude::*;

use crate::models::{Locale, ResolvedNavState};

/// Home + ancestor chain + active item, localized by the language prefix of
/// the current path. Renders nothing when no nav item matches.
#[component]
pub fn Breadcrumbs(
    resolved: Memo<ResolvedNavState>,
    locale: Memo<Locale>,
) -> impl IntoView {
    view! {
        <Show when=move || resolved.with(|r| r.active_item.is_some())>
            <nav class="breadcrumbs" aria-label="breadcrumb">
                <ol>
                    <li>
                        <a href=move || locale.get().home_path()>
                            {move || locale.get().home_label()}
                        </a>
                    </li>
                    <For
                        each=move || resolved.with(|r| r.parents.clone())
                        key=|item| item.id
                        let:item
                    >
                        {
                            let href = item.path.unwrap_or_else(|| locale.get_untracked().home_path());
                            view! {
                                <li>
                                    <a href=href>{move || item.label_for(locale.get())}</a>
                                </li>
                            }
                        }
                    </For>
                    <li aria-current="page" class="breadcrumb-current">
                        {move || {
                            resolved.with(|r| {
                                r.active_item
                                    .as_ref()
                                    .map(|item| item.label_for(locale.get()))
                            })
                        }}
                    </li>
                </ol>
            </nav>
        </Show>
    }
}
