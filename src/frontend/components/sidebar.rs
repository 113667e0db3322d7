use leptos::prelude::*;

use crate::frontend::components::icon::Icon;
use crate::models::{Locale, NavItem, ResolvedNavState};
use crate::nav::{sidebar_groups, NavGroup};
use crate::services::{default_store, SidebarPrefs};

/// Grouped dashboard sidebar. Contiguous items form a group; each divider
/// starts the next one. Group collapse state is persisted under the
/// layout-specific storage key and restored on mount; storage failures just
/// leave every group expanded.
#[component]
pub fn Sidebar(
    resolved: Memo<ResolvedNavState>,
    locale: Memo<Locale>,
    storage_key: &'static str,
    #[prop(into)] brand: String,
) -> impl IntoView {
    let prefs = RwSignal::new(SidebarPrefs::load(&*default_store(), storage_key));
    let groups = Memo::new(move |_| resolved.with(|r| sidebar_groups(&r.tree_filtered)));
    let active_id = Memo::new(move |_| {
        resolved.with(|r| r.active_item.as_ref().map(|item| item.id))
    });

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="sidebar-logo">"سبق"</span>
                <span class="sidebar-title">{brand}</span>
            </div>
            <nav class="sidebar-nav">
                <For each=move || groups.get() key=|group| group.key() let:group>
                    <SidebarGroup group=group prefs=prefs storage_key=storage_key locale=locale active_id=active_id/>
                </For>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarGroup(
    group: NavGroup,
    prefs: RwSignal<SidebarPrefs>,
    storage_key: &'static str,
    locale: Memo<Locale>,
    active_id: Memo<Option<&'static str>>,
) -> impl IntoView {
    let key = group.key();
    let collapsed = move || prefs.with(|p| p.is_collapsed(key));
    let toggle = move |_| {
        prefs.update(|p| p.toggle(key));
        prefs.with_untracked(|p| p.save(&*default_store(), storage_key));
    };
    let header = group.header.clone();
    let items = group.items.clone();

    view! {
        <section class="sidebar-group" class:collapsed=collapsed>
            {header.map(|divider| {
                view! {
                    <button class="sidebar-group-header" on:click=toggle>
                        <span>{move || divider.label_for(locale.get())}</span>
                        <span class="sidebar-group-chevron">
                            {move || if collapsed() { "▸" } else { "▾" }}
                        </span>
                    </button>
                }
            })}
            <Show when=move || !collapsed()>
                <ul class="sidebar-items">
                    {items
                        .iter()
                        .map(|item| {
                            view! { <SidebarItem item=item.clone() locale=locale active_id=active_id/> }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </section>
    }
}

/// One nav entry plus its direct children. The shipped trees are two levels
/// deep at most, so children render as a flat sub-list.
#[component]
fn SidebarItem(
    item: NavItem,
    locale: Memo<Locale>,
    active_id: Memo<Option<&'static str>>,
) -> impl IntoView {
    let id = item.id;
    let is_active = move || active_id.get() == Some(id);
    let children = item.children.clone();
    let label_item = item.clone();

    view! {
        <li class="sidebar-item" class:active=is_active>
            <a href=item.path.unwrap_or("#")>
                {item.icon.map(|icon| view! { <Icon id=icon/> })}
                <span>{move || label_item.label_for(locale.get())}</span>
            </a>
            {(!children.is_empty()).then(|| {
                view! {
                    <ul class="sidebar-subitems">
                        {children
                            .into_iter()
                            .map(|child| {
                                let child_id = child.id;
                                let child_active = move || active_id.get() == Some(child_id);
                                let child_label = child.clone();
                                view! {
                                    <li class="sidebar-item" class:active=child_active>
                                        <a href=child.path.unwrap_or("#")>
                                            {child.icon.map(|icon| view! { <Icon id=icon/> })}
                                            <span>{move || child_label.label_for(locale.get())}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            })}
        </li>
    }
}
