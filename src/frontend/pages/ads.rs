//! Advertising pages, shared between the dashboard ads section and the
//! publisher portal.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::api;
use crate::frontend::components::Toasts;
use crate::models::{CampaignDraft, CampaignStatus};

fn status_label(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Draft => "مسودة",
        CampaignStatus::Active => "نشطة",
        CampaignStatus::Paused => "متوقفة",
        CampaignStatus::Completed => "منتهية",
    }
}

fn riyals(halalas: i64) -> String {
    format!("{:.2} ر.س", halalas as f64 / 100.0)
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let campaigns = Resource::new(
        || (),
        |_| async { api::campaigns_list().await.unwrap_or_default() },
    );

    let set_status = move |id: Uuid, status: CampaignStatus| {
        leptos::task::spawn_local(async move {
            match api::campaign_set_status(id, status).await {
                Ok(_) => campaigns.refetch(),
                Err(_) => toasts.error("تعذر تحديث حالة الحملة"),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"الحملات الإعلانية"</h1>
                <a href="/publisher/campaigns/new" class="btn-primary">"حملة جديدة"</a>
            </div>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"الحملة"</th>
                            <th>"المعلن"</th>
                            <th>"الحالة"</th>
                            <th>"الميزانية"</th>
                            <th>"المصروف"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || campaigns.get().unwrap_or_default()
                            key=|campaign| campaign.id
                            let:campaign
                        >
                            {
                                let id = campaign.id;
                                let status = campaign.status;
                                view! {
                                    <tr>
                                        <td>{campaign.name.clone()}</td>
                                        <td>{campaign.advertiser_name.clone()}</td>
                                        <td>{status_label(status)}</td>
                                        <td>{riyals(campaign.budget_halalas)}</td>
                                        <td>{riyals(campaign.spent_halalas)}</td>
                                        <td class="row-actions">
                                            {match status {
                                                CampaignStatus::Active => Some(view! {
                                                    <button on:click=move |_| set_status(id, CampaignStatus::Paused)>
                                                        "إيقاف"
                                                    </button>
                                                }.into_any()),
                                                CampaignStatus::Paused | CampaignStatus::Draft => Some(view! {
                                                    <button on:click=move |_| set_status(id, CampaignStatus::Active)>
                                                        "تفعيل"
                                                    </button>
                                                }.into_any()),
                                                CampaignStatus::Completed => None,
                                            }}
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}

#[component]
pub fn CampaignNewPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let advertiser = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let save = move |_| {
        let parsed_budget = budget.get_untracked().trim().parse::<f64>();
        let Ok(parsed_budget) = parsed_budget else {
            toasts.error("الميزانية غير صالحة");
            return;
        };
        saving.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let draft = CampaignDraft {
                name: name.get_untracked(),
                advertiser_name: advertiser.get_untracked(),
                budget_halalas: (parsed_budget * 100.0) as i64,
                ..Default::default()
            };
            let result = api::campaign_create(draft).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    toasts.success("تم إنشاء الحملة");
                    navigate("/publisher/campaigns", Default::default());
                }
                Err(_) => toasts.error("تعذر إنشاء الحملة"),
            }
        });
    };

    view! {
        <div class="page">
            <h1>"حملة جديدة"</h1>
            <div class="editor-form">
                <div class="form-group">
                    <label for="name">"اسم الحملة"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="advertiser">"المعلن"</label>
                    <input
                        type="text"
                        id="advertiser"
                        prop:value=move || advertiser.get()
                        on:input=move |ev| advertiser.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="budget">"الميزانية (ر.س)"</label>
                    <input
                        type="number"
                        id="budget"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "جارٍ الإنشاء…" } else { "إنشاء" }}
                </button>
            </div>
        </div>
    }
}

/// Campaign drill-down: pick a campaign, inspect its ad groups and their
/// creatives.
#[component]
pub fn CreativesPage() -> impl IntoView {
    let campaigns = Resource::new(
        || (),
        |_| async { api::campaigns_list().await.unwrap_or_default() },
    );
    let selected_campaign = RwSignal::new(None::<Uuid>);
    let selected_group = RwSignal::new(None::<Uuid>);

    let groups = Resource::new(
        move || selected_campaign.get(),
        |campaign| async move {
            match campaign {
                Some(id) => api::ad_groups_list(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        },
    );
    let creatives = Resource::new(
        move || selected_group.get(),
        |group| async move {
            match group {
                Some(id) => api::creatives_list(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        },
    );

    view! {
        <div class="page">
            <h1>"التصاميم"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <div class="drilldown">
                    <ul class="picker-list">
                        <For
                            each=move || campaigns.get().unwrap_or_default()
                            key=|campaign| campaign.id
                            let:campaign
                        >
                            {
                                let id = campaign.id;
                                view! {
                                    <li>
                                        <button
                                            class:selected=move || selected_campaign.get() == Some(id)
                                            on:click=move |_| {
                                                selected_campaign.set(Some(id));
                                                selected_group.set(None);
                                            }
                                        >
                                            {campaign.name.clone()}
                                        </button>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                    <ul class="picker-list">
                        <For
                            each=move || groups.get().unwrap_or_default()
                            key=|group| group.id
                            let:group
                        >
                            {
                                let id = group.id;
                                view! {
                                    <li>
                                        <button
                                            class:selected=move || selected_group.get() == Some(id)
                                            on:click=move |_| selected_group.set(Some(id))
                                        >
                                            {group.name.clone()}
                                        </button>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                    <ul class="creative-list">
                        <For
                            each=move || creatives.get().unwrap_or_default()
                            key=|creative| creative.id
                            let:creative
                        >
                            <li class="creative-card" class:unapproved=!creative.approved>
                                {creative.image_url.clone().map(|url| {
                                    view! { <img src=url alt=""/> }
                                })}
                                <span>{creative.headline.clone()}</span>
                            </li>
                        </For>
                    </ul>
                </div>
            </Suspense>
        </div>
    }
}

#[component]
pub fn PlacementsPage() -> impl IntoView {
    let placements = Resource::new(
        || (),
        |_| async { api::placements_list().await.unwrap_or_default() },
    );

    view! {
        <div class="page">
            <h1>"المواضع الإعلانية"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"الموضع"</th>
                            <th>"اللغة"</th>
                            <th>"الحالة"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || placements.get().unwrap_or_default()
                            key=|placement| placement.id
                            let:placement
                        >
                            <tr>
                                <td>{placement.slot.clone()}</td>
                                <td>
                                    {placement.locale.map(|l| l.code()).unwrap_or("الكل")}
                                </td>
                                <td>{if placement.active { "نشط" } else { "معطّل" }}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}

/// Spend summary per campaign for the publisher portal.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let campaigns = Resource::new(
        || (),
        |_| async { api::campaigns_list().await.unwrap_or_default() },
    );

    view! {
        <div class="page">
            <h1>"التقارير"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"الحملة"</th>
                            <th>"الميزانية"</th>
                            <th>"المصروف"</th>
                            <th>"نسبة الإنفاق"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || campaigns.get().unwrap_or_default()
                            key=|campaign| campaign.id
                            let:campaign
                        >
                            {
                                let ratio = if campaign.budget_halalas > 0 {
                                    campaign.spent_halalas as f64 / campaign.budget_halalas as f64
                                } else {
                                    0.0
                                };
                                view! {
                                    <tr>
                                        <td>{campaign.name.clone()}</td>
                                        <td>{riyals(campaign.budget_halalas)}</td>
                                        <td>{riyals(campaign.spent_halalas)}</td>
                                        <td>{format!("{:.0}%", ratio * 100.0)}</td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}
