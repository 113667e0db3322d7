//! WhatsApp ingestion administration: tokens and the inbound message log.

use leptos::prelude::*;
use uuid::Uuid;

use crate::api;
use crate::frontend::components::Toasts;
use crate::models::IngestOutcome;

fn outcome_label(outcome: IngestOutcome) -> &'static str {
    match outcome {
        IngestOutcome::Accepted => "مقبول",
        IngestOutcome::Rejected => "مرفوض",
        IngestOutcome::DraftCreated => "أُنشئت مسودة",
    }
}

#[component]
pub fn IngestPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let tokens = Resource::new(
        || (),
        |_| async { api::ingest_tokens_list().await.unwrap_or_default() },
    );
    let logs = Resource::new(
        || (),
        |_| async { api::ingest_logs_list().await.unwrap_or_default() },
    );

    let label = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    // Token value is shown exactly once, right after creation.
    let fresh_token = RwSignal::new(None::<String>);

    let create = move |_| {
        let phone_value = phone.get_untracked();
        let phone_value = (!phone_value.trim().is_empty()).then_some(phone_value);
        leptos::task::spawn_local(async move {
            match api::ingest_token_create(label.get_untracked(), phone_value).await {
                Ok(token) => {
                    fresh_token.set(token.token);
                    label.set(String::new());
                    phone.set(String::new());
                    tokens.refetch();
                }
                Err(_) => toasts.error("تعذر إنشاء الرمز"),
            }
        });
    };

    let revoke = move |id: Uuid| {
        leptos::task::spawn_local(async move {
            match api::ingest_token_revoke(id).await {
                Ok(()) => {
                    toasts.success("تم إلغاء الرمز");
                    tokens.refetch();
                }
                Err(_) => toasts.error("تعذر إلغاء الرمز"),
            }
        });
    };

    view! {
        <div class="page">
            <h1>"استقبال واتساب"</h1>

            <section class="token-create">
                <h2>"رمز جديد"</h2>
                <div class="form-inline">
                    <input
                        type="text"
                        placeholder="التسمية"
                        prop:value=move || label.get()
                        on:input=move |ev| label.set(event_target_value(&ev))
                    />
                    <input
                        type="tel"
                        placeholder="رقم الهاتف (اختياري)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="btn-primary" on:click=create>"إنشاء"</button>
                </div>
                {move || {
                    fresh_token.get().map(|token| {
                        view! {
                            <p class="token-reveal">
                                "احفظ هذا الرمز الآن، لن يظهر مرة أخرى: "
                                <code>{token}</code>
                            </p>
                        }
                    })
                }}
            </section>

            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <section>
                    <h2>"الرموز"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"التسمية"</th>
                                <th>"الهاتف"</th>
                                <th>"الحالة"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || tokens.get().unwrap_or_default()
                                key=|token| token.id
                                let:token
                            >
                                {
                                    let id = token.id;
                                    let revoked = token.is_revoked();
                                    view! {
                                        <tr class:revoked=revoked>
                                            <td>{token.label.clone()}</td>
                                            <td>{token.phone_number.clone().unwrap_or_default()}</td>
                                            <td>{if revoked { "ملغى" } else { "نشط" }}</td>
                                            <td>
                                                {(!revoked).then(|| {
                                                    view! {
                                                        <button class="btn-danger" on:click=move |_| revoke(id)>
                                                            "إلغاء"
                                                        </button>
                                                    }
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </section>

                <section>
                    <h2>"سجل الرسائل"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"المرسل"</th>
                                <th>"الرمز"</th>
                                <th>"النتيجة"</th>
                                <th>"الملخص"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || logs.get().unwrap_or_default()
                                key=|entry| entry.id
                                let:entry
                            >
                                <tr>
                                    <td>{entry.sender.clone()}</td>
                                    <td>{entry.token_label.clone()}</td>
                                    <td>{outcome_label(entry.outcome)}</td>
                                    <td>{entry.summary.clone().unwrap_or_default()}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </section>
            </Suspense>
        </div>
    }
}
