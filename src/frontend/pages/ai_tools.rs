//! AI tools workbench: summarize, translate, SEO and fact-check.

use leptos::prelude::*;

use crate::api;
use crate::frontend::components::Toasts;
use crate::models::{AiTextRequest, AiTranslateRequest, Locale};

#[component]
pub fn AiToolsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"أدوات الذكاء الاصطناعي"</h1>
            <div class="ai-tools-grid">
                <SummarizeTool/>
                <TranslateTool/>
                <SeoTool/>
                <FactCheckTool/>
            </div>
        </div>
    }
}

#[component]
fn SummarizeTool() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let input = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let run = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let request = AiTextRequest {
                text: input.get_untracked(),
                locale: Some(Locale::Ar),
            };
            match api::ai_summarize(request).await {
                Ok(response) => output.set(response.output),
                Err(_) => toasts.error("تعذر التلخيص"),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="ai-tool">
            <h2>"تلخيص"</h2>
            <textarea
                rows="6"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <button class="btn-primary" on:click=run disabled=move || busy.get()>
                {move || if busy.get() { "…" } else { "لخّص" }}
            </button>
            <Show when=move || !output.with(String::is_empty)>
                <p class="ai-output">{move || output.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn TranslateTool() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let input = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let target = RwSignal::new(Locale::En);
    let busy = RwSignal::new(false);

    let run = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let request = AiTranslateRequest {
                text: input.get_untracked(),
                source: Locale::Ar,
                target: target.get_untracked(),
            };
            match api::ai_translate(request).await {
                Ok(response) => output.set(response.output),
                Err(_) => toasts.error("تعذرت الترجمة"),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="ai-tool">
            <h2>"ترجمة"</h2>
            <textarea
                rows="6"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <div class="form-inline">
                <label>"إلى:"</label>
                <select on:change=move |ev| {
                    target.set(match event_target_value(&ev).as_str() {
                        "ur" => Locale::Ur,
                        _ => Locale::En,
                    })
                }>
                    <option value="en">"English"</option>
                    <option value="ur">"اردو"</option>
                </select>
                <button class="btn-primary" on:click=run disabled=move || busy.get()>
                    {move || if busy.get() { "…" } else { "ترجم" }}
                </button>
            </div>
            <Show when=move || !output.with(String::is_empty)>
                <p class="ai-output">{move || output.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn SeoTool() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let input = RwSignal::new(String::new());
    let suggestion = RwSignal::new(None::<crate::models::SeoSuggestion>);
    let busy = RwSignal::new(false);

    let run = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let request = AiTextRequest {
                text: input.get_untracked(),
                locale: Some(Locale::Ar),
            };
            match api::ai_seo_generate(request).await {
                Ok(response) => suggestion.set(Some(response)),
                Err(_) => toasts.error("تعذر توليد بيانات السيو"),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="ai-tool">
            <h2>"تحسين محركات البحث"</h2>
            <textarea
                rows="6"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <button class="btn-primary" on:click=run disabled=move || busy.get()>
                {move || if busy.get() { "…" } else { "ولّد" }}
            </button>
            {move || {
                suggestion.get().map(|s| {
                    view! {
                        <div class="ai-output">
                            <p><strong>{s.title.clone()}</strong></p>
                            <p>{s.description.clone()}</p>
                            <p class="seo-keywords">{s.keywords.join("، ")}</p>
                        </div>
                    }
                })
            }}
        </section>
    }
}

#[component]
fn FactCheckTool() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let input = RwSignal::new(String::new());
    let claims = RwSignal::new(Vec::<crate::models::FactCheckClaim>::new());
    let busy = RwSignal::new(false);

    let run = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let request = AiTextRequest {
                text: input.get_untracked(),
                locale: Some(Locale::Ar),
            };
            match api::ai_fact_check(request).await {
                Ok(response) => claims.set(response.claims),
                Err(_) => toasts.error("تعذر التحقق"),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="ai-tool">
            <h2>"تدقيق الحقائق"</h2>
            <textarea
                rows="6"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <button class="btn-primary" on:click=run disabled=move || busy.get()>
                {move || if busy.get() { "…" } else { "دقّق" }}
            </button>
            <ul class="claim-list">
                <For each=move || claims.get() key=|claim| claim.claim.clone() let:claim>
                    <li>
                        <span class="claim-text">{claim.claim.clone()}</span>
                        <span class="claim-verdict">{claim.verdict.clone()}</span>
                        <span class="claim-confidence">
                            {format!("{:.0}%", claim.confidence * 100.0)}
                        </span>
                    </li>
                </For>
            </ul>
        </section>
    }
}
