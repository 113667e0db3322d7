use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found" dir="rtl">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"الصفحة غير موجودة"</p>
            <a href="/" class="btn-primary">"العودة إلى الرئيسية"</a>
        </div>
    }
}
