use leptos::prelude::*;
use leptos::form::ActionForm;
use leptos_router::hooks::use_navigate;

use crate::api::Login;
use crate::frontend::AuthContext;

/// Login page. Failures render inline and leave the form intact for
/// resubmission; success refreshes the session resource and enters the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let login_action = ServerAction::<Login>::new();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(Ok(_)) = login_action.value().get() {
            auth.session.refetch();
            navigate("/dashboard", Default::default());
        }
    });

    let error = move || {
        login_action
            .value()
            .get()
            .and_then(|result| result.err())
            .map(|_| "بيانات الدخول غير صحيحة".to_string())
    };

    view! {
        <div class="auth-page" dir="rtl">
            <div class="auth-container">
                <h1>"تسجيل الدخول"</h1>
                <p class="auth-subtitle">"بوابة صحيفة سبق"</p>
                {move || error().map(|message| view! { <p class="auth-error">{message}</p> })}
                <ActionForm action=login_action attr:class="auth-form">
                    <div class="form-group">
                        <label for="email">"البريد الإلكتروني"</label>
                        <input type="email" id="email" name="email" required/>
                    </div>
                    <div class="form-group">
                        <label for="password">"كلمة المرور"</label>
                        <input type="password" id="password" name="password" required/>
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || login_action.pending().get()>
                        {move || if login_action.pending().get() { "جارٍ الدخول…" } else { "دخول" }}
                    </button>
                </ActionForm>
                <a href="/" class="back-link">"العودة إلى الموقع"</a>
            </div>
        </div>
    }
}
