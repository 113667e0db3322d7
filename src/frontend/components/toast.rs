use leptos::prelude::*;

use std::time::Duration;

const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
}

/// Context-provided toast queue. Mutation failures surface here instead of
/// crashing the view; entries expire on their own.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            list: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Error);
    }

    fn push(&self, message: String, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.list.update(|toasts| {
            toasts.push(Toast {
                id,
                message,
                variant,
            })
        });

        let list = self.list;
        set_timeout(
            move || list.update(|toasts| toasts.retain(|t| t.id != id)),
            TOAST_TTL,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let list = toasts.list;

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For each=move || list.get() key=|toast| toast.id let:toast>
                {
                    let variant_class = match toast.variant {
                        ToastVariant::Success => "toast toast-success",
                        ToastVariant::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=variant_class>
                            <span>{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
