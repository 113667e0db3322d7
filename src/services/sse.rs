//! Server-sent event consumption with explicit reconnect handling.
//!
//! The reconnect logic is a pure state machine so it can be tested without a
//! browser: callers feed it lifecycle events and execute the effects it
//! returns. The browser wiring in [`browser`] drives it with a real
//! `EventSource` and a 5-second retry timer.

use std::time::Duration;

/// Fixed back-off between reconnect attempts.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Backoff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnEvent {
    /// Consumer mounted and wants a subscription.
    Mount,
    /// `onopen` fired.
    Opened,
    /// `onerror` fired or opening the stream failed outright.
    Failed,
    /// The back-off timer elapsed.
    RetryDue,
    /// Consumer unmounted.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnEffect {
    OpenStream,
    CloseStream,
    ScheduleRetry(Duration),
}

/// Reconnecting subscription state. Invariants enforced by the transitions:
/// at most one open stream, and at most one pending retry timer.
#[derive(Debug, Clone, Default)]
pub struct Reconnector {
    state: ConnState,
}

impl Reconnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnState {
        self.state
    }

    /// Advances the machine and returns the effects to execute, in order.
    /// Events that do not apply in the current state are ignored, which is
    /// what rules out duplicate streams and duplicate timers.
    pub fn handle(&mut self, event: ConnEvent) -> Vec<ConnEffect> {
        use ConnEvent::*;
        use ConnState::*;

        match (self.state, event) {
            (Disconnected, Mount) => {
                self.state = Connecting;
                vec![ConnEffect::OpenStream]
            }
            (Connecting, Opened) => {
                self.state = Connected;
                vec![]
            }
            (Connecting | Connected, Failed) => {
                self.state = Backoff;
                vec![
                    ConnEffect::CloseStream,
                    ConnEffect::ScheduleRetry(RECONNECT_DELAY),
                ]
            }
            (Backoff, RetryDue) => {
                self.state = Connecting;
                vec![ConnEffect::OpenStream]
            }
            (Disconnected, _) => vec![],
            (_, Unmount) => {
                self.state = Disconnected;
                vec![ConnEffect::CloseStream]
            }
            // Late timer after a reconnect already happened, repeated error
            // bursts while backing off, double mounts: all no-ops.
            _ => vec![],
        }
    }
}

#[cfg(feature = "hydrate")]
pub mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{EventSource, MessageEvent};

    use super::{ConnEffect, ConnEvent, Reconnector};
    use crate::models::Notification;

    /// Live `/api/notifications/stream` subscription. Owns the event source
    /// and its callbacks; dropping it alone does not close the stream, call
    /// [`NotificationStream::close`] on unmount.
    pub struct NotificationStream {
        inner: Rc<RefCell<Inner>>,
    }

    struct Inner {
        url: String,
        machine: Reconnector,
        source: Option<EventSource>,
        // Kept alive for as long as the source may fire them.
        _callbacks: Vec<Closure<dyn FnMut(JsValue)>>,
        on_message: Rc<dyn Fn(Notification)>,
    }

    impl NotificationStream {
        pub fn connect(url: &str, on_message: impl Fn(Notification) + 'static) -> Self {
            let inner = Rc::new(RefCell::new(Inner {
                url: url.to_string(),
                machine: Reconnector::new(),
                source: None,
                _callbacks: Vec::new(),
                on_message: Rc::new(on_message),
            }));
            dispatch(&inner, ConnEvent::Mount);
            NotificationStream { inner }
        }

        pub fn close(&self) {
            dispatch(&self.inner, ConnEvent::Unmount);
        }
    }

    fn dispatch(inner: &Rc<RefCell<Inner>>, event: ConnEvent) {
        let effects = inner.borrow_mut().machine.handle(event);
        for effect in effects {
            match effect {
                ConnEffect::OpenStream => open_stream(inner),
                ConnEffect::CloseStream => {
                    let mut guard = inner.borrow_mut();
                    if let Some(source) = guard.source.take() {
                        source.close();
                    }
                    guard._callbacks.clear();
                }
                ConnEffect::ScheduleRetry(delay) => {
                    let inner = Rc::clone(inner);
                    leptos::prelude::set_timeout(
                        move || dispatch(&inner, ConnEvent::RetryDue),
                        delay,
                    );
                }
            }
        }
    }

    fn open_stream(inner: &Rc<RefCell<Inner>>) {
        let url = inner.borrow().url.clone();
        let source = match EventSource::new(&url) {
            Ok(source) => source,
            Err(_) => {
                dispatch(inner, ConnEvent::Failed);
                return;
            }
        };

        let on_open = {
            let inner = Rc::clone(inner);
            Closure::wrap(Box::new(move |_: JsValue| {
                dispatch(&inner, ConnEvent::Opened);
            }) as Box<dyn FnMut(JsValue)>)
        };
        source.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_error = {
            let inner = Rc::clone(inner);
            Closure::wrap(Box::new(move |_: JsValue| {
                dispatch(&inner, ConnEvent::Failed);
            }) as Box<dyn FnMut(JsValue)>)
        };
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let on_message = {
            let inner = Rc::clone(inner);
            Closure::wrap(Box::new(move |event: JsValue| {
                let Ok(event) = event.dyn_into::<MessageEvent>() else {
                    return;
                };
                let Some(data) = event.data().as_string() else {
                    return;
                };
                match serde_json::from_str::<Notification>(&data) {
                    Ok(notification) => {
                        let handler = Rc::clone(&inner.borrow().on_message);
                        handler(notification);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "dropping undecodable SSE payload");
                    }
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let mut guard = inner.borrow_mut();
        guard.source = Some(source);
        guard._callbacks = vec![on_open, on_error, on_message];
    }
}
