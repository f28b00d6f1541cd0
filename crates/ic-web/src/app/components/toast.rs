use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use ic_core::Notice;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    id: u64,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
}

impl ToastMessage {
    pub fn success_notice(notice: &Notice) -> Self {
        Self {
            id: next_toast_id(),
            title: Some(notice.title.clone()),
            message: notice.description.clone(),
            toast_type: ToastType::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: next_toast_id(),
            title: None,
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }

    fn alert_class(&self) -> &'static str {
        match self.toast_type {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }
}

/// Whether the timer started for toast `id` may clear `slot`. A newer toast
/// keeps its own full display time.
fn timer_owns(slot: &Option<ToastMessage>, id: u64) -> bool {
    slot.as_ref().is_some_and(|toast| toast.id == id)
}

/// Global toast slot provided at the root.
pub fn use_toast() -> Signal<Option<ToastMessage>> {
    use_context::<Signal<Option<ToastMessage>>>()
}

#[component]
pub fn Toast(mut message: Signal<Option<ToastMessage>>) -> Element {
    // Auto-dismiss after 5 seconds when a message is shown
    use_effect(move || {
        if let Some(id) = message.read().as_ref().map(|toast| toast.id) {
            spawn(async move {
                sleep(Duration::from_secs(5)).await;
                if timer_owns(&message.peek(), id) {
                    message.set(None);
                }
            });
        }
    });

    if let Some(toast) = message() {
        let alert_class = toast.alert_class();

        rsx! {
            div { class: "toast toast-bottom toast-end z-50",
                div {
                    class: "alert {alert_class}",
                    style: "max-width: 30vw; word-wrap: break-word; white-space: normal;",
                    div { class: "flex flex-col",
                        if let Some(title) = &toast.title {
                            span { class: "font-semibold", "{title}" }
                        }
                        span { "{toast.message}" }
                    }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost ml-2",
                        onclick: move |_| message.set(None),
                        "✕"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
