//! Background outcomes reported as toasts: availability checks and saved preferences.

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Problems stay on screen longer than confirmations.
    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(4),
            ToastKind::Warning => Duration::from_secs(8),
            ToastKind::Error => Duration::from_secs(12),
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }
}

/// Something the user should hear about that did not come from a form submit.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// The models endpoint answered; lists the display names it marked unavailable.
    AvailabilityChecked { unavailable: Vec<String> },
    /// The models endpoint failed and only the default model is usable.
    AvailabilityFallback { default_model: String, reason: String },
    PreferencesSaveFailed(String),
    PreferencesReset,
    PreferencesResetFailed(String),
}

impl Notice {
    pub fn kind(&self) -> ToastKind {
        match self {
            Notice::AvailabilityChecked { unavailable } if unavailable.is_empty() => {
                ToastKind::Success
            }
            Notice::AvailabilityChecked { .. } => ToastKind::Info,
            Notice::AvailabilityFallback { .. } | Notice::PreferencesSaveFailed(_) => {
                ToastKind::Warning
            }
            Notice::PreferencesReset => ToastKind::Info,
            Notice::PreferencesResetFailed(_) => ToastKind::Error,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::AvailabilityChecked { unavailable } if unavailable.is_empty() => {
                "All AI models are available.".to_string()
            }
            Notice::AvailabilityChecked { unavailable } => {
                format!("Not configured on the server: {}.", unavailable.join(", "))
            }
            Notice::AvailabilityFallback {
                default_model,
                reason,
            } => format!(
                "Could not check model availability ({reason}); only {default_model} is enabled."
            ),
            Notice::PreferencesSaveFailed(reason) => {
                format!("Could not save preferences: {reason}")
            }
            Notice::PreferencesReset => "Restored default preferences.".to_string(),
            Notice::PreferencesResetFailed(reason) => {
                format!("Could not clear saved preferences: {reason}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl From<Notice> for ToastMessage {
    fn from(notice: Notice) -> Self {
        Self {
            id: generate_id("toast"),
            kind: notice.kind(),
            text: notice.text(),
        }
    }
}

pub fn notify(mut toasts: Signal<Vec<ToastMessage>>, notice: Notice) {
    let message = ToastMessage::from(notice);
    toasts.with_mut(|entries| push_capped(entries, message));
}

fn push_capped(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let lifetime = message.kind.lifetime();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(lifetime).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = message.kind.class();
    let id = message.id.clone();

    rsx! {
        li { class: "toast {class}",
            p { "{message.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| toasts.with_mut(|items| items.retain(|toast| toast.id != id)),
                "Dismiss"
            }
        }
    }
}
