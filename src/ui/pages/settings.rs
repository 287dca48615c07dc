use dioxus::prelude::*;

use crate::{
    app::{refresh_model_availability, Route},
    config::AppConfig,
    domain::{select_all, ModelOption, PricingForm},
    ui::components::toast::{notify, Notice, ToastMessage},
    util::{
        persistence::clear_preferences,
        version::{version_label, APP_NAME, APP_REPO_URL},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let config = use_context::<AppConfig>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let options = use_context::<Signal<Vec<ModelOption>>>();
    let form = use_context::<Signal<PricingForm>>();
    let nav = use_navigator();
    let mut checking = use_signal(|| false);

    let on_recheck = {
        let config = config.clone();
        move |_| {
            if checking() {
                return;
            }
            checking.set(true);
            let config = config.clone();
            spawn(async move {
                match refresh_model_availability(config, options, toasts).await {
                    Ok(unavailable) => notify(toasts, Notice::AvailabilityChecked { unavailable }),
                    Err(err) if err.is_unauthorized() => {
                        nav.push(Route::Login {});
                    }
                    Err(_) => {}
                }
                checking.set(false);
            });
        }
    };

    let on_reset = {
        let mut options = options.clone();
        let mut form = form.clone();
        move |_| {
            options.with_mut(|opts| select_all(opts));
            form.with_mut(|f| f.skip_cache = false);
            match clear_preferences() {
                Ok(()) => notify(toasts, Notice::PreferencesReset),
                Err(err) => notify(toasts, Notice::PreferencesResetFailed(err.to_string())),
            }
        }
    };

    let models = options.with(|opts| {
        opts.iter()
            .map(|option| (option.label.clone(), availability_label(option)))
            .collect::<Vec<_>>()
    });
    let default_model = config
        .catalog
        .display_name(config.catalog.default_source())
        .to_string();

    rsx! {
        div { class: "settings-page",
            section { class: "card",
                h2 { "Connection" }
                dl { class: "settings-list",
                    dt { "API base" }
                    dd { code { "{config.api_base}" } }
                    dt { "Login page" }
                    dd { code { "{config.login_url}" } }
                    dt { "Fallback model" }
                    dd { "{default_model}" }
                }
                p { class: "muted",
                    "Set PRICING_API_BASE, PRICING_LOGIN_PATH or PRICING_DEFAULT_SOURCE before launch to change these."
                }
            }

            section { class: "card",
                h2 { "AI Models" }
                ul { class: "model-status",
                    for (label, status) in models {
                        li {
                            span { "{label}" }
                            span { class: "muted", "{status}" }
                        }
                    }
                }
                button {
                    class: "secondary",
                    disabled: checking(),
                    onclick: on_recheck,
                    if checking() { "Checking..." } else { "Re-check model availability" }
                }
            }

            section { class: "card",
                h2 { "Preferences" }
                p { class: "muted",
                    "Checked models and the skip-cache choice are remembered after each successful analysis."
                }
                button { class: "secondary", onclick: on_reset, "Reset preferences" }
            }

            section { class: "card about",
                h2 { "About" }
                p { "{APP_NAME} {version_label()}" }
                a { href: APP_REPO_URL, target: "_blank", rel: "noreferrer", "{APP_REPO_URL}" }
            }
        }
    }
}

fn availability_label(option: &ModelOption) -> &'static str {
    match (option.enabled, option.checked) {
        (false, _) => "Unavailable",
        (true, true) => "Selected",
        (true, false) => "Available",
    }
}
