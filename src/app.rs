use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    domain::{
        apply_availability, apply_fallback, initial_options, ModelOption, Preferences, PricingForm,
        SubmissionOutcome,
    },
    infra::pricing_api::{ApiError, PricingClient},
    ui::{
        components::toast::{notify, Notice, Toast, ToastMessage},
        pages::{BulkPage, LoginPage, PricingPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Pricing {},
    #[route("/bulk")]
    Bulk {},
    #[route("/settings")]
    Settings {},
    #[route("/login")]
    Login {},
}

/// Raised by work that runs outside the router when the API answers 401.
/// `Shell` turns it into a navigation to the login page.
#[derive(Clone, Copy)]
pub struct LoginRedirect(pub Signal<bool>);

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    use_context_provider(|| config.clone());

    let preferences = use_hook(|| load_preferences().unwrap_or_default());

    let options = use_signal(|| {
        initial_options(&config.catalog, preferences.selected_sources.as_deref())
    });
    use_context_provider(|| options.clone());

    let form = use_signal(|| PricingForm {
        skip_cache: preferences.skip_cache,
        ..PricingForm::default()
    });
    use_context_provider(|| form.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let mut login_redirect = use_signal(|| false);
    use_context_provider(|| LoginRedirect(login_redirect));

    // Runs once per launch, not per page visit.
    let _availability = use_future({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                if let Err(err) = refresh_model_availability(config, options, toasts).await {
                    if err.is_unauthorized() {
                        login_redirect.set(true);
                    }
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Asks `api/models` which backends are configured and gates the model
/// checkboxes. Returns the display names of unavailable models. On any failure
/// only the default backend stays enabled and the error is handed back so
/// callers can react to a 401.
pub async fn refresh_model_availability(
    config: AppConfig,
    mut options: Signal<Vec<ModelOption>>,
    toasts: Signal<Vec<ToastMessage>>,
) -> Result<Vec<String>, ApiError> {
    let result = match PricingClient::new(&config) {
        Ok(client) => client.get_models().await,
        Err(err) => Err(err),
    };

    match result {
        Ok(models) => {
            options.with_mut(|opts| apply_availability(opts, &models));
            let unavailable: Vec<String> = models
                .iter()
                .filter(|model| !model.available)
                .map(|model| config.catalog.display_name(&model.id).to_string())
                .collect();
            info!(?unavailable, "model availability applied");
            Ok(unavailable)
        }
        Err(err) => {
            let default_source = config.catalog.default_source();
            warn!(error = %err, default_source, "error fetching available models; using fallback");
            options.with_mut(|opts| apply_fallback(opts, default_source));
            if !err.is_unauthorized() {
                notify(
                    toasts,
                    Notice::AvailabilityFallback {
                        default_model: config.catalog.display_name(default_source).to_string(),
                        reason: err.user_message(),
                    },
                );
            }
            Err(err)
        }
    }
}

pub fn persist_preferences(
    options: &Signal<Vec<ModelOption>>,
    skip_cache: bool,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let snapshot = options.with(|opts| Preferences::capture(opts, skip_cache));
    if let Err(err) = save_preferences(&snapshot) {
        warn!(error = %err, "failed to persist preferences");
        notify(toasts, Notice::PreferencesSaveFailed(err.to_string()));
    }
}

/// Maps a failed call onto the form outcome: 401 redirects, everything else is shown inline.
pub fn failure_outcome<V>(err: ApiError) -> SubmissionOutcome<V> {
    if err.is_unauthorized() {
        SubmissionOutcome::Unauthorized
    } else {
        SubmissionOutcome::Failed(err.user_message())
    }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { Shell { PricingPage {} } }
}

#[component]
pub fn Bulk() -> Element {
    rsx! { Shell { BulkPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}

#[component]
pub fn Login() -> Element {
    rsx! { Shell { LoginPage {} } }
}
