use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::{failure_outcome, persist_preferences, Route},
    config::AppConfig,
    domain::{
        build_result_view, ModelOption, PricingForm, PricingRequest, ResultView,
        SubmissionOutcome, SubmissionPhase, SubmitMode, CONDITIONS,
    },
    infra::pricing_api::PricingClient,
    ui::components::{
        model_picker::ModelPicker,
        results_panel::ResultsPanel,
        status::{ErrorPanel, LoadingIndicator},
        toast::ToastMessage,
    },
};

const MODE: SubmitMode = SubmitMode::Single;

#[component]
pub fn PricingPage() -> Element {
    let config = use_context::<AppConfig>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let options = use_context::<Signal<Vec<ModelOption>>>();
    let mut form = use_context::<Signal<PricingForm>>();
    let mut phase = use_signal(SubmissionPhase::<ResultView>::default);
    let nav = use_navigator();

    let on_submit = {
        let config = config.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if !phase.with_mut(|p| p.begin()) {
                debug!("price analysis already in flight; ignoring submit");
                return;
            }

            let request = options.with(|opts| form.with(|f| f.to_request(opts)));
            let skip_cache = request.skip_cache;
            let config = config.clone();
            spawn(async move {
                let outcome = request_price(&config, &request).await;
                match &outcome {
                    SubmissionOutcome::Success(_) => persist_preferences(&options, skip_cache, toasts),
                    SubmissionOutcome::Unauthorized => {
                        nav.push(Route::Login {});
                    }
                    SubmissionOutcome::Failed(_) => {}
                }
                phase.with_mut(|p| p.settle(outcome, MODE));
            });
        }
    };

    let current = form();
    let state = phase();
    let locked = state.inputs_locked();
    let button_label = state.button_label(MODE);

    rsx! {
        section { class: "pricing-page",
            form { class: "pricing-form", onsubmit: on_submit,
                div { class: "form-row",
                    div { class: "field",
                        label { r#for: "brand", "Brand" }
                        input {
                            id: "brand",
                            required: true,
                            disabled: locked,
                            placeholder: "e.g. Canon",
                            value: "{current.brand}",
                            oninput: move |evt| form.with_mut(|f| f.brand = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "model", "Model" }
                        input {
                            id: "model",
                            required: true,
                            disabled: locked,
                            placeholder: "e.g. AE-1",
                            value: "{current.model}",
                            oninput: move |evt| form.with_mut(|f| f.model = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "condition", "Condition" }
                        select {
                            id: "condition",
                            disabled: locked,
                            value: "{current.condition}",
                            onchange: move |evt| form.with_mut(|f| f.condition = evt.value()),
                            for condition in CONDITIONS.iter() {
                                option {
                                    value: "{condition}",
                                    selected: *condition == current.condition.as_str(),
                                    "{condition}"
                                }
                            }
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "additionalDetails", "Additional Details" }
                    textarea {
                        id: "additionalDetails",
                        rows: "3",
                        disabled: locked,
                        placeholder: "Accessories, defects, year of manufacture...",
                        value: "{current.additional_details}",
                        oninput: move |evt| form.with_mut(|f| f.additional_details = evt.value()),
                    }
                }
                ModelPicker { options, locked }
                label { class: "checkbox-row",
                    input {
                        r#type: "checkbox",
                        id: "skipCache",
                        disabled: locked,
                        checked: current.skip_cache,
                        onchange: move |evt| form.with_mut(|f| f.skip_cache = evt.checked()),
                    }
                    span { "Skip cache (force fresh analysis)" }
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: locked,
                    "{button_label}"
                }
            }

            if state.is_pending() {
                LoadingIndicator { label: MODE.pending_label().to_string() }
            }
            if let Some(message) = state.error() {
                ErrorPanel { message: message.to_string() }
            }
            if let Some(view) = state.results() {
                ResultsPanel { view: view.clone() }
            }
        }
    }
}

async fn request_price(
    config: &AppConfig,
    request: &PricingRequest,
) -> SubmissionOutcome<ResultView> {
    let client = match PricingClient::new(config) {
        Ok(client) => client,
        Err(err) => return failure_outcome(err),
    };

    match client.price(request).await {
        Ok(response) => SubmissionOutcome::Success(build_result_view(&response, &config.catalog)),
        Err(err) => failure_outcome(err),
    }
}
