use std::path::Path;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::{
    app::{failure_outcome, Route},
    config::AppConfig,
    domain::{
        build_bulk_rows, validate_csv_path, BulkRowView, SubmissionOutcome, SubmissionPhase,
        SubmitMode,
    },
    infra::pricing_api::PricingClient,
    ui::components::{
        bulk_table::BulkTable,
        status::{ErrorPanel, LoadingIndicator},
    },
};

const MODE: SubmitMode = SubmitMode::Bulk;
const FALLBACK_FILE_NAME: &str = "upload.csv";

#[component]
pub fn BulkPage() -> Element {
    let config = use_context::<AppConfig>();
    let mut csv_path = use_signal(String::new);
    let mut phase = use_signal(SubmissionPhase::<Vec<BulkRowView>>::default);
    let nav = use_navigator();

    let on_submit = {
        let config = config.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let raw = csv_path();
            let path = match validate_csv_path(&raw) {
                Ok(path) => path.to_string(),
                Err(message) => {
                    phase.with_mut(|p| p.reject(message));
                    return;
                }
            };
            if !phase.with_mut(|p| p.begin()) {
                debug!("bulk pricing already in flight; ignoring submit");
                return;
            }

            let config = config.clone();
            spawn(async move {
                let outcome = request_bulk(&config, &path).await;
                if outcome == SubmissionOutcome::Unauthorized {
                    nav.push(Route::Login {});
                }
                phase.with_mut(|p| p.settle(outcome, MODE));
            });
        }
    };

    let state = phase();
    let locked = state.inputs_locked();
    let button_label = state.button_label(MODE);

    rsx! {
        section { class: "bulk-page",
            form { class: "bulk-form", onsubmit: on_submit,
                div { class: "field",
                    label { r#for: "csvFile", "CSV File" }
                    input {
                        id: "csvFile",
                        disabled: locked,
                        placeholder: "/path/to/items.csv",
                        value: "{csv_path}",
                        oninput: move |evt| csv_path.set(evt.value()),
                    }
                    small { class: "muted",
                        "Columns: brand, model, condition, additional_details (optional)"
                    }
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
            if let Some(rows) = state.results() {
                BulkTable { rows: rows.clone() }
            }
        }
    }
}

async fn request_bulk(config: &AppConfig, path: &str) -> SubmissionOutcome<Vec<BulkRowView>> {
    let csv = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path, error = %err, "could not read bulk CSV");
            return SubmissionOutcome::Failed(format!("Could not read {path}: {err}"));
        }
    };

    let client = match PricingClient::new(config) {
        Ok(client) => client,
        Err(err) => return failure_outcome(err),
    };

    match client.bulk_price(&upload_name(path), csv).await {
        Ok(items) => SubmissionOutcome::Success(build_bulk_rows(&items)),
        Err(err) => failure_outcome(err),
    }
}

fn upload_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}
