use dioxus::prelude::*;

use crate::domain::{toggle_option, ModelOption};

/// Checkbox per pricing backend. Unavailable backends stay visible but locked.
#[component]
pub fn ModelPicker(options: Signal<Vec<ModelOption>>, locked: bool) -> Element {
    let snapshot = options();

    rsx! {
        fieldset { class: "model-picker",
            legend { "AI Models" }
            for option in snapshot {
                label {
                    class: option_class(&option),
                    title: option.note.clone().unwrap_or_default(),
                    input {
                        r#type: "checkbox",
                        class: "llm-checkbox",
                        value: "{option.id}",
                        checked: option.checked,
                        disabled: locked || !option.enabled,
                        onchange: {
                            let id = option.id.clone();
                            let mut options = options.clone();
                            move |_| options.with_mut(|opts| toggle_option(opts, &id))
                        },
                    }
                    span { "{option.label}" }
                    if let Some(note) = option.note.clone() {
                        small { class: "muted", " ({note})" }
                    }
                }
            }
        }
    }
}

fn option_class(option: &ModelOption) -> &'static str {
    if option.unavailable {
        "llm-option unavailable"
    } else {
        "llm-option"
    }
}
