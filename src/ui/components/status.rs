use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { "{label}" }
        }
    }
}

#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "error-panel", role: "alert",
            h3 { "Something went wrong" }
            p { "{message}" }
        }
    }
}
