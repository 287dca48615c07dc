use dioxus::prelude::*;

use crate::domain::AgreementLevel;

#[component]
pub fn AgreementBadge(level: AgreementLevel) -> Element {
    rsx! {
        span { class: "{level.css_class()}", "{level.label()} Agreement" }
    }
}
