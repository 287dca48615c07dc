use dioxus::prelude::*;

use crate::domain::PriceSlot;

/// One estimate slot: title, formatted range and the model's explanation.
#[component]
pub fn PriceCard(title: String, slot: PriceSlot) -> Element {
    rsx! {
        div { class: "price-card",
            h3 { "{title}" }
            p { class: "price-range", "{slot.range}" }
            p { class: "price-explanation", "{slot.explanation}" }
        }
    }
}
