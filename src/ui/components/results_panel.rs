use dioxus::prelude::*;

use crate::domain::{MetaView, ResultView};
use crate::ui::components::{agreement_badge::AgreementBadge, price_card::PriceCard};

/// Applies a [`ResultView`] to the page. Every slot comes from the view, so a
/// new view fully replaces what was shown before.
#[component]
pub fn ResultsPanel(view: ResultView) -> Element {
    let cards = view.price_cards();
    let ResultView {
        market_analysis,
        factors,
        meta,
        source,
        ..
    } = view;

    rsx! {
        section { class: "results",
            if let Some(badge) = source {
                div { class: "source-badge cache-source",
                    span { "{badge.label()}" }
                }
            }
            div { class: "price-grid",
                for (title, slot) in cards {
                    PriceCard { title: title.to_string(), slot }
                }
            }
            div { class: "market-analysis",
                h3 { "Market Analysis" }
                p { "{market_analysis}" }
                if let Some(meta) = meta {
                    MetaInfo { meta }
                }
            }
            div { class: "factors",
                h3 { "Key Factors" }
                ul {
                    for factor in factors {
                        li { "{factor}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MetaInfo(meta: MetaView) -> Element {
    rsx! {
        div { class: "meta-info",
            h4 { "AI Models Used" }
            ul { class: "models-used",
                for model in meta.models {
                    li { class: "model-{model.id}", "{model.name}" }
                }
            }
            if let Some(generated_at) = meta.generated_at {
                div { class: "timestamp", "Analysis generated: {generated_at}" }
            }
            if let Some(agreement) = meta.agreement {
                div { class: "variation-info",
                    h4 { "Model Agreement" }
                    if !agreement.is_empty() {
                        ul { class: "variation-list",
                            for label in agreement {
                                li {
                                    "{label.category}: "
                                    AgreementBadge { level: label.level }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
