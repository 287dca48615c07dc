//! Pure mapping from API responses to what the result panels display.

use super::agreement::{classify_agreement, AgreementLabel};
use super::availability::ModelCatalog;
use super::entities::{BulkItem, Meta, PriceEstimate, PricingResponse, PricingResult, TimeEstimate};
use super::format::{format_local_timestamp, format_price_range, format_time_range};

pub const NOT_AVAILABLE: &str = "N/A";
pub const MISSING_BULK_RESULT: &str = "No pricing returned for this item";

#[derive(Clone, Debug, PartialEq)]
pub struct PriceSlot {
    pub range: String,
    pub explanation: String,
}

impl From<&PriceEstimate> for PriceSlot {
    fn from(estimate: &PriceEstimate) -> Self {
        Self {
            range: format_price_range(estimate.min, estimate.max),
            explanation: estimate.explanation.clone(),
        }
    }
}

impl From<&TimeEstimate> for PriceSlot {
    fn from(estimate: &TimeEstimate) -> Self {
        Self {
            range: format_time_range(estimate.min, estimate.max, &estimate.unit),
            explanation: estimate.explanation.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelBadge {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetaView {
    pub models: Vec<ModelBadge>,
    pub generated_at: Option<String>,
    /// `None` when the response carried no variation data at all.
    pub agreement: Option<Vec<AgreementLabel>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceBadge {
    /// `cached_at` is kept but not displayed.
    Cached { cached_at: Option<String> },
}

impl SourceBadge {
    pub fn label(&self) -> &'static str {
        match self {
            SourceBadge::Cached { .. } => "Cached Result",
        }
    }
}

/// Everything the single-item results panel shows. Rendering a new view
/// replaces every slot, including the factor list.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub buy: PriceSlot,
    pub max_profit: PriceSlot,
    pub quick_sale: PriceSlot,
    pub expected_sale: PriceSlot,
    pub time_to_sell: Option<PriceSlot>,
    pub market_analysis: String,
    pub factors: Vec<String>,
    pub meta: Option<MetaView>,
    pub source: Option<SourceBadge>,
}

impl ResultView {
    /// Titled cards in display order. Time to Sell is left out when absent.
    pub fn price_cards(&self) -> Vec<(&'static str, PriceSlot)> {
        let mut cards = vec![
            ("Buy Price", self.buy.clone()),
            ("Max Profit Price", self.max_profit.clone()),
            ("Quick Sale Price", self.quick_sale.clone()),
            ("Expected Sale Price", self.expected_sale.clone()),
        ];
        if let Some(time) = &self.time_to_sell {
            cards.push(("Time to Sell", time.clone()));
        }
        cards
    }
}

pub fn build_result_view(response: &PricingResponse, catalog: &ModelCatalog) -> ResultView {
    let mut view = result_view(&response.results, catalog);
    if response.from_cache() {
        view.source = Some(SourceBadge::Cached {
            cached_at: response.cached_at.clone(),
        });
    }
    view
}

pub fn result_view(result: &PricingResult, catalog: &ModelCatalog) -> ResultView {
    ResultView {
        buy: PriceSlot::from(&result.buy_price),
        max_profit: PriceSlot::from(&result.max_profit_price),
        quick_sale: PriceSlot::from(&result.quick_sale_price),
        expected_sale: PriceSlot::from(&result.expected_sale_price),
        time_to_sell: result.estimated_time_to_sell.as_ref().map(PriceSlot::from),
        market_analysis: result.market_analysis.clone(),
        factors: result.factors.clone(),
        meta: result
            .meta
            .as_ref()
            .and_then(|meta| meta_view(meta, catalog)),
        source: None,
    }
}

/// Meta is only shown when the response says which models were used.
fn meta_view(meta: &Meta, catalog: &ModelCatalog) -> Option<MetaView> {
    let models_used = meta.models_used.as_ref()?;

    Some(MetaView {
        models: models_used
            .iter()
            .map(|id| ModelBadge {
                id: id.clone(),
                name: catalog.display_name(id).to_string(),
            })
            .collect(),
        generated_at: meta
            .timestamp
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(format_local_timestamp),
        agreement: meta
            .price_range_variation
            .as_deref()
            .map(classify_agreement),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum BulkCells {
    /// Rendered as one merged cell spanning the five price/time columns.
    Error(String),
    /// Buy, max profit, quick sale, expected sale, time to sell.
    Prices([String; 5]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BulkRowView {
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub cells: BulkCells,
    pub details: String,
}

pub fn build_bulk_rows(items: &[BulkItem]) -> Vec<BulkRowView> {
    items.iter().map(bulk_row).collect()
}

fn bulk_row(item: &BulkItem) -> BulkRowView {
    let cells = match (&item.error, &item.results) {
        (Some(error), _) => BulkCells::Error(error.clone()),
        (None, Some(result)) => BulkCells::Prices([
            format_price_range(result.buy_price.min, result.buy_price.max),
            format_price_range(result.max_profit_price.min, result.max_profit_price.max),
            format_price_range(result.quick_sale_price.min, result.quick_sale_price.max),
            format_price_range(result.expected_sale_price.min, result.expected_sale_price.max),
            result
                .estimated_time_to_sell
                .as_ref()
                .map(|time| format_time_range(time.min, time.max, &time.unit))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ]),
        (None, None) => BulkCells::Error(MISSING_BULK_RESULT.to_string()),
    };

    let details = item
        .product
        .additional_details
        .as_deref()
        .filter(|details| !details.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    BulkRowView {
        brand: item.product.brand.clone(),
        model: item.product.model.clone(),
        condition: item.product.condition.clone(),
        cells,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agreement::AgreementLevel;
    use crate::domain::entities::{BulkProduct, VariationRange};

    fn estimate(min: f64, max: f64) -> PriceEstimate {
        PriceEstimate {
            min,
            max,
            explanation: format!("between {min} and {max}"),
        }
    }

    fn sample_result() -> PricingResult {
        PricingResult {
            buy_price: estimate(100.0, 150.0),
            max_profit_price: estimate(300.0, 350.0),
            quick_sale_price: estimate(200.0, 220.0),
            expected_sale_price: estimate(1250.0, 1400.0),
            estimated_time_to_sell: Some(TimeEstimate {
                min: 3.0,
                max: 3.0,
                unit: "day".into(),
                explanation: "steady demand".into(),
            }),
            market_analysis: "Healthy resale market.".into(),
            factors: vec!["Condition".into(), "Rarity".into()],
            meta: None,
        }
    }

    #[test]
    fn slots_are_formatted_from_the_result() {
        let view = result_view(&sample_result(), &ModelCatalog::default());

        assert_eq!(view.buy.range, "$100 - $150");
        assert_eq!(view.buy.explanation, "between 100 and 150");
        assert_eq!(view.expected_sale.range, "$1,250 - $1,400");
        assert_eq!(view.time_to_sell.unwrap().range, "3 days");
        assert_eq!(view.factors, ["Condition", "Rarity"]);
        assert!(view.meta.is_none());
        assert!(view.source.is_none());
    }

    #[test]
    fn missing_time_estimate_leaves_slot_empty() {
        let mut result = sample_result();
        result.estimated_time_to_sell = None;
        let view = result_view(&result, &ModelCatalog::default());
        assert!(view.time_to_sell.is_none());

        let titles: Vec<_> = view.price_cards().into_iter().map(|(title, _)| title).collect();
        assert_eq!(
            titles,
            ["Buy Price", "Max Profit Price", "Quick Sale Price", "Expected Sale Price"]
        );
    }

    #[test]
    fn time_card_follows_the_price_cards() {
        let view = result_view(&sample_result(), &ModelCatalog::default());
        let cards = view.price_cards();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].0, "Time to Sell");
        assert_eq!(cards[4].1.range, "3 days");
    }

    #[test]
    fn meta_requires_models_used() {
        let mut result = sample_result();
        result.meta = Some(Meta {
            models_used: None,
            timestamp: Some("2025-01-15T14:05:09Z".into()),
            price_range_variation: Some(vec![]),
        });
        let view = result_view(&result, &ModelCatalog::default());
        assert!(view.meta.is_none());
    }

    #[test]
    fn meta_lists_models_and_agreement() {
        let mut result = sample_result();
        result.meta = Some(Meta {
            models_used: Some(vec!["claude".into(), "mistral".into()]),
            timestamp: None,
            price_range_variation: Some(vec![
                (
                    "buy_price".into(),
                    VariationRange {
                        min_cv: 0.5,
                        max_cv: 0.5,
                    },
                ),
                (
                    "estimated_time_to_sell".into(),
                    VariationRange {
                        min_cv: 0.0,
                        max_cv: 0.1,
                    },
                ),
            ]),
        });

        let meta = result_view(&result, &ModelCatalog::default()).meta.unwrap();

        let names: Vec<_> = meta.models.iter().map(|badge| badge.name.as_str()).collect();
        assert_eq!(names, ["Claude (Anthropic)", "mistral"]);
        assert!(meta.generated_at.is_none());

        let agreement = meta.agreement.unwrap();
        assert_eq!(agreement[0].category, "Buy");
        assert_eq!(agreement[0].level, AgreementLevel::Low);
        assert_eq!(agreement[1].category, "Time to Sell");
        assert_eq!(agreement[1].level, AgreementLevel::High);
    }

    #[test]
    fn cached_responses_get_a_source_badge() {
        let response = PricingResponse {
            results: sample_result(),
            source: Some("cache".into()),
            cached_at: Some("2025-01-15T14:05:09Z".into()),
        };
        let view = build_result_view(&response, &ModelCatalog::default());
        assert_eq!(view.source.as_ref().map(SourceBadge::label), Some("Cached Result"));

        let fresh = PricingResponse {
            source: Some("llm".into()),
            ..response
        };
        assert!(build_result_view(&fresh, &ModelCatalog::default())
            .source
            .is_none());
    }

    #[test]
    fn bulk_error_rows_merge_the_price_cells() {
        let rows = build_bulk_rows(&[BulkItem {
            product: BulkProduct {
                brand: "Nikon".into(),
                model: "F3".into(),
                condition: "Fair".into(),
                additional_details: None,
            },
            results: Some(sample_result()),
            error: Some("Rate limited".into()),
        }]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells, BulkCells::Error("Rate limited".into()));
        assert_eq!(rows[0].details, NOT_AVAILABLE);
    }

    #[test]
    fn bulk_priced_rows_have_five_cells() {
        let mut result = sample_result();
        result.estimated_time_to_sell = Some(TimeEstimate {
            min: 2.0,
            max: 5.0,
            unit: "day".into(),
            explanation: String::new(),
        });
        let rows = build_bulk_rows(&[BulkItem {
            product: BulkProduct {
                brand: "Leica".into(),
                model: "M6".into(),
                condition: "Good".into(),
                additional_details: Some("boxed".into()),
            },
            results: Some(result),
            error: None,
        }]);

        let BulkCells::Prices(cells) = &rows[0].cells else {
            panic!("expected price cells");
        };
        assert_eq!(cells[0], "$100 - $150");
        assert_eq!(cells[3], "$1,250 - $1,400");
        assert_eq!(cells[4], "2-5 days");
        assert_eq!(rows[0].details, "boxed");
    }

    #[test]
    fn bulk_rows_without_results_or_error_are_reported() {
        let rows = build_bulk_rows(&[BulkItem {
            product: BulkProduct {
                additional_details: Some(String::new()),
                ..BulkProduct::default()
            },
            results: None,
            error: None,
        }]);
        assert_eq!(rows[0].cells, BulkCells::Error(MISSING_BULK_RESULT.into()));
        assert_eq!(rows[0].details, NOT_AVAILABLE);
    }
}
