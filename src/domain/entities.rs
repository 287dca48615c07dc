use serde::{Deserialize, Serialize};

/// Identifier of a pricing backend ("claude", "gemini", ...).
pub type ModelId = String;

/// Body of `POST /api/price`. Built fresh for every submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricingRequest {
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub additional_details: String,
    pub use_sources: Vec<ModelId>,
    pub skip_cache: bool,
}

/// A min/max price range with the rationale returned by the API.
/// `min <= max` is not guaranteed; values are displayed as given.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceEstimate {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimeEstimate {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_time_unit")]
    pub unit: String,
    #[serde(default)]
    pub explanation: String,
}

fn default_time_unit() -> String {
    "day".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricingResult {
    pub buy_price: PriceEstimate,
    pub max_profit_price: PriceEstimate,
    pub quick_sale_price: PriceEstimate,
    pub expected_sale_price: PriceEstimate,
    #[serde(default)]
    pub estimated_time_to_sell: Option<TimeEstimate>,
    #[serde(default)]
    pub market_analysis: String,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub models_used: Option<Vec<ModelId>>,
    #[serde(default, deserialize_with = "optional_string_from_json")]
    pub timestamp: Option<String>,
    /// Coefficients of variation per category, in document order.
    #[serde(default, deserialize_with = "ordered_variation_map")]
    pub price_range_variation: Option<Vec<(String, VariationRange)>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct VariationRange {
    pub min_cv: f64,
    pub max_cv: f64,
}

impl VariationRange {
    pub fn average(&self) -> f64 {
        (self.min_cv + self.max_cv) / 2.0
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricingResponse {
    pub results: PricingResult,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "optional_string_from_json")]
    pub cached_at: Option<String>,
}

impl PricingResponse {
    pub fn from_cache(&self) -> bool {
        self.source.as_deref() == Some("cache")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModelAvailability {
    pub id: ModelId,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelsEnvelope {
    #[serde(default)]
    pub models: Vec<ModelAvailability>,
}

/// One CSV row as echoed back by `POST /api/bulk_price`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BulkProduct {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub additional_details: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BulkItem {
    #[serde(default)]
    pub product: BulkProduct,
    #[serde(default)]
    pub results: Option<PricingResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkEnvelope {
    #[serde(default)]
    pub results: Vec<BulkItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Accepts timestamps sent either as strings or as epoch numbers.
fn optional_string_from_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string, number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(format!("{}", value.trunc() as i64)))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

fn ordered_variation_map<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<(String, VariationRange)>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct OrderedEntries;

    impl<'de> serde::de::Visitor<'de> for OrderedEntries {
        type Value = Option<Vec<(String, VariationRange)>>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of category to variation range")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((category, range)) = access.next_entry::<String, VariationRange>()? {
                entries.push((category, range));
            }
            Ok(Some(entries))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OrderedEntries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variation_entries_keep_document_order() {
        let meta: Meta = serde_json::from_value(json!({
            "models_used": ["claude", "grok"],
            "price_range_variation": {
                "quick_sale_price": {"min_cv": 0.1, "max_cv": 0.2},
                "buy_price": {"min_cv": 0.4, "max_cv": 0.5},
                "estimated_time_to_sell": {"min_cv": 0.0, "max_cv": 0.0}
            }
        }))
        .unwrap();

        let categories: Vec<_> = meta
            .price_range_variation
            .unwrap()
            .into_iter()
            .map(|(category, _)| category)
            .collect();
        assert_eq!(
            categories,
            ["quick_sale_price", "buy_price", "estimated_time_to_sell"]
        );
    }

    #[test]
    fn timestamps_accept_strings_numbers_and_null() {
        let meta: Meta = serde_json::from_value(json!({"timestamp": 1736936430000u64})).unwrap();
        assert_eq!(meta.timestamp.as_deref(), Some("1736936430000"));

        let meta: Meta =
            serde_json::from_value(json!({"timestamp": "2025-01-15T10:20:30Z"})).unwrap();
        assert_eq!(meta.timestamp.as_deref(), Some("2025-01-15T10:20:30Z"));

        let meta: Meta = serde_json::from_value(json!({"timestamp": null})).unwrap();
        assert_eq!(meta.timestamp, None);
    }

    #[test]
    fn pricing_response_tolerates_missing_optional_fields() {
        let estimate = json!({"min": 10, "max": 20, "explanation": "x"});
        let response: PricingResponse = serde_json::from_value(json!({
            "results": {
                "buy_price": estimate,
                "max_profit_price": estimate,
                "quick_sale_price": estimate,
                "expected_sale_price": estimate
            },
            "source": "cache"
        }))
        .unwrap();

        assert!(response.from_cache());
        assert!(response.results.estimated_time_to_sell.is_none());
        assert!(response.results.factors.is_empty());
        assert!(response.results.meta.is_none());
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = PricingRequest {
            brand: "Canon".into(),
            model: "AE-1".into(),
            condition: "Good".into(),
            additional_details: String::new(),
            use_sources: vec!["claude".into()],
            skip_cache: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "brand": "Canon",
                "model": "AE-1",
                "condition": "Good",
                "additional_details": "",
                "use_sources": ["claude"],
                "skip_cache": true
            })
        );
    }
}
