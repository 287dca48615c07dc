use super::entities::VariationRange;

const LOW_AGREEMENT_CV: f64 = 0.3;
const MEDIUM_AGREEMENT_CV: f64 = 0.15;

/// How closely the pricing models agreed on one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgreementLevel {
    High,
    Medium,
    Low,
}

impl AgreementLevel {
    /// Classifies an average coefficient of variation. A value sitting exactly
    /// on either threshold is reported as `Medium`.
    pub fn from_average_cv(average: f64) -> Self {
        if average > LOW_AGREEMENT_CV {
            AgreementLevel::Low
        } else if average >= MEDIUM_AGREEMENT_CV {
            AgreementLevel::Medium
        } else {
            AgreementLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgreementLevel::High => "High",
            AgreementLevel::Medium => "Medium",
            AgreementLevel::Low => "Low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AgreementLevel::High => "agreement-high",
            AgreementLevel::Medium => "agreement-medium",
            AgreementLevel::Low => "agreement-low",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AgreementLabel {
    pub category: String,
    pub level: AgreementLevel,
}

/// `buy_price` -> "Buy", `max_profit_price` -> "Max profit".
pub fn category_label(category: &str) -> String {
    if category == "estimated_time_to_sell" {
        return "Time to Sell".to_string();
    }

    let name = category
        .strip_suffix("_price")
        .unwrap_or(category)
        .replace('_', " ");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One label per category, in input order.
pub fn classify_agreement(variation: &[(String, VariationRange)]) -> Vec<AgreementLabel> {
    variation
        .iter()
        .map(|(category, range)| AgreementLabel {
            category: category_label(category),
            level: AgreementLevel::from_average_cv(range.average()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min_cv: f64, max_cv: f64) -> VariationRange {
        VariationRange { min_cv, max_cv }
    }

    #[test]
    fn boundaries_fall_into_medium() {
        assert_eq!(AgreementLevel::from_average_cv(0.05), AgreementLevel::High);
        assert_eq!(AgreementLevel::from_average_cv(0.2), AgreementLevel::Medium);
        assert_eq!(AgreementLevel::from_average_cv(0.5), AgreementLevel::Low);
        assert_eq!(AgreementLevel::from_average_cv(0.15), AgreementLevel::Medium);
        assert_eq!(AgreementLevel::from_average_cv(0.1499), AgreementLevel::High);
        assert_eq!(AgreementLevel::from_average_cv(0.3), AgreementLevel::Medium);
    }

    #[test]
    fn classification_uses_the_average_of_both_coefficients() {
        let labels = classify_agreement(&[
            ("buy_price".to_string(), range(0.1, 0.3)),
            ("quick_sale_price".to_string(), range(0.0, 0.1)),
            ("max_profit_price".to_string(), range(0.4, 0.6)),
        ]);

        let levels: Vec<_> = labels.iter().map(|label| label.level).collect();
        assert_eq!(
            levels,
            [AgreementLevel::Medium, AgreementLevel::High, AgreementLevel::Low]
        );
    }

    #[test]
    fn category_labels_are_humanized() {
        assert_eq!(category_label("buy_price"), "Buy");
        assert_eq!(category_label("max_profit_price"), "Max profit");
        assert_eq!(category_label("expected_sale_price"), "Expected sale");
        assert_eq!(category_label("estimated_time_to_sell"), "Time to Sell");
        assert_eq!(category_label("volume"), "Volume");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn labels_follow_input_order() {
        let labels = classify_agreement(&[
            ("estimated_time_to_sell".to_string(), range(0.0, 0.0)),
            ("buy_price".to_string(), range(0.0, 0.0)),
        ]);
        let names: Vec<_> = labels.into_iter().map(|label| label.category).collect();
        assert_eq!(names, ["Time to Sell", "Buy"]);
    }
}
