use super::availability::{selected_sources, ModelOption};
use super::entities::PricingRequest;

pub const CONDITIONS: &[&str] = &["New", "Like New", "Excellent", "Good", "Fair", "Poor"];

pub const MISSING_CSV_MESSAGE: &str = "Please select a CSV file.";

/// Current contents of the single-item form.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingForm {
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub additional_details: String,
    pub skip_cache: bool,
}

impl Default for PricingForm {
    fn default() -> Self {
        Self {
            brand: String::new(),
            model: String::new(),
            condition: CONDITIONS[3].to_string(),
            additional_details: String::new(),
            skip_cache: false,
        }
    }
}

impl PricingForm {
    pub fn to_request(&self, options: &[ModelOption]) -> PricingRequest {
        PricingRequest {
            brand: self.brand.clone(),
            model: self.model.clone(),
            condition: self.condition.clone(),
            additional_details: self.additional_details.clone(),
            use_sources: selected_sources(options),
            skip_cache: self.skip_cache,
        }
    }
}

/// Path of the CSV picked on the bulk form, checked before any request.
pub fn validate_csv_path(raw: &str) -> Result<&str, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(MISSING_CSV_MESSAGE)
    } else {
        Ok(trimmed)
    }
}
