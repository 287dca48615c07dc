//! Pricing data model and the pure logic that turns responses into views.

pub mod agreement;
pub mod availability;
pub mod entities;
pub mod form;
pub mod format;
pub mod preferences;
pub mod submission;
pub mod view;

pub use agreement::AgreementLevel;
pub use availability::{
    apply_availability, apply_fallback, initial_options, select_all, toggle_option, ModelCatalog,
    ModelOption,
};
pub use entities::{BulkItem, ModelAvailability, PricingRequest, PricingResponse};
pub use form::{validate_csv_path, PricingForm, CONDITIONS};
pub use preferences::Preferences;
pub use submission::{SubmissionOutcome, SubmissionPhase, SubmitMode};
pub use view::{
    build_bulk_rows, build_result_view, BulkCells, BulkRowView, MetaView, PriceSlot, ResultView,
};
