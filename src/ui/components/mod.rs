pub mod agreement_badge;
pub mod bulk_table;
pub mod model_picker;
pub mod price_card;
pub mod results_panel;
pub mod status;
pub mod toast;
