pub mod bulk;
pub mod login;
pub mod pricing;
pub mod settings;

pub use bulk::BulkPage;
pub use login::LoginPage;
pub use pricing::PricingPage;
pub use settings::SettingsPage;
