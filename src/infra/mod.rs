pub mod pricing_api;
