pub const APP_NAME: &str = "Pricing Scout";
pub const APP_REPO_URL: &str = "https://github.com/skynatbs/pricing_scout";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// Sent with every pricing API request.
pub fn user_agent() -> String {
    format!("{}/{} (+{})", APP_NAME.replace(' ', "-"), version_label(), APP_REPO_URL)
}
