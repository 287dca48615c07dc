//! Runtime configuration, resolved once at startup and shared through context.

use std::env;

use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::domain::ModelCatalog;

pub const DEFAULT_API_BASE: &str = "https://pricing-tool-tblw.onrender.com/";
const DEFAULT_LOGIN_PATH: &str = "login";

const API_BASE_ENV: &str = "PRICING_API_BASE";
const LOGIN_PATH_ENV: &str = "PRICING_LOGIN_PATH";
const DEFAULT_SOURCE_ENV: &str = "PRICING_DEFAULT_SOURCE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Always ends with `/` so endpoint paths join underneath it.
    pub api_base: Url,
    pub login_url: Url,
    pub catalog: ModelCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base = Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL");
        let login_url = api_base
            .join(DEFAULT_LOGIN_PATH)
            .expect("default login path joins onto the base");
        Self {
            api_base,
            login_url,
            catalog: ModelCatalog::default(),
        }
    }
}

impl AppConfig {
    pub fn new(api_base: &str, login_path: &str, default_source: &str) -> Result<Self, ConfigError> {
        let api_base = normalize_base(api_base)?;
        let login_url = api_base
            .join(login_path.trim_start_matches('/'))
            .map_err(|source| ConfigError::InvalidUrl {
                name: LOGIN_PATH_ENV,
                source,
            })?;
        let default_source = default_source.trim();
        if default_source.is_empty() {
            return Err(ConfigError::Empty(DEFAULT_SOURCE_ENV));
        }

        Ok(Self {
            api_base,
            login_url,
            catalog: ModelCatalog::default().with_default_source(default_source),
        })
    }

    /// Reads `PRICING_*` variables; any invalid value falls back to the defaults.
    pub fn from_env() -> Self {
        let api_base = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let login_path =
            env::var(LOGIN_PATH_ENV).unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string());
        let default_source = env::var(DEFAULT_SOURCE_ENV)
            .unwrap_or_else(|_| ModelCatalog::default().default_source().to_string());

        match Self::new(&api_base, &login_path, &default_source) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "invalid pricing configuration; using defaults");
                Self::default()
            }
        }
    }
}

pub fn normalize_base(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(API_BASE_ENV));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|source| ConfigError::InvalidUrl {
        name: API_BASE_ENV,
        source,
    })
}
