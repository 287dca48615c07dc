//! Asynchronous client for the pricing API.
//!
//! - `GET api/models`, `POST api/price` and `POST api/bulk_price`.
//! - 401 surfaces as [`ApiError::Unauthorized`] so callers can redirect to login.

use reqwest::{multipart, Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{normalize_base, AppConfig, ConfigError};
use crate::domain::entities::{BulkEnvelope, ModelsEnvelope};
use crate::domain::{BulkItem, ModelAvailability, PricingRequest, PricingResponse};
use crate::util::version::user_agent;

pub const GENERIC_NETWORK_ERROR: &str = "Network response was not ok";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("{0}")]
    Api(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text for the inline error panel.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { message: None, .. } => GENERIC_NETWORK_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

/// Error bodies may carry `{"error": "..."}` or `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct PricingClient {
    http: Client,
    base_url: Url,
}

impl PricingClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(config.api_base.as_str())
    }

    pub fn with_base_url(base: &str) -> Result<Self, ApiError> {
        let base_url = normalize_base(base)?;
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, base_url })
    }

    pub async fn get_models(&self) -> Result<Vec<ModelAvailability>, ApiError> {
        let url = self.url("api/models")?;
        debug!(%url, "probing model availability");
        let envelope: ModelsEnvelope = self.send_json(self.http.get(url)).await?;
        info!(count = envelope.models.len(), "received model availability");
        Ok(envelope.models)
    }

    pub async fn price(&self, request: &PricingRequest) -> Result<PricingResponse, ApiError> {
        let url = self.url("api/price")?;
        debug!(
            %url,
            brand = %request.brand,
            model = %request.model,
            sources = ?request.use_sources,
            skip_cache = request.skip_cache,
            "requesting price analysis"
        );
        let response: PricingResponse = self.send_json(self.http.post(url).json(request)).await?;
        info!(
            source = response.source.as_deref().unwrap_or("unknown"),
            factors = response.results.factors.len(),
            "price analysis received"
        );
        Ok(response)
    }

    /// Uploads a CSV as the multipart field `file`. A top-level `error` in
    /// the response fails the whole batch; per-row errors stay on the rows.
    pub async fn bulk_price(
        &self,
        file_name: &str,
        csv: Vec<u8>,
    ) -> Result<Vec<BulkItem>, ApiError> {
        let url = self.url("api/bulk_price")?;
        debug!(%url, file_name, bytes = csv.len(), "uploading bulk pricing CSV");

        let part = multipart::Part::bytes(csv)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let envelope: BulkEnvelope = self.send_json(self.http.post(url).multipart(form)).await?;
        if let Some(error) = envelope.error.filter(|error| !error.is_empty()) {
            warn!(%error, "bulk pricing rejected by server");
            return Err(ApiError::Api(error));
        }

        let failed = envelope
            .results
            .iter()
            .filter(|item| item.error.is_some())
            .count();
        info!(
            rows = envelope.results.len(),
            failed, "bulk pricing received"
        );
        Ok(envelope.results)
    }

    async fn send_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("pricing API answered 401; login required");
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.or(body.message))
                .filter(|message| !message.trim().is_empty());
            warn!(%status, ?message, "pricing API request failed");
            return Err(ApiError::Status { status, message });
        }

        Ok(response.json::<T>().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn estimate(min: u32, max: u32) -> serde_json::Value {
        json!({"min": min, "max": max, "explanation": "comparable listings"})
    }

    fn pricing_result() -> serde_json::Value {
        json!({
            "buy_price": estimate(100, 150),
            "max_profit_price": estimate(300, 350),
            "quick_sale_price": estimate(200, 220),
            "expected_sale_price": estimate(250, 300),
            "estimated_time_to_sell": {"min": 2, "max": 5, "unit": "day", "explanation": "steady"},
            "market_analysis": "Stable demand.",
            "factors": ["Condition", "Brand reputation"],
            "meta": {
                "models_used": ["claude", "gemini"],
                "timestamp": "2025-01-15T14:05:09Z",
                "price_range_variation": {"buy_price": {"min_cv": 0.1, "max_cv": 0.12}}
            }
        })
    }

    async fn client_for(server: &MockServer) -> PricingClient {
        PricingClient::with_base_url(&server.uri()).unwrap()
    }

    #[tokio::test]
    async fn models_are_listed_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [
                    {"id": "claude", "available": true},
                    {"id": "grok", "available": false}
                ]
            })))
            .mount(&server)
            .await;

        let models = client_for(&server).await.get_models().await.unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "claude");
        assert!(!models[1].available);
    }

    #[tokio::test]
    async fn unauthorized_is_reported_distinctly() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_models().await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn price_posts_the_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/price"))
            .and(body_json(json!({
                "brand": "Canon",
                "model": "AE-1",
                "condition": "Good",
                "additional_details": "black body",
                "use_sources": ["claude", "gemini"],
                "skip_cache": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": pricing_result(),
                "source": "cache",
                "cached_at": "2025-01-15T14:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = PricingRequest {
            brand: "Canon".into(),
            model: "AE-1".into(),
            condition: "Good".into(),
            additional_details: "black body".into(),
            use_sources: vec!["claude".into(), "gemini".into()],
            skip_cache: false,
        };
        let response = client_for(&server).await.price(&request).await.unwrap();

        assert!(response.from_cache());
        assert_eq!(response.results.buy_price.min, 100.0);
        assert_eq!(response.results.factors, ["Condition", "Brand reputation"]);
        let meta = response.results.meta.unwrap();
        assert_eq!(meta.price_range_variation.unwrap()[0].0, "buy_price");
    }

    #[tokio::test]
    async fn server_error_messages_are_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/price"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(json!({"error": "All models failed"})),
            )
            .mount(&server)
            .await;

        let request = PricingRequest {
            brand: "Sony".into(),
            model: "A7".into(),
            condition: "Fair".into(),
            additional_details: String::new(),
            use_sources: vec![],
            skip_cache: true,
        };
        let err = client_for(&server).await.price(&request).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status, .. } if status == StatusCode::BAD_GATEWAY));
        assert_eq!(err.user_message(), "All models failed");
    }

    #[tokio::test]
    async fn bare_server_errors_use_the_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_models().await.unwrap_err();
        assert_eq!(err.user_message(), GENERIC_NETWORK_ERROR);
    }

    #[tokio::test]
    async fn bulk_rows_keep_their_individual_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/bulk_price"))
            .and(body_string_contains("form-data; name=\"file\""))
            .and(body_string_contains("filename=\"items.csv\""))
            .and(body_string_contains("text/csv"))
            .and(body_string_contains("Nikon,F3,Good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "product": {"brand": "Nikon", "model": "F3", "condition": "Good"},
                        "results": pricing_result()
                    },
                    {
                        "product": {"brand": "Pentax", "model": "K1000", "condition": "Poor"},
                        "error": "Could not price item"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rows = client_for(&server)
            .await
            .bulk_price("items.csv", b"brand,model,condition\nNikon,F3,Good\n".to_vec())
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].results.is_some());
        assert_eq!(rows[1].error.as_deref(), Some("Could not price item"));
    }

    #[tokio::test]
    async fn bulk_top_level_error_fails_the_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/bulk_price"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": [], "error": "CSV missing brand column"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .bulk_price("items.csv", b"model\nF3\n".to_vec())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "CSV missing brand column");
    }
}
