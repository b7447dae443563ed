//! HTTP implementation of [`CalculatorClient`]
//!
//! Posts a [`CalculationRequest`] as JSON to `{base_url}/calculate` over a
//! pooled hyper client. A 200 reply yields the number, a 400 reply with a
//! failure body yields [`CalculatorError::Rejected`], anything else is a
//! transport failure. No retries are attempted.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request, StatusCode, Uri};
use http_body_util::{BodyExt, Full, Limited};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::{debug, instrument, warn};

use crate::api::{CalculatorClient, CalculatorError};
use crate::models::{CalculationOutcome, CalculationRequest};
use crate::wire::CalculationResponse;

/// Default service location
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Path of the calculation endpoint
pub const CALCULATE_PATH: &str = "/calculate";

const APPLICATION_JSON: &str = "application/json";
const BODY_PREVIEW_LIMIT: usize = 256;

/// Configuration for [`CalculatorHttpClient`]
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Service base URL, e.g. `http://127.0.0.1:3000`
    pub base_url: String,

    /// Deadline for one complete exchange, body included (default: none)
    pub request_timeout: Option<Duration>,

    /// Maximum accepted reply body size in bytes (default: 64 KiB)
    pub max_body_size: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: None,
            max_body_size: 64 * 1024,
        }
    }
}

/// HTTP client for the calculation service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct CalculatorHttpClient {
    inner: Client<HttpConnector, Full<Bytes>>,
    endpoint: Uri,
    request_timeout: Option<Duration>,
    max_body_size: usize,
}

impl CalculatorHttpClient {
    /// Build a client for the service at `config.base_url`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidUri`] if the base URL is not an
    /// absolute `http://` URL.
    pub fn new(config: HttpClientConfig) -> Result<Self, CalculatorError> {
        let endpoint = build_endpoint(&config.base_url)?;
        let inner = Client::builder(TokioExecutor::new()).build_http();

        debug!(endpoint = %endpoint, "calculator HTTP client created");
        Ok(Self {
            inner,
            endpoint,
            request_timeout: config.request_timeout,
            max_body_size: config.max_body_size,
        })
    }

    /// Full URI of the calculation endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    async fn exchange(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<(StatusCode, Bytes), CalculatorError> {
        let response = self
            .inner
            .request(request)
            .await
            .map_err(|e| CalculatorError::Transport(Box::new(e)))?;

        let status = response.status();
        let body = Limited::new(response.into_body(), self.max_body_size)
            .collect()
            .await
            .map_err(CalculatorError::Transport)?
            .to_bytes();

        Ok((status, body))
    }
}

#[async_trait]
impl CalculatorClient for CalculatorHttpClient {
    #[instrument(skip(self, request), fields(operator = %request.operator))]
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalculatorError> {
        let payload = serde_json::to_vec(request).map_err(CalculatorError::Encode)?;
        let http_request = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| CalculatorError::Transport(Box::new(e)))?;

        debug!(
            num1 = request.num1,
            num2 = request.num2,
            "sending calculation request"
        );

        let (status, body) = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(http_request))
                .await
                .map_err(|_| CalculatorError::Timeout(limit))??,
            None => self.exchange(http_request).await?,
        };

        let result = decode_reply(status, &body);
        match &result {
            Ok(value) => debug!(result = *value, "calculation succeeded"),
            Err(CalculatorError::Rejected { kind, .. }) => {
                debug!(kind = %kind, "calculation rejected by service");
            }
            Err(e) => warn!(error = %e, status = %status, "calculation reply unusable"),
        }
        result
    }
}

fn build_endpoint(base_url: &str) -> Result<Uri, CalculatorError> {
    let url = format!("{}{CALCULATE_PATH}", base_url.trim_end_matches('/'));
    let invalid = |reason: String| CalculatorError::InvalidUri {
        url: url.clone(),
        reason,
    };

    let uri: Uri = url.parse().map_err(|e: http::uri::InvalidUri| invalid(e.to_string()))?;
    if uri.scheme_str() != Some("http") {
        return Err(invalid("only http:// service URLs are supported".to_owned()));
    }
    if uri.authority().is_none() {
        return Err(invalid("URL has no host".to_owned()));
    }
    Ok(uri)
}

fn decode_reply(status: StatusCode, body: &[u8]) -> Result<f64, CalculatorError> {
    if status != StatusCode::OK && status != StatusCode::BAD_REQUEST {
        return Err(CalculatorError::UnexpectedStatus {
            status,
            body_preview: preview(body),
        });
    }

    let wire: CalculationResponse =
        serde_json::from_slice(body).map_err(|e| CalculatorError::Decode(e.to_string()))?;
    let outcome =
        CalculationOutcome::try_from(wire).map_err(|e| CalculatorError::Decode(e.to_string()))?;

    match outcome {
        CalculationOutcome::Success { value } if status == StatusCode::OK => Ok(value),
        CalculationOutcome::Success { .. } => Err(CalculatorError::Decode(format!(
            "numeric result with HTTP {status}"
        ))),
        CalculationOutcome::Failure { kind, message } => {
            Err(CalculatorError::Rejected { kind, message })
        }
    }
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(BODY_PREVIEW_LIMIT).collect()
}
