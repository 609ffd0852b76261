//! HTTP transport for the ledger API.
//!
//! Issues GET and POST requests, returns the raw body text on success and
//! maps error statuses to [`LedgerError`].

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::types::{ApiErrorBody, LedgerConfig, DEFAULT_USER_AGENT};

/// Thin wrapper around a `reqwest::Client` bound to one ledger API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Client configuration.
    config: LedgerConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// `User-Agent` sent on every request.
    user_agent: HeaderValue,
}

impl HttpTransport {
    /// Create a transport for the given configuration.
    ///
    /// A `user_agent` that is not a valid header value is replaced by the
    /// default identifier.
    pub fn new(config: LedgerConfig) -> Self {
        let user_agent = HeaderValue::from_str(&config.user_agent).unwrap_or_else(|_| {
            warn!(
                configured = %config.user_agent.escape_debug(),
                fallback = DEFAULT_USER_AGENT,
                "invalid user agent, using default"
            );
            HeaderValue::from_static(DEFAULT_USER_AGENT)
        });
        let client = reqwest::Client::new();
        Self {
            config,
            client,
            user_agent,
        }
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// GET `path` relative to the base URL and return the body text.
    pub async fn get(&self, path: &str) -> Result<String, LedgerError> {
        let url = self.config.url(path);
        debug!(%url, "GET");
        self.execute(self.client.get(&url)).await
    }

    /// POST a JSON `body` to `path` relative to the base URL and return
    /// the body text.
    pub async fn post(&self, path: &str, body: String) -> Result<String, LedgerError> {
        let url = self.config.url(path);
        debug!(%url, bytes = body.len(), "POST");
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, LedgerError> {
        let resp = request.headers(self.build_headers()).send().await?;
        read_response(resp).await
    }

    /// Build common headers from config.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers
    }
}

/// Return the body of a successful response, or the error it encodes.
///
/// Statuses below 400 count as success. An error body that parses as
/// `{ErrorCode, SubCode}` becomes [`LedgerError::ApiError`]; anything else
/// becomes [`LedgerError::TransportError`].
async fn read_response(resp: Response) -> Result<String, LedgerError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;

    if status < 400 {
        return Ok(text);
    }

    debug!(status, "ledger API returned an error status");
    Err(match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => LedgerError::ApiError {
            error_code: body.error_code,
            sub_code: body.sub_code,
        },
        Err(_) => LedgerError::TransportError {
            status_code: status,
            message: text,
        },
    })
}
