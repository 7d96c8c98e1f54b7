//! Shared HTTP helpers for adapter clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`AdapterError::Api`]) and JSON request/response
//! handling so individual adapter modules stay focused on request
//! construction and response mapping.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::AdapterClient;
use crate::error::AdapterError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`AdapterError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`AdapterError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AdapterError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(AdapterError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(AdapterError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Decode a successful response body, reporting malformed JSON as
/// [`AdapterError::Parse`] rather than a transport error.
pub async fn decode_json<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, AdapterError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| AdapterError::Parse(e.to_string()))
}

impl AdapterClient {
    /// `POST url` with a JSON body and decode the JSON response.
    pub(crate) async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, AdapterError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.http.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let resp = check_response(request.send().await?).await?;
        decode_json(resp).await
    }

    /// `POST url` with a JSON body, ignoring any response body.
    pub(crate) async fn post_discard<B>(&self, url: &str, body: &B) -> Result<(), AdapterError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut request = self.http.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        check_response(request.send().await?).await?;
        Ok(())
    }

    /// `GET url` and decode the JSON response.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, AdapterError> {
        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let resp = check_response(request.send().await?).await?;
        decode_json(resp).await
    }
}
