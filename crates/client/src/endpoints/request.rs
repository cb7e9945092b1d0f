//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried after
//! 1s, 2s, 4s, ... up to `max_retries` times. Any other non-2xx status becomes
//! [`ClientError::ApiError`] carrying Grafana's `message` when the body has one.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GrafanaMessage;

/// Attach the bearer token, if any.
pub(crate) fn authorize(builder: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
        None => builder,
    }
}

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt was rate limited,
/// `ClientError::ApiError` for other non-success statuses, and
/// `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                }
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();
        if !ClientError::is_retryable_status(status) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        }
    }

    debug!(attempts = max_retries + 1, "Max retries exhausted for rate-limited request");
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass 2xx responses through; turn anything else into `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<GrafanaMessage>(&body) {
        Ok(m) if !m.message.is_empty() => m.message,
        _ => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Map a 404 `ApiError` to `NotFound` naming `what`.
pub(crate) fn not_found_as(err: ClientError, what: impl FnOnce() -> String) -> ClientError {
    match err {
        ClientError::ApiError { status: 404, .. } => ClientError::NotFound(what()),
        other => other,
    }
}
