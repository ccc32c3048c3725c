//! Network fetching with timeout and session caching.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::AbortController;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::cache;

/// Fetch text from a URL.
///
/// The request is aborted once `FETCH_TIMEOUT_MS` elapses; dropping the
/// deadline on completion cancels the abort.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let signal = controller.signal();
    let _deadline = Timeout::new(FETCH_TIMEOUT_MS, move || controller.abort());

    let response = Request::get(url)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| {
            if signal.aborted() {
                FetchError::Timeout
            } else {
                FetchError::NetworkError(e.to_string())
            }
        })?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch and parse JSON with sessionStorage caching.
///
/// Tries the session cache first. On a miss, fetches from the network and
/// stores the decoded value for the rest of the session.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;

    // Best-effort; a full quota only costs a refetch.
    if let Err(e) = cache::set(cache_key, &data) {
        log::debug!("could not cache '{}': {:?}", cache_key, e);
    }

    Ok(data)
}
