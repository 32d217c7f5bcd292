/// GitHub search client: one authenticated GET against the search endpoint
///
/// The network side lives behind a trait so the controller can be driven by a
/// fake in tests; decoding is a pure function shared by both.
use async_trait::async_trait;
use thiserror::Error;

use crate::pr_data::{ApiErrorBody, PullRequestSummary, SearchResponse};

/// Failures in the fetch path; surfaced to the user as "Error: <display>"
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Non-success HTTP status, with GitHub's message when one was decodable
    #[error("GitHub API Error: {status} {message}")]
    Api { status: u16, message: String },

    /// Network-level failure (unreachable host, DNS, aborted request)
    #[error("{0}")]
    Transport(String),

    /// Success status but a body that does not match the expected shape
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Asynchronous client for the open-pull-request search
#[async_trait(?Send)]
pub trait PullRequestClient {
    /// Single-attempt search; no retry, no backoff
    async fn search_open_pull_requests(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Vec<PullRequestSummary>, FetchError>;
}

/// Decode a search response body given its HTTP status
///
/// Non-success statuses become an `Api` error carrying the body's `message`
/// field; a body that is not valid JSON falls back to an empty message.
/// Successful bodies must parse into the expected shape, and items keep the
/// order the API returned them in.
pub fn decode_search_body(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<Vec<PullRequestSummary>, FetchError> {
    if !ok {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_default();
        return Err(FetchError::Api { status, message });
    }

    let response: SearchResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))?;
    Ok(response.items)
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::{FetchError, PullRequestClient, decode_search_body};
    use crate::pr_data::PullRequestSummary;
    use crate::query::search_url;

    /// Live client over the browser fetch primitive
    pub struct GitHubClient;

    #[async_trait(?Send)]
    impl PullRequestClient for GitHubClient {
        async fn search_open_pull_requests(
            &self,
            username: &str,
            token: &str,
        ) -> Result<Vec<PullRequestSummary>, FetchError> {
            let response = Request::get(&search_url(username))
                .header("Authorization", &format!("token {token}"))
                .header("Accept", "application/vnd.github.v3+json")
                .send()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;

            let status = response.status();
            let ok = response.ok();
            let body = response
                .text()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;

            decode_search_body(status, ok, &body)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::GitHubClient;
