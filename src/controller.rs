/// Popup workflow: credential persistence and the fetch-and-render pipeline
///
/// The controller owns no UI. It takes the store and client as injected
/// collaborators, validates input before any I/O, and reports outcomes the
/// popup maps to status lines.
use crate::github::PullRequestClient;
use crate::pr_data::PullRequestSummary;
use crate::storage::{KeyValueStore, StoreError, TOKEN_KEY, USERNAME_KEY};

pub const MSG_EMPTY_TOKEN: &str = "Please enter a token.";
pub const MSG_TOKEN_SAVED: &str = "Token saved successfully!";
pub const MSG_EMPTY_USERNAME: &str = "Please enter a GitHub username.";
pub const MSG_MISSING_TOKEN: &str = "Please save a Personal Access Token first.";
pub const MSG_FETCHING: &str = "Fetching...";
pub const MSG_NO_RESULTS: &str = "No open pull requests found.";

/// Placeholder shown on the token field once a token is stored; the token
/// value itself is never echoed back
pub const TOKEN_SAVED_PLACEHOLDER: &str = "Token is saved";

/// Form state restored when the popup opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitState {
    pub username: Option<String>,
    pub token_saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTokenOutcome {
    /// Empty input; nothing was written
    EmptyToken,
    Saved,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Empty username; no I/O was performed
    EmptyUsername,
    /// No token in storage; no network call was made
    MissingToken,
    Fetched(Vec<PullRequestSummary>),
    Failed(String),
}

/// Status line for a completed fetch
pub fn results_status(items: &[PullRequestSummary]) -> String {
    if items.is_empty() {
        MSG_NO_RESULTS.to_string()
    } else {
        format!("Found {} open pull request(s).", items.len())
    }
}

/// Status line for a failed fetch
pub fn failure_status(message: &str) -> String {
    format!("Error: {message}")
}

pub struct PopupController<S, C> {
    store: S,
    client: C,
}

impl<S: KeyValueStore, C: PullRequestClient> PopupController<S, C> {
    pub fn new(store: S, client: C) -> Self {
        PopupController { store, client }
    }

    /// Restore persisted form state on popup open
    ///
    /// Missing keys are treated as absent, not failures. Only token
    /// *presence* is reported; the secret stays in storage.
    pub async fn initialize(&self) -> InitState {
        let username = self.store.get(USERNAME_KEY).await;
        let token_saved = self.store.get(TOKEN_KEY).await.is_some();
        InitState {
            username,
            token_saved,
        }
    }

    /// Persist a new token, overwriting any previous one
    pub async fn save_token(&self, raw_input: &str) -> Result<SaveTokenOutcome, StoreError> {
        if raw_input.is_empty() {
            return Ok(SaveTokenOutcome::EmptyToken);
        }
        self.store.set(TOKEN_KEY, raw_input).await?;
        Ok(SaveTokenOutcome::Saved)
    }

    /// Validate, then run the single search request
    ///
    /// The username write is fire-and-forget: its failure never blocks the
    /// fetch. The stored token is a hard precondition checked before any
    /// network call. One attempt only; failures are logged and reported as
    /// a displayable message.
    pub async fn fetch_pull_requests(&self, username: &str) -> FetchOutcome {
        if username.is_empty() {
            return FetchOutcome::EmptyUsername;
        }

        // Save username for next time
        if let Err(err) = self.store.set(USERNAME_KEY, username).await {
            log::warn!("failed to persist username: {err}");
        }

        let Some(token) = self.store.get(TOKEN_KEY).await else {
            return FetchOutcome::MissingToken;
        };

        match self.client.search_open_pull_requests(username, &token).await {
            Ok(items) => FetchOutcome::Fetched(items),
            Err(err) => {
                log::error!("pull request fetch failed: {err}");
                FetchOutcome::Failed(err.to_string())
            }
        }
    }
}
