/// Data structures for the GitHub search response
use serde::Deserialize;

/// One open pull request as returned by the issue/PR search endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PullRequestSummary {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub repository_url: String,
}

impl PullRequestSummary {
    /// Link text shown in the results list, e.g. "#42 - Fix bug"
    pub fn link_label(&self) -> String {
        format!("#{} - {}", self.number, self.title)
    }

    /// Derive "owner/repo" from the API repository URL
    ///
    /// Takes the last two path segments, so
    /// https://api.github.com/repos/owner/repo -> owner/repo
    pub fn repo_label(&self) -> String {
        let parts: Vec<&str> = self.repository_url.split('/').collect();
        if parts.len() >= 2 {
            parts[parts.len() - 2..].join("/")
        } else {
            self.repository_url.clone()
        }
    }
}

/// Successful search response body; only `items` is read
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<PullRequestSummary>,
}

/// Error response body; GitHub usually includes a `message` field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pr() -> PullRequestSummary {
        PullRequestSummary {
            number: 42,
            title: "Fix bug".to_string(),
            html_url: "https://github.com/o/r/pull/42".to_string(),
            repository_url: "https://api.github.com/repos/o/r".to_string(),
        }
    }

    #[test]
    fn test_link_label() {
        assert_eq!(sample_pr().link_label(), "#42 - Fix bug");
    }

    #[test]
    fn test_repo_label() {
        assert_eq!(sample_pr().repo_label(), "o/r");
    }

    #[test]
    fn test_repo_label_short_url() {
        let pr = PullRequestSummary {
            repository_url: "repo".to_string(),
            ..sample_pr()
        };
        assert_eq!(pr.repo_label(), "repo");
    }

    #[test]
    fn test_deserialize_search_response() {
        let body = r#"{"total_count": 1, "items": [{"number": 42, "title": "Fix bug", "html_url": "https://github.com/o/r/pull/42", "repository_url": "https://api.github.com/repos/o/r"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0], sample_pr());
    }

    #[test]
    fn test_deserialize_error_body_without_message() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
    }
}
