/// Search query and URL construction for the GitHub search endpoint
use url::form_urlencoded;

const SEARCH_ENDPOINT: &str = "https://api.github.com/search/issues";

/// Build the literal search query for a user's open pull requests
pub fn build_search_query(username: &str) -> String {
    format!("is:pr is:open author:{username}")
}

/// Full search URL with the query urlencoded into the `q` parameter
///
/// Example:
/// - alice -> https://api.github.com/search/issues?q=is%3Apr+is%3Aopen+author%3Aalice
pub fn search_url(username: &str) -> String {
    let query = build_search_query(username);
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query)
        .finish();
    format!("{SEARCH_ENDPOINT}?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_query() {
        assert_eq!(build_search_query("alice"), "is:pr is:open author:alice");
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("alice"),
            "https://api.github.com/search/issues?q=is%3Apr+is%3Aopen+author%3Aalice"
        );
    }

    #[test]
    fn test_search_url_encodes_unusual_username() {
        let url = search_url("a b&c");
        assert!(url.starts_with("https://api.github.com/search/issues?q="));
        assert!(!url.contains(' '));
        assert!(!url.contains("&c"));
    }
}
