use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::collections::HashSet;
use log::{debug, error};
use crate::config::{Config, UserAgentPool};
use crate::error::FetchError;

/// A search hit that can be downloaded. Description and dimensions are
/// only used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate {
    pub id: String,
    pub url: String,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Finds one not-yet-used image for a search term on a result page.
///
/// `None` means "nothing new on this page", whether the page was empty,
/// fully used, or the request failed.
pub trait ImageSearch {
    fn search(&self, base: &str, page: u32, used_ids: &HashSet<String>) -> Option<ImageCandidate>;
}

impl<T: ImageSearch + ?Sized> ImageSearch for &T {
    fn search(&self, base: &str, page: u32, used_ids: &HashSet<String>) -> Option<ImageCandidate> {
        (**self).search(base, page, used_ids)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<PhotoResult>,
}

#[derive(Debug, Deserialize)]
struct PhotoResult {
    id: String,
    urls: PhotoUrls,
    description: Option<String>,
    alt_description: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

impl From<PhotoResult> for ImageCandidate {
    fn from(photo: PhotoResult) -> Self {
        ImageCandidate {
            id: photo.id,
            url: photo.urls.regular,
            description: photo.description.or(photo.alt_description),
            width: photo.width,
            height: photo.height,
        }
    }
}

/// Unsplash photo search over a blocking HTTP client.
pub struct SearchEngine {
    client: Client,
    api_base: String,
    access_key: String,
    per_page: u32,
    user_agents: UserAgentPool,
}

impl SearchEngine {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.search_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(SearchEngine {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
            per_page: config.per_page,
            user_agents: config.user_agents.clone(),
        })
    }

    fn fetch_page(&self, base: &str, page: u32) -> Result<Vec<ImageCandidate>, FetchError> {
        let url = format!("{}/search/photos", self.api_base);
        let per_page = self.per_page.to_string();
        let page = page.to_string();

        debug!("Sending search request: {} query='{}' page={}", url, base, page);

        let resp = self.client.get(&url)
            .query(&[
                ("query", base),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
                ("orientation", "landscape"),
            ])
            .header(AUTHORIZATION, format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .header(USER_AGENT, self.user_agents.pick())
            .send()
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        let status = resp.status();
        debug!("Search response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body: SearchResponse = resp
            .json()
            .map_err(|source| FetchError::Malformed { url, source })?;

        debug!("Received {} results", body.results.len());
        Ok(body.results.into_iter().map(ImageCandidate::from).collect())
    }
}

impl ImageSearch for SearchEngine {
    fn search(&self, base: &str, page: u32, used_ids: &HashSet<String>) -> Option<ImageCandidate> {
        match self.fetch_page(base, page) {
            Ok(candidates) if candidates.is_empty() => {
                debug!("No results found for '{}' on page {}", base, page);
                None
            }
            Ok(candidates) => {
                let found = first_unused(candidates, used_ids);
                if found.is_none() {
                    debug!("All images on page {} for '{}' have been used already", page, base);
                }
                found
            }
            Err(e) => {
                error!("Error fetching search results for '{}': {}", base, e);
                None
            }
        }
    }
}

/// First candidate, in API order, whose id is not in `used_ids`.
pub fn first_unused(candidates: Vec<ImageCandidate>, used_ids: &HashSet<String>) -> Option<ImageCandidate> {
    for candidate in candidates {
        if used_ids.contains(&candidate.id) {
            debug!("Skipping already used image ID: {}", candidate.id);
            continue;
        }

        debug!(
            "Found image {} ({}x{}): {} -> {}",
            candidate.id,
            candidate.width.map_or_else(|| "?".to_string(), |w| w.to_string()),
            candidate.height.map_or_else(|| "?".to_string(), |h| h.to_string()),
            candidate.description.as_deref().unwrap_or("No description"),
            candidate.url
        );
        return Some(candidate);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    fn candidate(id: &str) -> ImageCandidate {
        ImageCandidate {
            id: id.to_string(),
            url: format!("https://images.example.com/{}", id),
            description: None,
            width: None,
            height: None,
        }
    }

    fn engine_for(base_url: &str) -> SearchEngine {
        let mut config = Config::new("test-key");
        config.api_base = base_url.to_string();
        SearchEngine::new(&config).expect("client builds")
    }

    #[test]
    fn test_first_unused_skips_used_ids() {
        let used: HashSet<String> = ["A".to_string()].into_iter().collect();
        let picked = first_unused(vec![candidate("A"), candidate("B"), candidate("C")], &used);
        assert_eq!(picked.map(|c| c.id), Some("B".to_string()));
    }

    #[test]
    fn test_first_unused_exhausted_page() {
        let mut used = HashSet::new();
        let page = || vec![candidate("A"), candidate("B")];

        for _ in 0..2 {
            let picked = first_unused(page(), &used).expect("candidate left");
            assert!(!used.contains(&picked.id));
            used.insert(picked.id);
        }
        assert_eq!(first_unused(page(), &used), None);
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_search_parses_response_and_sends_query() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/photos")
                .query_param("query", "office chair")
                .query_param("per_page", "10")
                .query_param("page", "2")
                .query_param("orientation", "landscape")
                .header("authorization", "Client-ID test-key")
                .header("accept-version", "v1")
                .header_exists("user-agent");
            then.status(200).json_body(json!({
                "total": 2,
                "results": [
                    {"id": "abc", "width": 4000, "height": 3000, "description": null,
                     "alt_description": "a wooden chair",
                     "urls": {"regular": "https://images.example.com/abc?w=1080", "full": "x"}},
                    {"id": "def", "width": 10, "height": 10,
                     "urls": {"regular": "https://images.example.com/def"}}
                ]
            }));
        });

        let used: HashSet<String> = ["abc".to_string()].into_iter().collect();
        let picked = engine_for(&server.base_url())
            .search("office chair", 2, &used)
            .expect("def is unused");

        search_mock.assert();
        assert_eq!(picked.id, "def");
        assert_eq!(picked.url, "https://images.example.com/def");
        assert_eq!((picked.width, picked.height), (Some(10), Some(10)));
    }

    #[test]
    fn test_search_description_falls_back_to_alt() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/photos");
            then.status(200).json_body(json!({
                "results": [{"id": "abc", "alt_description": "a lamp",
                             "urls": {"regular": "https://images.example.com/abc"}}]
            }));
        });

        let picked = engine_for(&server.base_url()).search("lamp", 1, &HashSet::new());
        assert_eq!(picked.and_then(|c| c.description), Some("a lamp".to_string()));
    }

    #[test]
    fn test_search_empty_page_is_none() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET).path("/search/photos");
            then.status(200).json_body(json!({"results": []}));
        });

        assert_eq!(engine_for(&server.base_url()).search("lamp", 1, &HashSet::new()), None);
        search_mock.assert();
    }

    #[test]
    fn test_search_error_status_is_none() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET).path("/search/photos");
            then.status(401).json_body(json!({"errors": ["OAuth error: The access token is invalid"]}));
        });

        assert_eq!(engine_for(&server.base_url()).search("lamp", 1, &HashSet::new()), None);
        search_mock.assert();
    }

    #[test]
    fn test_search_malformed_body_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/photos");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>not json</html>");
        });

        assert_eq!(engine_for(&server.base_url()).search("lamp", 1, &HashSet::new()), None);
    }

    #[test]
    fn test_search_connection_failure_is_none() {
        // Nothing listens on port 1 on the loopback interface.
        let engine = engine_for("http://127.0.0.1:1");
        assert_eq!(engine.search("lamp", 1, &HashSet::new()), None);
    }
}
