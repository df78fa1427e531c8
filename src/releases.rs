//! Release feed access.
//!
//! Fetches the releases-listing endpoint, validates the response shape,
//! and selects the latest release. The feed is expected to be a JSON
//! array of release objects, each carrying a `tag_name`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{Result, UpdateError};

/// How long a feed request may take before it is abandoned.
const FEED_TIMEOUT: Duration = Duration::from_secs(30);

/// One release in the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "1.3.0").
    pub tag_name: String,

    /// Publish date, when the feed provides one.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Fetches releases from the listing endpoint.
pub struct ReleaseFeed {
    client: reqwest::blocking::Client,
    url: String,
}

impl ReleaseFeed {
    /// Create a feed reader for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("zenup")
                .timeout(FEED_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url: url.into(),
        }
    }

    /// The endpoint this feed reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full release list.
    ///
    /// Requires an HTTP 200; any other status aborts before the body is
    /// looked at. The body must be a JSON array of release objects.
    pub fn fetch(&self) -> Result<Vec<Release>> {
        tracing::debug!(url = %self.url, "fetching release feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| UpdateError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(UpdateError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().map_err(|source| UpdateError::Transport {
            url: self.url.clone(),
            source,
        })?;

        parse_feed(&body)
    }

    /// Fetch the feed and return the latest release.
    pub fn latest(&self) -> Result<Release> {
        let releases = self.fetch()?;

        let latest = select_latest(&releases).ok_or_else(|| UpdateError::BadData {
            message: "release list is empty".to_string(),
        })?;

        if latest.tag_name.is_empty() {
            return Err(UpdateError::BadData {
                message: "latest release has an empty tag".to_string(),
            });
        }

        tracing::info!(tag = %latest.tag_name, "latest release");
        Ok(latest.clone())
    }
}

/// Parse a feed body into releases.
fn parse_feed(body: &str) -> Result<Vec<Release>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| UpdateError::BadData {
            message: format!("response is not valid JSON: {}", e),
        })?;

    if !value.is_array() {
        return Err(UpdateError::BadData {
            message: "top-level value is not an array".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| UpdateError::BadData {
        message: format!("release entry has an unexpected shape: {}", e),
    })
}

/// Select the latest release from a feed.
///
/// Releases carrying a publish date are compared and the most recent one
/// wins. When no release has a date, the first element is used — the feed
/// is assumed to list releases newest-first.
pub fn select_latest(releases: &[Release]) -> Option<&Release> {
    releases
        .iter()
        .filter(|r| r.published_at.is_some())
        .max_by_key(|r| r.published_at)
        .or_else(|| releases.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn fetch_parses_release_array() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"tag_name":"1.3.0"},{"tag_name":"1.2.3"}]"#);
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        let releases = feed.fetch().unwrap();

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].tag_name, "1.3.0");
    }

    #[test]
    fn non_200_status_aborts_before_parsing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            // Body is valid JSON that would otherwise parse; the status
            // alone must cause the failure.
            then.status(404).body(r#"[{"tag_name":"1.3.0"}]"#);
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        let err = feed.fetch().unwrap_err();

        assert!(matches!(err, UpdateError::HttpStatus { status: 404, .. }));
        assert!(err.to_string().contains("404"), "message names the status");
    }

    #[test]
    fn top_level_object_is_bad_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            then.status(200).body(r#"{"tag_name":"1.3.0"}"#);
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        let err = feed.fetch().unwrap_err();

        assert!(matches!(err, UpdateError::BadData { .. }));
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn invalid_json_is_bad_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            then.status(200).body("not json at all");
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        assert!(matches!(
            feed.fetch().unwrap_err(),
            UpdateError::BadData { .. }
        ));
    }

    #[test]
    fn connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let feed = ReleaseFeed::new("http://127.0.0.1:1/releases");
        assert!(matches!(
            feed.fetch().unwrap_err(),
            UpdateError::Transport { .. }
        ));
    }

    #[test]
    fn latest_of_empty_feed_is_bad_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            then.status(200).body("[]");
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        let err = feed.latest().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn latest_with_empty_tag_is_bad_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases");
            then.status(200).body(r#"[{"tag_name":""}]"#);
        });

        let feed = ReleaseFeed::new(server.url("/releases"));
        let err = feed.latest().unwrap_err();
        assert!(err.to_string().contains("empty tag"));
    }

    #[test]
    fn select_latest_prefers_most_recent_publish_date() {
        let releases = vec![
            Release {
                tag_name: "1.2.0".into(),
                published_at: "2026-01-10T00:00:00Z".parse().ok(),
            },
            Release {
                tag_name: "1.3.0".into(),
                published_at: "2026-03-01T00:00:00Z".parse().ok(),
            },
            Release {
                tag_name: "1.2.5".into(),
                published_at: "2026-02-01T00:00:00Z".parse().ok(),
            },
        ];

        assert_eq!(select_latest(&releases).unwrap().tag_name, "1.3.0");
    }

    #[test]
    fn select_latest_falls_back_to_first_element() {
        let releases = vec![
            Release {
                tag_name: "1.3.0".into(),
                published_at: None,
            },
            Release {
                tag_name: "1.2.0".into(),
                published_at: None,
            },
        ];

        assert_eq!(select_latest(&releases).unwrap().tag_name, "1.3.0");
    }

    #[test]
    fn select_latest_ignores_undated_entries_when_dates_exist() {
        let releases = vec![
            Release {
                tag_name: "nightly".into(),
                published_at: None,
            },
            Release {
                tag_name: "1.3.0".into(),
                published_at: "2026-03-01T00:00:00Z".parse().ok(),
            },
        ];

        assert_eq!(select_latest(&releases).unwrap().tag_name, "1.3.0");
    }

    #[test]
    fn select_latest_of_nothing_is_none() {
        assert!(select_latest(&[]).is_none());
    }

    #[test]
    fn release_deserializes_github_shape() {
        let json = r#"{
            "tag_name": "1.3.0",
            "name": "Release 1.3.0",
            "draft": false,
            "prerelease": false,
            "published_at": "2026-03-01T12:30:00Z",
            "assets": []
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "1.3.0");
        assert!(release.published_at.is_some());
    }
}
