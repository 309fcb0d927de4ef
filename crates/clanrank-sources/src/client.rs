//! HTTP clients for the RuneProfile and Wise Old Man APIs.
//!
//! Both wrap `reqwest` with typed response deserialization. Each service
//! signals a missing entity with a JSON `{"message": "..."}` body rather
//! than an HTTP error; the clients surface that as `Ok(None)` so callers
//! score the absence instead of failing.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SourceError;
use crate::types::{GroupResponse, PlayerResponse, ProfileResponse};

const USER_AGENT: &str = "clanrank/0.1 (clan-rank-calculator)";

/// Client for the RuneProfile API.
pub struct RuneProfileClient {
    client: Client,
    base_url: Url,
}

impl RuneProfileClient {
    /// Creates a client for the given base URL (production or a wiremock
    /// server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::Url`] for an invalid base.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetches a player's profile.
    ///
    /// Returns `Ok(None)` when the service reports the account missing.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_profile(
        &self,
        username: &str,
    ) -> Result<Option<ProfileResponse>, SourceError> {
        let url = join_path(&self.base_url, &["profiles", username])?;
        let body = request_json(&self.client, &url).await?;

        if is_not_found(&body, "Account not found.") {
            tracing::warn!(username, "RuneProfile account not found");
            return Ok(None);
        }

        let profile =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("profile({username})"),
                source: e,
            })?;
        Ok(Some(profile))
    }
}

/// Client for the Wise Old Man v2 API.
pub struct WiseOldManClient {
    client: Client,
    base_url: Url,
}

impl WiseOldManClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::Url`] for an invalid base.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetches a player's efficiency stats and latest skill snapshot.
    ///
    /// Returns `Ok(None)` when the service reports the player missing.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_player(&self, username: &str) -> Result<Option<PlayerResponse>, SourceError> {
        let url = join_path(&self.base_url, &["players", username])?;
        let body = request_json(&self.client, &url).await?;

        if is_not_found(&body, "Player not found.") {
            tracing::warn!(username, "Wise Old Man player not found");
            return Ok(None);
        }

        let player = serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
            context: format!("player({username})"),
            source: e,
        })?;
        Ok(Some(player))
    }

    /// Fetches a clan group with its membership list.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_group(&self, group_id: u64) -> Result<GroupResponse, SourceError> {
        let url = join_path(&self.base_url, &["groups", &group_id.to_string()])?;
        let body = request_json(&self.client, &url).await?;

        serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
            context: format!("group({group_id})"),
            source: e,
        })
    }
}

fn build_http_client(timeout_secs: u64) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    Url::parse(base_url).map_err(|e| SourceError::Url(format!("'{base_url}': {e}")))
}

/// Appends path segments to a clone of the base URL. Segments are
/// percent-encoded, so usernames with spaces are handled.
fn join_path(base: &Url, segments: &[&str]) -> Result<Url, SourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::Url(format!("'{base}' cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
async fn request_json(client: &Client, url: &Url) -> Result<serde_json::Value, SourceError> {
    let response = client.get(url.clone()).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
        context: url.to_string(),
        source: e,
    })
}

/// Both APIs flag a missing entity with a `message` field in an otherwise
/// successful response.
fn is_not_found(body: &serde_json::Value, message: &str) -> bool {
    body.get("message").and_then(serde_json::Value::as_str) == Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_path_appends_segments() {
        let base = Url::parse("https://api.wiseoldman.net/v2").unwrap();
        let url = join_path(&base, &["players", "Zezima"]).unwrap();
        assert_eq!(url.as_str(), "https://api.wiseoldman.net/v2/players/Zezima");
    }

    #[test]
    fn join_path_handles_trailing_slash() {
        let base = Url::parse("https://api.runeprofile.com/").unwrap();
        let url = join_path(&base, &["profiles", "Zezima"]).unwrap();
        assert_eq!(url.as_str(), "https://api.runeprofile.com/profiles/Zezima");
    }

    #[test]
    fn join_path_encodes_spaces() {
        let base = Url::parse("https://api.runeprofile.com").unwrap();
        let url = join_path(&base, &["profiles", "Iron Name"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.runeprofile.com/profiles/Iron%20Name"
        );
    }

    #[test]
    fn not_found_detection_is_exact() {
        let body = serde_json::json!({ "message": "Account not found." });
        assert!(is_not_found(&body, "Account not found."));
        assert!(!is_not_found(&body, "Player not found."));
        let ok_body = serde_json::json!({ "quests": [] });
        assert!(!is_not_found(&ok_body, "Account not found."));
    }
}
