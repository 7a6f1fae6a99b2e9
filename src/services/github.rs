use reqwest::header::USER_AGENT;

use crate::common::errors::GithubError;
use crate::models::GithubProfile;

/// The profile shown on the /github page.
pub const DEFAULT_PROFILE_URL: &str = "https://api.github.com/users/keval06";

// GitHub rejects requests without a User-Agent.
const AGENT: &str = concat!("rustfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    profile_url: String,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_PROFILE_URL)
    }

    /// Point the client at a different endpoint. Tests use this to stand in
    /// a local server for the GitHub API.
    pub fn with_url(profile_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            profile_url: profile_url.into(),
        }
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    /// Fetch the profile. One GET per call; nothing is cached between calls.
    pub async fn fetch_profile(&self) -> Result<GithubProfile, GithubError> {
        let resp = self
            .http
            .get(&self.profile_url)
            .header(USER_AGENT, AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GithubError::Status(status));
        }

        let body = resp.text().await?;
        let profile = serde_json::from_str(&body)?;

        Ok(profile)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
