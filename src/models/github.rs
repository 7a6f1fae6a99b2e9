use serde::Deserialize;

/// The slice of the GitHub user object the profile page renders.
///
/// Only `followers` and `avatar_url` are required; the rest default when
/// absent so a trimmed-down payload still deserializes.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubProfile {
    #[serde(default)]
    pub login: String,
    pub followers: u64,
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
}
