use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Profile request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Profile endpoint returned {0}")]
    Status(StatusCode),

    #[error("Invalid profile response: {0}")]
    Decode(#[from] serde_json::Error),
}
