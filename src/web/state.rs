use crate::services::GithubClient;

#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
}
