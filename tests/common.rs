use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web::Data;
use actix_web::{web, App, HttpResponse};

use rustfolio::services::GithubClient;
use rustfolio::web::AppState;

/// State whose profile endpoint points at a port nothing listens on.
pub fn offline_state() -> Data<AppState> {
    state_for("http://127.0.0.1:1/users/nobody")
}

pub fn state_for(url: impl Into<String>) -> Data<AppState> {
    Data::new(AppState {
        github: GithubClient::with_url(url),
    })
}

/// Serve `payload` at /users/mock, counting how many requests arrive.
pub fn mock_profile_server(
    payload: serde_json::Value,
) -> (actix_test::TestServer, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = hits.clone();

    let srv = actix_test::start(move || {
        let hits = hits_srv.clone();
        let payload = payload.clone();

        App::new().route(
            "/users/mock",
            web::get().to(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                let payload = payload.clone();
                async move { HttpResponse::Ok().json(payload) }
            }),
        )
    });

    (srv, hits)
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
