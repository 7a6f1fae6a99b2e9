use actix_web::http::StatusCode;
use actix_web::{get, web, Responder};

use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{ErrorTemplate, GithubTemplate};

/// The profile is fetched before the page renders; nothing is cached, so
/// every visit issues exactly one request to the endpoint.
#[get("/github")]
pub async fn github(state: web::Data<AppState>) -> impl Responder {
    match state.github.fetch_profile().await {
        Ok(profile) => render(GithubTemplate { profile }),
        Err(e) => {
            log::error!("github profile fetch failed: {e}");
            render_with_status(
                ErrorTemplate {
                    message: e.to_string(),
                },
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}
