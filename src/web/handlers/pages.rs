use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, Responder};

use crate::web::helpers::{render, render_with_status};
use crate::web::templates::{
    AboutTemplate, ContactTemplate, HomeTemplate, NotFoundTemplate, UserTemplate,
};

#[get("/")]
pub async fn home() -> impl Responder {
    render(HomeTemplate)
}

#[get("/about")]
pub async fn about() -> impl Responder {
    render(AboutTemplate)
}

#[get("/contact")]
pub async fn contact() -> impl Responder {
    render(ContactTemplate)
}

#[get("/user/{userid}")]
pub async fn user_profile(path: web::Path<String>) -> impl Responder {
    let userid = path.into_inner();

    render(UserTemplate { userid })
}

/// Default service for paths outside the route table.
pub async fn not_found(req: HttpRequest) -> impl Responder {
    let path = req.path().to_string();

    render_with_status(NotFoundTemplate { path }, StatusCode::NOT_FOUND)
}
