pub mod github;
pub mod pages;

use actix_web::web;

/// The route table, in registration order. `{userid}` is the only path
/// parameter. The 404 catch-all is registered separately.
pub const ROUTE_PATHS: &[&str] = &["/", "/about", "/contact", "/user/{userid}", "/github"];

/// Configure all routes EXCEPT the catch-all 404 handler.
/// The catch-all must be registered last to avoid matching before specific routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::about)
        .service(pages::contact)
        .service(pages::user_profile)
        .service(github::github);
}

/// Configure the catch-all 404 handler. This MUST be called last.
pub fn configure_catch_all(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(pages::not_found));
}
