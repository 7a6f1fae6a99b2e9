use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use rustfolio::services::GithubClient;
use rustfolio::web::{handlers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let state = Data::new(AppState {
        github: GithubClient::new(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(handlers::configure_catch_all)
    })
    .bind(
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
    )?
    .run()
    .await
}
