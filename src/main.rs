use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mentor_match::config::Settings;
use mentor_match::core::MatchEngine;
use mentor_match::routes::{self, AppState};
use mentor_match::services::{build_http_client, MenteeServiceClient, MentorServiceClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    // LOG_LEVEL / LOG_FORMAT win over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());
    init_tracing(&log_level, &log_format);

    info!("Starting match service...");

    let http = build_http_client(settings.stores.timeout()).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("HTTP client error: {}", e))
    })?;

    let mentors = Arc::new(MentorServiceClient::new(settings.stores.mentor_url.clone(), http.clone()));
    let mentees = Arc::new(MenteeServiceClient::new(settings.stores.mentee_url.clone(), http));

    info!(
        "Store clients initialized (mentors: {}, mentees: {}, timeout: {}s)",
        mentors.base_url(),
        mentees.base_url(),
        settings.stores.timeout().as_secs()
    );

    let app_state = AppState {
        engine: MatchEngine::new(mentors, mentees),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
