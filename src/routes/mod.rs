// Route exports
pub mod matches;

use actix_web::web;

use crate::error::{handle_json_payload_error, handle_path_error};

pub use matches::AppState;

/// Register the routes and the extractor error handlers that keep
/// every rejection a JSON body
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .configure(matches::configure);
}
