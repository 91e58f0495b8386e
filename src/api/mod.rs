pub mod health;
pub mod metrics;
pub mod users;
pub mod dashboard;
pub mod events;
pub mod swagger;

use actix_web::web;
use crate::utils::AppError;

fn bad_request(message: String) -> actix_web::Error {
    log::warn!("⚠️  Rejected request body: {}", message);
    AppError::InvalidRequest(message).into()
}

/// Registers every dashboard route. Shared by `main` and the handler tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err.to_string())))
        .app_data(web::FormConfig::default().error_handler(|err, _req| bad_request(err.to_string())))
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // ==================== PAGE ====================
        .route("/", web::get().to(dashboard::index))
        .route("/users", web::post().to(dashboard::submit_user_form))
        .route("/sitemap.xml", web::get().to(dashboard::sitemap))
        // ==================== JSON API ====================
        .service(
            web::scope("/api/v1/users")
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                .route("/graph", web::get().to(users::get_graph))
                .route("/graph/recompute", web::post().to(users::recompute_graph)),
        )
        // State change stream (observers)
        .route("/api/v1/events", web::get().to(events::stream_events));
}
