mod api;
mod config;
mod middleware;
mod models;
mod seeds;
mod services;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::AppConfig::from_env()?;

    log::info!("🚀 Starting {}...", config.app_name);
    log::info!("🔗 Public URL: {}", config.api_url);

    // 🌱 Estado inicial com os clientes padrão
    let state = seeds::users_seed::seed_dashboard(config.event_channel_capacity);

    let state_data = web::Data::new(state);
    let config_data = web::Data::new(config.clone());

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", config.bind_address());
    if config.enable_sitemap {
        log::info!("🗺️  Sitemap at: {}/sitemap.xml", config.api_url);
    }

    let origins = config.frontend_origins.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CACHE_CONTROL,
            ])
            .expose_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state_data.clone())
            .app_data(config_data.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(middleware::SecurityHeaders)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure_routes)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
