mod api;
mod models;
mod services;
mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use services::catalog_service::CatalogCache;
use services::kolada_service::{KoladaClient, StatisticsApi};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    log::info!("🚀 Starting Kommundata Service...");

    // One upstream client and one catalog cache shared by all workers.
    // The catalog stays empty until the first search forces a fetch.
    let kolada: Arc<dyn StatisticsApi> = Arc::new(KoladaClient::new());
    let api_data: web::Data<dyn StatisticsApi> = web::Data::from(kolada.clone());
    let catalog_data = web::Data::new(CatalogCache::new(kolada));

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The map front-end is served separately; keep CORS open like
        // the rest of the read-only API.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(api_data.clone())
            .app_data(catalog_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // KPI catalog and time series
            .route("/kpi_data", web::get().to(api::kpis::get_kpi_data))
            .route("/search_kpis", web::get().to(api::kpis::search_kpis))
            .route(
                "/historical_data/{kpi_id}/{municipality_id}",
                web::get().to(api::kpis::get_historical_data),
            )
            // Municipality reference and cross-kommun values
            .route("/municipality_ids", web::get().to(api::municipalities::get_municipality_ids))
            .route(
                "/municipality_data/{kpi_id}",
                web::get().to(api::municipalities::get_municipality_data),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
