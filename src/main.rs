use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use slotbook_api::clients::HttpSchedulingApi;
use slotbook_api::config::AppConfig;
use slotbook_api::handlers;
use slotbook_api::openapi_config::ApiDoc;
use slotbook_api::services::{AvailabilityService, BookingService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize the outbound client for the remote scheduling service
    let scheduling_api = Arc::new(HttpSchedulingApi::new(config.scheduling_api_url.clone()));

    // Initialize services with dependency injection
    let availability_service = web::Data::new(AvailabilityService::new());
    let booking_service = web::Data::new(BookingService::new(scheduling_api));

    tracing::info!("Slotbook API listening on http://{}", config.bind_address);
    tracing::info!(
        "API documentation: http://{}/swagger-ui/",
        config.bind_address
    );

    let openapi_spec = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(availability_service.clone())
            .app_data(booking_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::default())
            // Swagger UI for API documentation
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .route(
                "/api/availability",
                web::post().to(handlers::set_availability_api),
            )
            .route(
                "/api/users/{username}/booking",
                web::post().to(handlers::confirm_booking_api),
            )
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
