use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadowtax::config::Config;
use shadowtax::middleware::RequestId;
use shadowtax::modules;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadowtax=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting Shadowtax Tax Estimation Engine");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        // The dashboard frontend is served from another origin
        let cors = Cors::permissive();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(cors)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .configure(modules::taxes::controllers::configure)
            .configure(modules::gaps::controllers::configure)
            .configure(modules::transactions::controllers::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shadowtax"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Shadowtax Tax Estimation Engine",
        "version": "0.1.0",
        "status": "running"
    }))
}
