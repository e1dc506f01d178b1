use actix_web::{middleware, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt; // <- needed for .try_init()
use tracing_subscriber::{fmt, EnvFilter};

use artist_worker::api;
use artist_worker::config::WorkerConfig;
use artist_worker::scrape::ScrapeClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logging
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish()
        .try_init();

    // Config
    let cfg = WorkerConfig::from_env();

    // Shared outbound client
    let sc = ScrapeClient::new(&cfg.user_agent, cfg.fetch_timeout);

    info!("🌐 artist worker listening on {}", cfg.bind_addr);
    let bind_addr = cfg.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(sc.clone()))
            .wrap(middleware::Logger::default())
            .wrap(api::cors(&cfg.allowed_origins))
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .workers(2)
    .run()
    .await
}
