use log::info;
pub(crate) mod router;

use std::env;

use actix_web::{middleware::Logger, web, App, HttpServer};
use zora_lib::{config, external_services::zora::ZoraForwarder};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    config::init();
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Logger initialized at log level: {}", log_level);

    let forwarder = ZoraForwarder::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    info!("Forwarding /api/zora to {}", forwarder.url());
    let forwarder = web::Data::new(forwarder);
    let default_locale = web::Data::new(config::default_locale());

    let host = config::http_host();
    let port = config::http_port();
    info!("Binding to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(forwarder.clone())
            .app_data(default_locale.clone())
            .configure(router::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
