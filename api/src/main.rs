use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;
use tb_api::{app::create_app, config};
use tb_core::services::{PasswordHasher, TokenService, TokenServiceConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::load().context("Failed to load configuration")?;

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting Toolbox API Server ({})", config.environment);

    let tokens = web::Data::new(TokenService::new(TokenServiceConfig::from_app_config(&config)?)?);
    let hasher = web::Data::new(PasswordHasher::from_config(&config.auth.password));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(tokens.clone(), hasher.clone()).wrap(Logger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
