use std::sync::Arc;

use social_profile::infra::config::Config;
use social_profile::infra::logger::Logger;
use social_profile::infra::state::AppState;
use social_profile::presentation::rest;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    Logger::init()?;

    let config = Config::init()?;

    let state = AppState::init(&config).await?;

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.app.port))
        .await?;

    tracing::info!(
        "Starting server on http://127.0.0.1:{}",
        config.app.port
    );

    rest::listen(listener, Arc::new(state)).await
}
