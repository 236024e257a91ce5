use anyhow::Context;

mod app;
mod auth;
mod config;
mod error;
mod extract;
mod state;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "doorman=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // A store that cannot be reached or migrated is fatal; the server never
    // comes up half-working.
    let state = AppState::init(AppConfig::from_env()).await?;
    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("run migrations")?;
    tracing::info!("connected to database");

    let app = app::build_app(state.clone());
    app::serve(app, &state.config).await?;

    state.close().await;
    tracing::info!("store connection closed");
    Ok(())
}
