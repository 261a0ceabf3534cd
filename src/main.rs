mod app;
mod config;
mod consumption;
mod db;
mod error;
mod extractors;
mod ledger;
mod nutrition;
mod pantry;
mod state;
mod targets;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "pantrymind=debug,axum=info,tower_http=info,sqlx=warn".to_string());
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

    let app_state = AppState::init().await?;
    let bind_addr = app_state.config.bind_addr();
    tracing::info!(database = %app_state.config.database_url, "ledger ready");

    app::serve(app::build_app(app_state), &bind_addr).await
}
