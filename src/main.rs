use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workout_planner::{
    api::{self, AppState},
    config::Config,
    inference::GroqClient,
    planner::PlanService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let config = Config::from_env()?;
    let model = Arc::new(GroqClient::new(&config.model));
    let state = AppState {
        planner: PlanService::new(model),
    };

    info!(
        model = %state.planner.model_name(),
        base_url = %config.model.base_url,
        "🏋️ Starting workout plan service"
    );

    let app = api::app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🌐 HTTP listening on http://{addr}");
    info!("🛠 Plans at POST http://{addr}/generate-plan");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
