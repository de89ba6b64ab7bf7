use axum::{routing::post, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::planner::PlanService;

pub mod handlers;

// ------------------------------------------------------------
// STATE
// ------------------------------------------------------------
#[derive(Clone)]
pub struct AppState {
    pub planner: PlanService,
}

// ------------------------------------------------------------
// ROUTER
// ------------------------------------------------------------
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-plan", post(handlers::generate_plan))
}

/// Full application: routes, permissive CORS, shared state.
pub fn app(state: AppState) -> Router {
    router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
