use axum::extract::{Json, State};
use tracing::info;

use crate::{
    api::AppState,
    model::{FitnessProfile, PlanResult},
};

/// `POST /generate-plan`. Domain failures are reported in the body with 200.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(profile): Json<FitnessProfile>,
) -> Json<PlanResult> {
    info!(
        days = profile.days,
        duration = profile.duration,
        level = %profile.fitness_level,
        "generating workout plan"
    );

    Json(state.planner.generate_plan(&profile).await)
}
