use anyhow::{anyhow, Context, Result};
use std::{env, sync::Arc};

use workout_planner::{
    config::Config, inference::GroqClient, model::FitnessProfile, planner::PlanService,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: plan_cli <profile.json>"))?;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let profile: FitnessProfile =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a fitness profile"))?;

    let config = Config::from_env()?;
    let planner = PlanService::new(Arc::new(GroqClient::new(&config.model)));

    eprintln!(
        "🎯 {}-day plan for a {} athlete via {}",
        profile.days,
        profile.fitness_level,
        planner.model_name()
    );

    let result = planner.generate_plan(&profile).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
