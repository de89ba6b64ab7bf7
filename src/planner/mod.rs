use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::inference::PlanModel;
use crate::model::{FitnessProfile, PlanResult};
use crate::prompts::render_plan_prompt;

/// Renders a profile into the trainer prompt and asks the model for a plan.
#[derive(Clone)]
pub struct PlanService {
    model: Arc<dyn PlanModel>,
}

impl PlanService {
    pub fn new(model: Arc<dyn PlanModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Never fails: every error is folded into the `error` envelope.
    pub async fn generate_plan(&self, profile: &FitnessProfile) -> PlanResult {
        match self.try_generate(profile).await {
            Ok(text) => PlanResult::plan(text),
            Err(err) => {
                warn!("workout plan generation failed: {err}");
                PlanResult::failed(err)
            }
        }
    }

    async fn try_generate(&self, profile: &FitnessProfile) -> Result<String, GenerationError> {
        let prompt = render_plan_prompt(profile)?;
        let text = self.model.complete(&prompt).await?;
        debug!(reply_chars = text.len(), "model reply received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::fake::FakeModel;

    fn profile() -> FitnessProfile {
        FitnessProfile {
            fitness_level: "beginner".into(),
            goals: vec!["weight loss".into(), "endurance".into()],
            equipment: vec!["dumbbells".into()],
            days: 3,
            duration: 30,
            focus_areas: vec!["full body".into()],
        }
    }

    #[tokio::test]
    async fn returns_model_text_verbatim() {
        let reply = "**Day 1**\n- Squats 3x12\n\n**Day 2**\n- Rest ";
        let model = Arc::new(FakeModel::replying(reply));
        let service = PlanService::new(model.clone());

        let result = service.generate_plan(&profile()).await;

        assert_eq!(result, PlanResult::plan(reply));
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn sends_rendered_prompt_to_model() {
        let model = Arc::new(FakeModel::replying("ok"));
        let service = PlanService::new(model.clone());

        service.generate_plan(&profile()).await;

        let prompts = model.prompts();
        let prompt = &prompts[0];
        assert!(prompt.contains("Create a personalized 3-day workout plan"));
        assert!(prompt.contains("weight loss, endurance"));
        assert!(prompt.contains("dumbbells"));
        assert!(prompt.contains("30 minutes"));
        assert!(prompt.contains("full body"));
    }

    #[tokio::test]
    async fn model_failure_becomes_error_envelope() {
        let service = PlanService::new(Arc::new(FakeModel::failing(429, "Rate limit reached")));

        let result = service.generate_plan(&profile()).await;

        match result {
            PlanResult::Failed { error } => {
                assert!(error.contains("429"));
                assert!(error.contains("Rate limit reached"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_model_text_is_still_a_plan() {
        let service = PlanService::new(Arc::new(FakeModel::replying("")));

        let result = service.generate_plan(&profile()).await;

        assert_eq!(result, PlanResult::plan(""));
    }
}
