use serde::Serialize;
use std::fmt::Display;

/// Response envelope: exactly one of `workout_plan` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanResult {
    Plan { workout_plan: String },
    Failed { error: String },
}

impl PlanResult {
    pub fn plan(text: impl Into<String>) -> Self {
        PlanResult::Plan {
            workout_plan: text.into(),
        }
    }

    pub fn failed(err: impl Display) -> Self {
        let error = err.to_string();
        let error = if error.trim().is_empty() {
            "workout plan generation failed".to_string()
        } else {
            error
        };
        PlanResult::Failed { error }
    }

    #[inline]
    pub fn is_plan(&self) -> bool {
        matches!(self, PlanResult::Plan { .. })
    }
}
