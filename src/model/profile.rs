use serde::{Deserialize, Serialize};

/// Body of `POST /generate-plan`. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProfile {
    pub fitness_level: String,
    pub goals: Vec<String>,
    pub equipment: Vec<String>,
    pub days: i64,
    pub duration: i64,
    pub focus_areas: Vec<String>,
}

impl FitnessProfile {
    pub fn goals_display(&self) -> String {
        self.goals.join(", ")
    }

    pub fn equipment_display(&self) -> String {
        self.equipment.join(", ")
    }

    pub fn focus_areas_display(&self) -> String {
        self.focus_areas.join(", ")
    }
}
