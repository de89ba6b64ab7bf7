use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::model::FitnessProfile;

const WORKOUT_PLAN_TEMPLATE: &str = "workout_plan";

macro_rules! template_file {
    ($name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/",
            $name,
            ".txt"
        ))
    };
}

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(load_templates);

fn load_templates() -> Environment<'static> {
    let mut templates = Environment::new();
    templates
        .add_template(WORKOUT_PLAN_TEMPLATE, template_file!("workout_plan"))
        .expect("invalid workout plan template");
    templates
}

/// Fills the trainer prompt with the profile. List fields are joined with ", ".
pub fn render_plan_prompt(profile: &FitnessProfile) -> Result<String, minijinja::Error> {
    TEMPLATES
        .get_template(WORKOUT_PLAN_TEMPLATE)?
        .render(context! {
            days => profile.days,
            fitness_level => profile.fitness_level.as_str(),
            goals => profile.goals_display(),
            equipment => profile.equipment_display(),
            duration => profile.duration,
            focus_areas => profile.focus_areas_display(),
        })
}
