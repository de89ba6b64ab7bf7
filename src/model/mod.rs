pub mod plan;
pub mod profile;

pub use plan::PlanResult;
pub use profile::FitnessProfile;
