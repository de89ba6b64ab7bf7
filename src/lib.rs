pub mod api;
pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod planner;
pub mod prompts;
