pub mod config;
pub mod error;
pub mod core {
    pub mod classifier;
    pub mod domain;
    pub mod normalizer;
}
pub mod ai {
    pub mod client;
    pub mod prompts;
}
pub mod orchestrator;
pub mod render;
pub mod session;

pub use crate::core::domain::Domain;
pub use error::GeoIntError;
pub use orchestrator::{Orchestrator, QueryOutcome};
