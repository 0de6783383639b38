pub mod normalizer;
pub mod orchestrator;
pub mod tracker;

pub use orchestrator::{FallbackOrchestrator, Resolution, SourceAttempt};
pub use tracker::VesselTracker;
