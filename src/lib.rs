pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod present;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TrackerConfig;
pub use crate::core::{FallbackOrchestrator, Resolution, VesselTracker};
pub use domain::model::{CanonicalVesselStatus, PartialVesselRecord, Reading, VesselIdentity};
pub use domain::ports::SourceAdapter;
pub use present::StatusReport;
pub use utils::error::{Result, TrackerError};
