pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod replay;
pub mod traits;
pub mod types;

pub use crate::config::InterpolationConfig;
pub use crate::core::{CameraInterpolator, CameraSnapshot, LiveCamera, Phase, SkipReason, SnapshotPair, TickClock};
pub use crate::traits::CameraHost;
pub use crate::types::{CameraPose, CameraType, ObjectId, SubjectState};
