pub mod clock;
pub mod interpolator;
pub mod live_camera;
pub mod skip;
pub mod snapshot;

pub use clock::TickClock;
pub use interpolator::{CameraInterpolator, Phase};
pub use live_camera::LiveCamera;
pub use skip::SkipReason;
pub use snapshot::{CameraSnapshot, SnapshotPair};
