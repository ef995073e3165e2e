pub mod camera_host;

pub use camera_host::*;
