mod interpolate;

pub use interpolate::{interpolate_orientation, interpolate_point};
