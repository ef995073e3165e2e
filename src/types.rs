use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Camera mode reported by the host
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraType {
    #[default]
    FirstPerson = 0,
    Vehicle = 1,
    Cinematic = 2,
    Debug = 3,
}

/// Opaque handle of the object a camera follows
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(NonZeroU32);

impl ObjectId {
    /// Returns `None` for the zero handle, which hosts use as "no object"
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Camera pose as laid out in host memory
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Forward and up basis vectors, in that order. Not required to be unit length.
    pub orientation: [Vec3; 2],
}

impl CameraPose {
    pub const fn new(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            position,
            orientation: [forward, up],
        }
    }

    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::X, Vec3::Z)
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation[0]
    }

    pub fn up(&self) -> Vec3 {
        self.orientation[1]
    }
}

/// Object attached to the local player, when one exists
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubjectState {
    /// Negative once the subject is dead
    pub health: f32,
    pub velocity: Vec3,
    #[serde(default)]
    pub in_vehicle: bool,
}

impl SubjectState {
    pub const fn alive(velocity: Vec3) -> Self {
        Self {
            health: 1.0,
            velocity,
            in_vehicle: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health >= 0.0
    }
}
