use crate::types::{CameraPose, CameraType, ObjectId};

/// Camera state captured at a tick boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    pub camera_type: CameraType,
    pub followed_object: Option<ObjectId>,
    pub pose: CameraPose,
}

impl CameraSnapshot {
    pub const ZERO: Self = Self {
        camera_type: CameraType::FirstPerson,
        followed_object: None,
        pose: CameraPose::new(glam::Vec3::ZERO, glam::Vec3::ZERO, glam::Vec3::ZERO),
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Two snapshot slots whose current/previous roles alternate every tick
#[derive(Debug, Clone)]
pub struct SnapshotPair {
    slots: [CameraSnapshot; 2],
    current: usize,
}

impl SnapshotPair {
    pub const fn new() -> Self {
        Self {
            slots: [CameraSnapshot::ZERO; 2],
            current: 0,
        }
    }

    pub fn current(&self) -> &CameraSnapshot {
        &self.slots[self.current]
    }

    pub fn previous(&self) -> &CameraSnapshot {
        &self.slots[self.current ^ 1]
    }

    /// Flip roles. The old current slot becomes previous, untouched.
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Overwrite the current slot
    pub fn capture(&mut self, snapshot: CameraSnapshot) {
        self.slots[self.current] = snapshot;
    }

    /// Zero both slots
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = CameraSnapshot {
                pose: bytemuck::Zeroable::zeroed(),
                ..CameraSnapshot::ZERO
            };
        }
    }

    pub fn is_zero(&self) -> bool {
        self.slots.iter().all(CameraSnapshot::is_zero)
    }

    /// Squared distance the camera moved between the two snapshots
    pub fn distance_squared(&self) -> f32 {
        self.previous()
            .pose
            .position
            .distance_squared(self.current().pose.position)
    }
}

impl Default for SnapshotPair {
    fn default() -> Self {
        Self::new()
    }
}
