//! Decides when blending between two snapshots would look wrong.
//!
//! Two entry points: [`evaluate_swap`] runs once per tick right after a new
//! snapshot is captured, [`evaluate_frame`] runs on every frame that is still
//! interpolating. Both are pure.

use serde::Serialize;
use std::fmt;

use crate::config::InterpolationConfig;
use crate::core::snapshot::SnapshotPair;
use crate::types::{CameraType, SubjectState};

/// Why interpolation was suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Cleared state with no capture since
    Reset,
    /// Cinematic camera with nothing to follow
    CinematicUnfollowed,
    FollowedObjectChanged,
    CameraTypeChanged,
    /// First-person camera jumped further than the teleport distance
    FirstPersonTeleport,
    /// Debug or death camera while the subject is still alive
    DebugCameraAlive,
    /// Camera moved while the body stood still
    BodyTeleport,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Reset => "reset",
            SkipReason::CinematicUnfollowed => "cinematic camera without followed object",
            SkipReason::FollowedObjectChanged => "followed object changed",
            SkipReason::CameraTypeChanged => "camera type changed",
            SkipReason::FirstPersonTeleport => "first-person teleport",
            SkipReason::DebugCameraAlive => "debug camera while alive",
            SkipReason::BodyTeleport => "camera moved without body",
        };
        f.write_str(text)
    }
}

/// Checks a freshly swapped pair. First matching rule wins.
pub fn evaluate_swap(
    camera_type: CameraType,
    pair: &SnapshotPair,
    config: &InterpolationConfig,
) -> Option<SkipReason> {
    let current = pair.current();
    let previous = pair.previous();

    if camera_type == CameraType::Cinematic && current.followed_object.is_none() {
        return Some(SkipReason::CinematicUnfollowed);
    }
    if current.followed_object != previous.followed_object {
        return Some(SkipReason::FollowedObjectChanged);
    }
    if current.camera_type != previous.camera_type {
        return Some(SkipReason::CameraTypeChanged);
    }
    if camera_type == CameraType::FirstPerson
        && pair.distance_squared() > config.teleport_distance_sq()
    {
        return Some(SkipReason::FirstPersonTeleport);
    }
    None
}

/// Per-frame checks that depend on the tracked subject.
///
/// Without a subject nothing can be judged and the frame is allowed through.
pub fn evaluate_frame(
    camera_type: CameraType,
    pair: &SnapshotPair,
    subject: Option<&SubjectState>,
    config: &InterpolationConfig,
) -> Option<SkipReason> {
    let subject = subject?;

    match camera_type {
        CameraType::Debug if subject.is_alive() => Some(SkipReason::DebugCameraAlive),
        CameraType::FirstPerson
            if !subject.in_vehicle
                && pair.distance_squared() > config.body_teleport_distance_sq()
                && subject.velocity.length_squared() <= config.body_still_speed_sq() =>
        {
            Some(SkipReason::BodyTeleport)
        }
        _ => None,
    }
}

/// True when a first-person camera should keep the player's own aim
pub fn keeps_free_look(camera_type: CameraType, subject: Option<&SubjectState>, spectating: bool) -> bool {
    let in_vehicle = subject.is_some_and(|s| s.in_vehicle);
    camera_type == CameraType::FirstPerson && !in_vehicle && !spectating
}
