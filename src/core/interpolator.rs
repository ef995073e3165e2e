//! Per-frame camera interpolation between the last two simulation ticks.
//!
//! The host drives four hooks in a fixed order:
//!
//! ```text
//! on_tick()*  ->  before_render(t)  ->  <render>  ->  after_render()
//! ```
//!
//! `before_render` writes a blended pose into the live camera and
//! `after_render` puts the ground-truth tick value back. Every
//! `before_render` must be paired with exactly one `after_render` in the same
//! frame; skipping the second call leaves a blended pose in the game state.

use log::{debug, trace};

use crate::config::InterpolationConfig;
use crate::core::skip::{self, SkipReason};
use crate::core::snapshot::{CameraSnapshot, SnapshotPair};
use crate::math::{interpolate_orientation, interpolate_point};
use crate::traits::CameraHost;

/// Where the interpolator is within the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between frames
    Idle,
    /// `before_render` left the live camera untouched
    Skipping,
    /// `before_render` wrote a blended pose that `after_render` must undo
    Interpolating,
}

#[derive(Debug, Clone)]
pub struct CameraInterpolator {
    snapshots: SnapshotPair,
    config: InterpolationConfig,
    tick_pending: bool,
    skip: bool,
    skip_reason: Option<SkipReason>,
    rotation_was_interpolated: bool,
    phase: Phase,
}

impl CameraInterpolator {
    /// Starts out skipping until two ticks have been captured
    pub fn new(config: InterpolationConfig) -> Self {
        Self {
            snapshots: SnapshotPair::new(),
            config,
            tick_pending: false,
            skip: true,
            skip_reason: Some(SkipReason::Reset),
            rotation_was_interpolated: false,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    pub fn snapshots(&self) -> &SnapshotPair {
        &self.snapshots
    }

    pub fn is_skipping(&self) -> bool {
        self.skip
    }

    pub fn last_skip_reason(&self) -> Option<SkipReason> {
        self.skip_reason
    }

    pub fn tick_pending(&self) -> bool {
        self.tick_pending
    }

    pub fn rotation_was_interpolated(&self) -> bool {
        self.rotation_was_interpolated
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A simulation tick completed. Repeated calls before the next frame collapse into one.
    pub fn on_tick(&mut self) {
        self.tick_pending = true;
    }

    /// Blend the live camera between the previous and current tick.
    ///
    /// `progress` is the fraction of the tick interval elapsed at this frame, in `[0, 1)`.
    pub fn before_render<H: CameraHost + ?Sized>(&mut self, host: &mut H, progress: f32) {
        debug_assert!(
            self.phase == Phase::Idle,
            "before_render called twice without after_render"
        );

        if host.is_paused() {
            return;
        }

        let camera_type = host.camera_type();

        if self.tick_pending {
            self.snapshots.swap();
            self.snapshots.capture(CameraSnapshot {
                camera_type,
                followed_object: host.followed_object(),
                pose: *host.camera(),
            });
            self.tick_pending = false;

            trace!(
                "captured tick: {:?} following {:?} at {}",
                camera_type,
                self.snapshots.current().followed_object,
                self.snapshots.current().pose.position
            );

            let reason = skip::evaluate_swap(camera_type, &self.snapshots, &self.config);
            self.set_skip(reason);
        }

        if self.skip {
            self.phase = Phase::Skipping;
            return;
        }

        let subject = host.tracked_subject();
        if let Some(reason) =
            skip::evaluate_frame(camera_type, &self.snapshots, subject.as_ref(), &self.config)
        {
            self.set_skip(Some(reason));
            self.phase = Phase::Skipping;
            return;
        }

        let previous = self.snapshots.previous();
        let current = self.snapshots.current();
        let blend_rotation =
            !skip::keeps_free_look(camera_type, subject.as_ref(), host.spectating());

        let live = host.camera_mut();
        live.position = interpolate_point(previous.pose.position, current.pose.position, progress);
        if blend_rotation {
            live.orientation =
                interpolate_orientation(&previous.pose.orientation, &current.pose.orientation, progress);
            self.rotation_was_interpolated = true;
        }
        self.phase = Phase::Interpolating;
    }

    /// Restore the ground-truth tick pose after the frame was drawn.
    ///
    /// Only the forward vector is restored when rotation was blended; the up
    /// vector keeps its blended value.
    pub fn after_render<H: CameraHost + ?Sized>(&mut self, host: &mut H) {
        if self.skip || host.is_paused() {
            self.phase = Phase::Idle;
            return;
        }

        let current = self.snapshots.current();
        let live = host.camera_mut();
        live.position = current.pose.position;
        if self.rotation_was_interpolated {
            live.orientation[0] = current.pose.orientation[0];
            self.rotation_was_interpolated = false;
        }
        self.phase = Phase::Idle;
    }

    /// Drop all captured state. Interpolation resumes once fresh ticks arrive.
    pub fn reset(&mut self) {
        debug!("camera interpolation reset");
        self.snapshots.clear();
        self.skip = true;
        self.skip_reason = Some(SkipReason::Reset);
        self.rotation_was_interpolated = false;
        self.phase = Phase::Idle;
    }

    fn set_skip(&mut self, reason: Option<SkipReason>) {
        if let Some(reason) = reason {
            if self.skip_reason != Some(reason) {
                debug!("skipping camera interpolation: {}", reason);
            }
        }
        self.skip = reason.is_some();
        self.skip_reason = reason;
    }
}

impl Default for CameraInterpolator {
    fn default() -> Self {
        Self::new(InterpolationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::live_camera::LiveCamera;
    use crate::types::{CameraPose, CameraType, ObjectId, SubjectState};
    use glam::Vec3;

    fn host_at(camera_type: CameraType, x: f32) -> LiveCamera {
        LiveCamera::new(camera_type, CameraPose::at(Vec3::new(x, 0.0, 0.0))).following(ObjectId::new(1))
    }

    /// Runs one full frame with a tick captured at `x`
    fn tick_to(interp: &mut CameraInterpolator, host: &mut LiveCamera, x: f32) {
        host.pose.position = Vec3::new(x, 0.0, 0.0);
        interp.on_tick();
        interp.before_render(host, 0.0);
        interp.after_render(host);
    }

    #[test]
    fn test_starts_skipping() {
        let interp = CameraInterpolator::default();
        assert!(interp.is_skipping());
        assert_eq!(interp.last_skip_reason(), Some(SkipReason::Reset));
        assert_eq!(interp.phase(), Phase::Idle);
        assert!(interp.snapshots().is_zero());
    }

    #[test]
    fn test_on_tick_is_idempotent() {
        let mut interp = CameraInterpolator::default();
        let mut host = host_at(CameraType::Vehicle, 1.0);
        tick_to(&mut interp, &mut host, 1.0);

        interp.on_tick();
        interp.on_tick();
        interp.on_tick();
        host.pose.position.x = 2.0;
        interp.before_render(&mut host, 0.5);

        assert!(!interp.tick_pending());
        assert_eq!(interp.snapshots().previous().pose.position.x, 1.0);
        assert_eq!(interp.snapshots().current().pose.position.x, 2.0);
    }

    #[test]
    fn test_frame_without_tick_does_not_swap() {
        let mut interp = CameraInterpolator::default();
        let mut host = host_at(CameraType::Vehicle, 0.0);
        tick_to(&mut interp, &mut host, 0.0);
        tick_to(&mut interp, &mut host, 4.0);

        interp.before_render(&mut host, 0.25);
        assert_eq!(host.pose.position.x, 1.0);
        interp.after_render(&mut host);

        assert_eq!(interp.snapshots().previous().pose.position.x, 0.0);
        assert_eq!(interp.snapshots().current().pose.position.x, 4.0);
    }

    #[test]
    fn test_phase_follows_hooks() {
        let mut interp = CameraInterpolator::default();
        let mut host = host_at(CameraType::Vehicle, 0.0);
        tick_to(&mut interp, &mut host, 0.0);

        interp.on_tick();
        interp.before_render(&mut host, 0.5);
        assert_eq!(interp.phase(), Phase::Interpolating);
        assert!(interp.rotation_was_interpolated());
        interp.after_render(&mut host);
        assert_eq!(interp.phase(), Phase::Idle);
        assert!(!interp.rotation_was_interpolated());
    }

    #[test]
    fn test_frame_skip_sticks_until_next_tick() {
        let mut interp = CameraInterpolator::default();
        let mut host = host_at(CameraType::FirstPerson, 0.0).with_subject(SubjectState::alive(Vec3::ZERO));
        tick_to(&mut interp, &mut host, 0.0);

        host.pose.position.x = 2.0;
        interp.on_tick();
        interp.before_render(&mut host, 0.5);
        assert_eq!(interp.last_skip_reason(), Some(SkipReason::BodyTeleport));
        interp.after_render(&mut host);

        // Body starts moving, but the decision holds for the rest of this tick
        host.subject = Some(SubjectState::alive(Vec3::new(4.0, 0.0, 0.0)));
        interp.before_render(&mut host, 0.75);
        assert!(interp.is_skipping());
        assert_eq!(host.pose.position.x, 2.0);
        interp.after_render(&mut host);

        host.pose.position.x = 2.5;
        interp.on_tick();
        interp.before_render(&mut host, 0.5);
        assert!(!interp.is_skipping());
        assert_eq!(host.pose.position.x, 2.25);
        interp.after_render(&mut host);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut interp = CameraInterpolator::default();
        let mut host = host_at(CameraType::Vehicle, 3.0);
        tick_to(&mut interp, &mut host, 3.0);
        tick_to(&mut interp, &mut host, 4.0);
        assert!(!interp.is_skipping());

        interp.reset();
        assert!(interp.is_skipping());
        assert!(interp.snapshots().is_zero());
        assert_eq!(interp.phase(), Phase::Idle);
    }
}
