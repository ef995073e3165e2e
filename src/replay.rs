//! Scripted sessions for exercising the interpolator outside a game.
//!
//! A scenario lists what the host reports at every simulation tick. The
//! replay loop renders at `frame_hz`, advances a [`TickClock`] at `tick_hz`
//! and calls the frame hooks in the same order a host integration would.

use anyhow::{ensure, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::InterpolationConfig;
use crate::core::{CameraInterpolator, LiveCamera, SkipReason, TickClock};
use crate::types::{CameraPose, CameraType, ObjectId, SubjectState};

/// Ticks the clock may run in one frame before dropping time
const MAX_TICKS_PER_FRAME: u32 = 8;

/// Frames per tick beyond which the f32 tick clock stops advancing
pub const MAX_FRAMES_PER_TICK: f32 = 1000.0;

/// Host state for one simulation tick
#[derive(Debug, Clone, Deserialize)]
pub struct TickState {
    #[serde(default)]
    pub camera_type: CameraType,
    #[serde(default)]
    pub followed_object: Option<ObjectId>,
    pub pose: CameraPose,
    #[serde(default)]
    pub subject: Option<SubjectState>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub spectating: bool,
    /// Session invalidated right before this tick (level load, leaving a match)
    #[serde(default)]
    pub reset: bool,
}

impl TickState {
    fn apply(&self, host: &mut LiveCamera) {
        host.pose = self.pose;
        host.camera_type = self.camera_type;
        host.followed_object = self.followed_object;
        host.subject = self.subject;
        host.paused = self.paused;
        host.spectating = self.spectating;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub tick_hz: f32,
    pub frame_hz: f32,
    pub ticks: Vec<TickState>,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json).context("Invalid scenario")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to load scenario: {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tick_hz.is_finite() && self.tick_hz > 0.0,
            "tick_hz must be positive, got {}",
            self.tick_hz
        );
        ensure!(
            self.frame_hz.is_finite() && self.frame_hz > 0.0,
            "frame_hz must be positive, got {}",
            self.frame_hz
        );
        ensure!(
            self.frame_hz / self.tick_hz <= MAX_FRAMES_PER_TICK,
            "frame_hz {} is more than {} times tick_hz {}",
            self.frame_hz,
            MAX_FRAMES_PER_TICK,
            self.tick_hz
        );
        ensure!(!self.ticks.is_empty(), "scenario has no ticks");
        Ok(())
    }
}

/// What the renderer saw on one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub tick: usize,
    pub progress: f32,
    pub pose: CameraPose,
    pub skipped: bool,
    pub reason: Option<SkipReason>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplayReport {
    pub ticks: usize,
    pub interpolated_frames: usize,
    pub skipped_frames: usize,
    pub frames: Vec<FrameRecord>,
}

/// Replays every tick of `scenario`, rendering frames until the last tick interval ends
pub fn replay(scenario: &Scenario, config: InterpolationConfig) -> Result<ReplayReport> {
    scenario.validate()?;
    config.validate()?;

    if scenario.frame_hz < scenario.tick_hz {
        warn!(
            "frame rate {} Hz is below tick rate {} Hz, ticks will be collapsed",
            scenario.frame_hz, scenario.tick_hz
        );
    }

    let mut interp = CameraInterpolator::new(config);
    let mut clock = TickClock::new(scenario.tick_hz, MAX_TICKS_PER_FRAME);
    let mut host = LiveCamera::default();
    let frame_delta = 1.0 / scenario.frame_hz;

    let mut report = ReplayReport::default();
    let mut tick = 0;
    start_tick(&scenario.ticks[0], &mut interp, &mut host);
    report.ticks = 1;

    let mut frame = 0u64;
    'frames: loop {
        for _ in 0..clock.advance(frame_delta) {
            tick += 1;
            let Some(state) = scenario.ticks.get(tick) else {
                break 'frames;
            };
            start_tick(state, &mut interp, &mut host);
            report.ticks += 1;
        }

        let progress = clock.progress();
        interp.before_render(&mut host, progress);

        let skipped = interp.is_skipping() || host.paused;
        report.frames.push(FrameRecord {
            frame,
            tick,
            progress,
            pose: host.pose,
            skipped,
            reason: if skipped { interp.last_skip_reason() } else { None },
        });
        if skipped {
            report.skipped_frames += 1;
        } else {
            report.interpolated_frames += 1;
        }

        interp.after_render(&mut host);
        frame += 1;
    }

    info!(
        "replayed {} ticks over {} frames ({} interpolated, {} skipped)",
        report.ticks,
        report.frames.len(),
        report.interpolated_frames,
        report.skipped_frames
    );
    Ok(report)
}

fn start_tick(state: &TickState, interp: &mut CameraInterpolator, host: &mut LiveCamera) {
    if state.reset {
        interp.reset();
    }
    state.apply(host);
    interp.on_tick();
}
