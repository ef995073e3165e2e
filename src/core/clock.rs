/// Fixed-rate simulation clock - turns frame deltas into whole ticks
/// and reports how far the current frame sits inside the next tick
#[derive(Debug, Clone)]
pub struct TickClock {
    timestep: f32,
    accumulator: f32,
    max_steps: u32,
}

impl TickClock {
    /// Create clock ticking at `hz`, running at most `max_steps` ticks per frame
    pub fn new(hz: f32, max_steps: u32) -> Self {
        debug_assert!(hz > 0.0, "tick rate must be positive");
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Add frame delta, returns number of ticks to simulate.
    /// Time beyond `max_steps` ticks is dropped instead of carried over.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta;

        let due = (self.accumulator / self.timestep) as u32;
        let steps = due.min(self.max_steps);

        if due > self.max_steps {
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * self.timestep;
        }
        // Rounding can leave the remainder a hair below zero or at a full step
        self.accumulator = self.accumulator.clamp(0.0, self.timestep);

        steps
    }

    /// Fraction of the current tick elapsed, in `[0, 1)`
    pub fn progress(&self) -> f32 {
        let alpha = self.accumulator / self.timestep;
        if alpha >= 1.0 {
            1.0 - f32::EPSILON
        } else {
            alpha
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_yields_fixed_steps() {
        let mut clock = TickClock::new(30.0, 4);

        // Less than one tick
        assert_eq!(clock.advance(0.02), 0);

        // Crosses the first boundary
        assert_eq!(clock.advance(0.02), 1);

        // Large delta is capped
        assert_eq!(clock.advance(1.0), 4);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn clock_progress_tracks_remainder() {
        let mut clock = TickClock::new(10.0, 4);

        assert_eq!(clock.advance(0.025), 0);
        assert!((clock.progress() - 0.25).abs() < 1e-4);

        assert_eq!(clock.advance(0.1), 1);
        assert!((clock.progress() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn clock_progress_stays_below_one() {
        let mut clock = TickClock::new(60.0, 1);
        for _ in 0..1000 {
            clock.advance(1.0 / 144.0);
            let progress = clock.progress();
            assert!((0.0..1.0).contains(&progress));
        }
    }

    #[test]
    fn clock_resets() {
        let mut clock = TickClock::new(30.0, 4);
        clock.advance(0.02);
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
    }
}
