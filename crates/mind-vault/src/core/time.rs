//! Game time: the fixed-step accumulator the bridge runner drives, the
//! pause-aware box clock, and `mm:ss` formatting for the timer display.

/// Fixed timestep accumulator.
/// Puzzle timers and the box clock advance in whole `dt` steps, whatever the frame rate.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// Elapsed play time for one box. Only advances while running,
/// so paused time never counts towards the completion time.
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    elapsed: f32,
    running: bool,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from zero and begin counting.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt` seconds if running.
    pub fn advance(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Elapsed whole seconds (floored).
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed.max(0.0) as u32
    }
}

/// Format whole seconds as `mm:ss` for the box timer.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frames_carry_over() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
        // Half a step, then enough to complete it.
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn long_frame_runs_at_most_ten_steps() {
        // A backgrounded tab can hand back a whole second at once.
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn clock_excludes_paused_time() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.advance(10.0);
        clock.pause();
        clock.advance(100.0);
        clock.resume();
        clock.advance(5.5);
        assert_eq!(clock.elapsed_secs(), 15);
    }

    #[test]
    fn start_resets_elapsed() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.advance(42.0);
        clock.start();
        assert_eq!(clock.elapsed_secs(), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3600), "60:00");
    }
}
