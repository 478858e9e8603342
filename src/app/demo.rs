use web_time::{Duration, Instant};

use crate::geo::LineParams;

use super::scene::SceneIndex;

/// cadence of the guided demonstrations
pub const TICK_PERIOD: Duration = Duration::from_millis(25);

/// upper bound of ticks handed out per poll. after a long suspension
/// (minimized window, sleeping laptop) we resynchronize instead of
/// fast-forwarding through thousands of sine periods.
const MAX_BURST: u32 = 40;

/// clock of the automatic slider demonstrations in scenes 3 and 7.
/// this is a pure tick counter: wall time never enters here, so tests can
/// step the demo without waiting. pacing against real time is [`Pacer`]'s job.
pub struct Demo {
    running: bool,
    t: u64,
}

impl Demo {
    pub fn new() -> Self {
        Self { running: false, t: 0 }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn clock(&self) -> u64 {
        self.t
    }

    /// idempotent: starting a running clock keeps its phase
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.t = 0;
        }
    }

    /// resets the clock. no-op when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
        self.t = 0;
    }

    /// advances one tick and returns the line the active scene dictates.
    /// scene 3 sweeps the y-intercept, scene 7 the slope, each between -8 and +8.
    pub fn tick(&mut self, scene: SceneIndex, line: LineParams) -> Option<LineParams> {
        if !self.running {
            return None;
        }
        self.t += 1;
        let t = self.t as f32;
        match scene.get() {
            3 => Some(LineParams {
                intercept: 8.0 * (t / 15.0).sin(),
                ..line
            }),
            7 => Some(LineParams {
                slope: 8.0 * (t / 25.0).sin(),
                ..line
            }),
            _ => None,
        }
    }
}

/// translates wall time into whole demo ticks. leftover time below one
/// period is carried over to the next poll, so the average cadence stays
/// at [`TICK_PERIOD`] regardless of the frame rate.
pub struct Pacer {
    last: Option<Instant>,
}

impl Pacer {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn poll(&mut self, now: Instant, active: bool) -> u32 {
        if !active {
            self.last = None;
            return 0;
        }
        let Some(last) = self.last else {
            self.last = Some(now);
            return 0;
        };
        let ticks = (now.saturating_duration_since(last).as_millis() / TICK_PERIOD.as_millis()) as u32;
        if ticks > MAX_BURST {
            self.last = Some(now);
            return MAX_BURST;
        }
        self.last = Some(last + TICK_PERIOD * ticks);
        ticks
    }
}
