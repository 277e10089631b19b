/// Most fixed steps run for a single frame; beyond this the backlog is dropped.
const MAX_STEPS_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator.
/// Turns variable frame deltas from the host's refresh callback into a whole
/// number of app updates.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self { dt, accumulator: 0.0 }
    }

    /// Add frame time and return how many fixed steps are due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // Negative or NaN deltas come from paused tabs and clock jumps.
        if !(frame_dt > 0.0) {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Forget any partial step, e.g. after the loop was stopped.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Start/stop switch for the render loop.
///
/// The host keeps calling its refresh callback regardless; the runner checks
/// this flag each frame and does nothing while stopped.
#[derive(Debug, Clone, Default)]
pub struct LoopControl {
    running: bool,
    frame: u64,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Count a produced frame. Returns the new frame number.
    pub fn advance(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    /// Frames produced since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
