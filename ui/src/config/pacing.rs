use std::time::Duration;

/// Slowest speed setting.
pub const MIN_SPEED: u32 = 1;
/// Fastest speed setting.
pub const MAX_SPEED: u32 = 200;

#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Speed from `MIN_SPEED` to `MAX_SPEED`.
    pub speed: u32,
    /// Whether to actually sleep between steps. When false, delays are still
    /// computed and counted but the simulation runs as fast as possible.
    pub realtime: bool,
    /// Number of steps over which the simulation slows down after a highway
    /// is detected.
    pub slowdown_steps: u64,
    /// Maximum extra delay after a highway, as a multiple of the base delay.
    pub max_slowdown: f64,
    /// Amount of paced time to keep running after a highway is detected
    /// before pausing.
    pub pause_after_highway: Duration,
}
impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            speed: 50,
            realtime: true,
            slowdown_steps: 20,
            max_slowdown: 5.0,
            pause_after_highway: Duration::from_secs(3),
        }
    }
}
impl PacingConfig {
    /// Returns the delay between steps at the current speed, from about 500ms
    /// at the slowest down to a floor of 2ms.
    pub fn base_delay(&self) -> Duration {
        Duration::from_micros(self.base_delay_micros())
    }
    fn base_delay_micros(&self) -> u64 {
        (502_000 - 2_500 * self.speed as i64).max(2_000) as u64
    }

    /// Returns the delay before the next step, given the number of steps
    /// since a highway was detected (if one was detected and the user hasn't
    /// chosen to continue).
    pub fn step_delay(&self, steps_since_highway: Option<u64>) -> Duration {
        let base = self.base_delay_micros();
        match steps_since_highway {
            None => Duration::from_micros(base),
            Some(steps) => {
                let slowdown =
                    (steps as f64 / self.slowdown_steps as f64).min(self.max_slowdown);
                Duration::from_micros((base as f64 * (1.0 + slowdown)).round() as u64)
            }
        }
    }
}
