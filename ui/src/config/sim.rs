use langton_core::prelude::{RuleId, HIGHWAY_PERIOD};

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub rule: RuleId,
    /// Highway detection window, in steps.
    pub window: usize,
    /// Stop running after this many steps. `None` means run until paused.
    pub max_steps: Option<u64>,
    /// Re-arm the highway detector after each detection instead of pausing.
    pub continue_after_highway: bool,
    /// Steps to take without pacing before running.
    pub fast_forward: u64,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 75,
            height: 56,
            rule: RuleId::LR,
            window: HIGHWAY_PERIOD,
            max_steps: Some(20_000),
            continue_after_highway: false,
            fast_forward: 0,
        }
    }
}
