use std::fmt;

use langton_core::prelude::*;

/// Highway detection status, as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HighwayStatus {
    NotDetected,
    /// A highway was detected and the simulation is winding down or paused.
    Detected { start_step: u64 },
    /// A highway was detected but the user chose to keep going.
    Continuing,
}
impl fmt::Display for HighwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighwayStatus::NotDetected => write!(f, "Not Detected"),
            HighwayStatus::Detected { start_step } => {
                write!(f, "Detected at step {} - Paused", start_step)
            }
            HighwayStatus::Continuing => write!(f, "Continuing after highway"),
        }
    }
}

/// Returns a line describing how far along the simulation is toward the step
/// where the current rule is expected to form a highway.
pub fn prediction_text(sim: &Simulation) -> String {
    format!(
        "~{} steps ({:.1}% complete)",
        sim.rule().expected_highway_step(),
        sim.highway_progress() * 100.0,
    )
}

/// Returns a one-line summary of the ant's state.
pub fn ant_text(sim: &Simulation) -> String {
    let ant = sim.engine().ant();
    format!(
        "step {}, ant at {} facing {}, {} black cells",
        sim.step_count(),
        ant.pos,
        ant.direction,
        sim.engine().grid().population(),
    )
}
