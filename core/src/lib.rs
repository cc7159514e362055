//! Langton's Ant simulation backend with highway detection.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod ant;
pub mod engine;
pub mod grid;
pub mod highway;
pub mod rule;
pub mod sim;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::ant::{Ant, Direction, DIRECTIONS};
    pub use crate::engine::{AntEngine, StepOutcome};
    pub use crate::grid::{Grid, Offset, Pos};
    pub use crate::highway::{
        DetectorState, HighwayDetector, HighwayEvent, PathRecord, HIGHWAY_PERIOD,
    };
    pub use crate::rule::{RuleId, RuleTable, UnknownRuleError, RULES};
    pub use crate::sim::{Simulation, StepReport};
}

#[cfg(test)]
mod tests;
