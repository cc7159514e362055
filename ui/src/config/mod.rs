mod pacing;
mod sim;

pub use pacing::*;
pub use sim::*;

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub pacing: PacingConfig,
    pub sim: SimConfig,
}
