//! An ant engine and a highway detector stepped together.

use log::{debug, info};

use crate::engine::{AntEngine, StepOutcome};
use crate::highway::{DetectorState, HighwayDetector, HighwayEvent};
use crate::rule::{RuleId, UnknownRuleError};

/// Everything that happened during one step of a [`Simulation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// What the ant did.
    pub outcome: StepOutcome,
    /// Set only on the step where a highway was detected.
    pub highway: Option<HighwayEvent>,
}

/// Langton's Ant simulation with highway detection.
///
/// Each step advances the engine, records the ant's new position, and, once
/// enough steps have passed to fill two detection windows, checks for a
/// highway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    engine: AntEngine,
    detector: HighwayDetector,
}

impl Simulation {
    /// Creates a simulation on an all-white grid of the given size with the
    /// default rule and detection window.
    ///
    /// # Panics
    ///
    /// This function panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            engine: AntEngine::new(width, height),
            detector: HighwayDetector::new(),
        }
    }
    /// Sets the rule, consuming and returning the simulation.
    pub fn with_rule(mut self, rule: RuleId) -> Self {
        self.engine.set_rule(rule);
        self
    }
    /// Replaces the highway detector with one using the given window length,
    /// consuming and returning the simulation.
    ///
    /// # Panics
    ///
    /// This function panics if `window` is zero.
    pub fn with_window(mut self, window: usize) -> Self {
        self.detector = HighwayDetector::with_window(window);
        self
    }

    /// Advances the ant by one step and checks for a highway.
    pub fn step(&mut self) -> StepReport {
        let outcome = self.engine.step();
        self.detector.observe(outcome.pos, outcome.step_index);

        let min_steps = 2 * self.detector.window_len() as u64;
        let highway = if outcome.step_index >= min_steps && self.detector.check_for_highway() {
            self.detector.take_event()
        } else {
            None
        };
        if let Some(event) = highway {
            info!(
                "Highway detected at step {} under rule {} (started at step {})",
                event.detected_at,
                self.engine.rule(),
                event.start_step,
            );
        }

        StepReport { outcome, highway }
    }

    /// Steps until a highway is detected or `max_steps` steps have been taken,
    /// and returns the detected highway if there is one.
    pub fn run(&mut self, max_steps: u64) -> Option<HighwayEvent> {
        for _ in 0..max_steps {
            if let Some(event) = self.step().highway {
                return Some(event);
            }
        }
        debug!(
            "No highway after {} steps (total {})",
            max_steps,
            self.engine.step_count(),
        );
        None
    }

    /// Returns the simulation to its initial state, keeping the grid size,
    /// rule, and detection window.
    pub fn reset(&mut self) {
        let (width, height) = (self.engine.width(), self.engine.height());
        self.resize(width, height);
    }
    /// Returns the simulation to its initial state with a new grid size.
    ///
    /// # Panics
    ///
    /// This function panics if `width` or `height` is zero.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.engine.reset(width, height);
        self.detector.reset();
    }

    /// Changes the rule for future steps.
    pub fn set_rule(&mut self, rule: RuleId) {
        self.engine.set_rule(rule);
    }
    /// Changes the rule for future steps by name. On error, nothing is
    /// changed.
    pub fn set_rule_by_name(&mut self, name: &str) -> Result<(), UnknownRuleError> {
        self.engine.set_rule_by_name(name)
    }
    /// Resumes highway detection after a highway was detected.
    pub fn allow_continuation(&mut self) {
        self.detector.allow_continuation();
    }

    /// Returns the ant engine.
    pub fn engine(&self) -> &AntEngine {
        &self.engine
    }
    /// Returns the highway detector.
    pub fn detector(&self) -> &HighwayDetector {
        &self.detector
    }
    /// Returns the number of steps taken since the last reset.
    pub fn step_count(&self) -> u64 {
        self.engine.step_count()
    }
    /// Returns the active rule.
    pub fn rule(&self) -> RuleId {
        self.engine.rule()
    }
    /// Returns the state of the highway detector.
    pub fn detector_state(&self) -> DetectorState {
        self.detector.state()
    }
    /// Returns the fraction of the active rule's expected highway step count
    /// that has elapsed. This may exceed 1.
    pub fn highway_progress(&self) -> f64 {
        self.step_count() as f64 / self.rule().expected_highway_step() as f64
    }
}
