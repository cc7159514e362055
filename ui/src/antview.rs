//! Controller that owns the simulation and decides when to step it.

use anyhow::Result;
use log::{debug, info, trace};
use std::collections::VecDeque;
use std::time::Duration;

use langton_core::prelude::*;

use crate::commands::*;
use crate::config::{Config, SimConfig};
use crate::status::HighwayStatus;

#[derive(Debug)]
pub struct AntView {
    sim: Simulation,
    command_queue: VecDeque<Command>,

    running: bool,
    /// Whether the user chose to keep going after the last highway.
    continuing: bool,
    /// Whether the simulation should pause once enough paced time has passed
    /// since the last highway was detected.
    highway_pause_pending: bool,
    /// Paced time since the last highway was detected.
    time_since_highway: Duration,
}

impl AntView {
    pub fn new(config: &SimConfig) -> Self {
        let sim = Simulation::new(config.width, config.height)
            .with_rule(config.rule)
            .with_window(config.window);
        Self {
            sim,
            command_queue: VecDeque::new(),

            running: false,
            continuing: false,
            highway_pause_pending: false,
            time_since_highway: Duration::default(),
        }
    }

    /// Queues a command to be executed at the start of the next frame.
    pub fn enqueue(&mut self, command: impl Into<Command>) {
        self.command_queue.push_back(command.into());
    }

    /// Executes a `Command`.
    pub fn do_command(&mut self, command: impl Into<Command>, config: &Config) -> Result<()> {
        match command.into() {
            Command::Sim(c) => self.do_sim_command(c, config),
            Command::Highway(c) => self.do_highway_command(c),

            Command::SetRule(rule) => {
                self.sim.set_rule(rule);
                info!("Rule: {}", rule);
                for line in rule.description() {
                    debug!("  {}", line);
                }
            }
            Command::Reset => {
                self.stop_running();
                self.sim.reset();
                self.clear_highway_flags();
                debug!("Reset simulation");
            }
        }
        Ok(())
    }
    /// Executes a `SimCommand`.
    fn do_sim_command(&mut self, command: SimCommand, config: &Config) {
        match command {
            SimCommand::Step(steps) => {
                self.stop_running();
                for _ in 0..steps {
                    self.step(config);
                }
            }

            SimCommand::StartRunning => self.start_running(),
        }
    }
    /// Executes a `HighwayCommand`.
    fn do_highway_command(&mut self, command: HighwayCommand) {
        match command {
            HighwayCommand::Continue => {
                if self.sim.detector().is_detected() {
                    self.sim.allow_continuation();
                    self.continuing = true;
                    self.highway_pause_pending = false;
                    info!("{}", self.status());
                }
            }
        }
    }

    /// Executes queued commands, then steps the simulation once if it is
    /// running. Returns the delay before the next frame, or `None` if the
    /// simulation is not running.
    pub fn do_frame(&mut self, config: &Config) -> Result<Option<Duration>> {
        while let Some(command) = self.command_queue.pop_front() {
            self.do_command(command, config)?;
        }
        if !self.running {
            return Ok(None);
        }
        if let Some(max_steps) = config.sim.max_steps {
            if self.sim.step_count() >= max_steps {
                info!("Reached {} steps", max_steps);
                self.stop_running();
                return Ok(None);
            }
        }

        self.step(config);

        let steps_since_highway = self.steps_since_highway();
        let delay = config.pacing.step_delay(steps_since_highway);
        if steps_since_highway.is_some() && self.highway_pause_pending {
            self.time_since_highway += delay;
            if self.time_since_highway >= config.pacing.pause_after_highway {
                self.highway_pause_pending = false;
                self.stop_running();
                info!("{}", self.status());
            }
        }
        Ok(Some(delay))
    }

    fn step(&mut self, config: &Config) -> StepReport {
        let report = self.sim.step();
        trace!(
            "Visited {} (was {})",
            report.outcome.visited,
            if report.outcome.prev_state == 0 { "white" } else { "black" },
        );
        if let Some(event) = report.highway {
            self.continuing = false;
            // Only pause automatically if the highway showed up while running.
            self.highway_pause_pending = self.running;
            self.time_since_highway = Duration::default();
            info!(
                "Highway started at step {}, moving {} every {} steps",
                event.start_step,
                event.displacement,
                self.sim.detector().window_len(),
            );
            if config.sim.continue_after_highway {
                self.enqueue(HighwayCommand::Continue);
            }
        }
        report
    }

    /// Returns the number of steps since the start of the last highway, if
    /// one is detected and the user has not chosen to continue.
    fn steps_since_highway(&self) -> Option<u64> {
        if !self.sim.detector().is_detected() {
            return None;
        }
        let start = self.sim.detector().highway_start_step()?;
        Some(self.sim.step_count().saturating_sub(start))
    }

    fn clear_highway_flags(&mut self) {
        self.continuing = false;
        self.highway_pause_pending = false;
        self.time_since_highway = Duration::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
    fn start_running(&mut self) {
        if !self.running {
            trace!("Start running");
            self.running = true;
        }
    }
    fn stop_running(&mut self) {
        if self.running {
            trace!("Stop running");
            self.running = false;
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }
    pub fn status(&self) -> HighwayStatus {
        let detector = self.sim.detector();
        match detector.highway_start_step() {
            Some(start_step) if detector.is_detected() => HighwayStatus::Detected { start_step },
            _ if self.continuing => HighwayStatus::Continuing,
            _ => HighwayStatus::NotDetected,
        }
    }
}
