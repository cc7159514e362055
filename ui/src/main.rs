//! Headless frontend: runs a Langton's Ant simulation in the terminal and
//! reports when the ant builds a highway.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{debug, info, LevelFilter};
use std::thread;

use langton_core::prelude::{RuleId, HIGHWAY_PERIOD, RULES};

mod antview;
mod commands;
mod config;
mod status;

use antview::AntView;
use commands::{Command, SimCommand};
use config::{Config, MAX_SPEED, MIN_SPEED};

/// The name of the program, shown in log output.
const TITLE: &str = "Langton's Ant";

#[derive(Parser, Debug)]
#[command(name = "langton", version, about = "Langton's Ant with highway detection")]
struct Args {
    /// Grid width, in cells.
    #[arg(long, default_value_t = 75)]
    width: usize,

    /// Grid height, in cells.
    #[arg(long, default_value_t = 56)]
    height: usize,

    /// Rule: LR | RL | LLRR | LRRL
    #[arg(long, default_value = "LR")]
    rule: String,

    /// Speed from 1 (slowest) to 200 (fastest).
    #[arg(long, default_value_t = 50)]
    speed: u32,

    /// Stop after this many steps (0 = no limit).
    #[arg(long, default_value_t = 20_000)]
    max_steps: u64,

    /// Keep running and looking for highways after one is detected, instead
    /// of slowing down and pausing.
    #[arg(long)]
    continue_after_highway: bool,

    /// Run as fast as possible instead of waiting between steps.
    #[arg(long)]
    no_delay: bool,

    /// Take this many steps immediately, without pacing, before running.
    #[arg(long, default_value_t = 0)]
    fast_forward: u64,

    /// Run every rule in turn instead of just the one given by --rule.
    #[arg(long)]
    all_rules: bool,

    /// Highway detection window, in steps.
    #[arg(long, default_value_t = HIGHWAY_PERIOD)]
    window: usize,

    /// Log level: off | error | warn | info | debug | trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|e| anyhow!("invalid log level {:?}: {}", args.log_level, e))?;
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| anyhow!("failed to initialize logger: {}", e))?;

    info!("Starting {} v{} ...", TITLE, env!("CARGO_PKG_VERSION"));
    let config = config_from_args(&args)?;
    debug!("{:?}", config);

    let rules = if args.all_rules {
        RULES.to_vec()
    } else {
        vec![config.sim.rule]
    };
    run(&config, &rules)
}

fn config_from_args(args: &Args) -> Result<Config> {
    ensure!(
        args.width > 0 && args.height > 0,
        "grid size must be nonzero (got {}x{})",
        args.width,
        args.height,
    );
    ensure!(
        (MIN_SPEED..=MAX_SPEED).contains(&args.speed),
        "speed must be between {} and {} (got {})",
        MIN_SPEED,
        MAX_SPEED,
        args.speed,
    );
    ensure!(args.window > 0, "highway window must be nonzero");
    let rule: RuleId = args
        .rule
        .parse()
        .with_context(|| format!("choose one of: {}", RULES.iter().map(|r| r.name()).join(", ")))?;

    let mut config = Config::default();
    config.sim.width = args.width;
    config.sim.height = args.height;
    config.sim.rule = rule;
    config.sim.window = args.window;
    config.sim.max_steps = if args.max_steps == 0 {
        None
    } else {
        Some(args.max_steps)
    };
    config.sim.continue_after_highway = args.continue_after_highway;
    config.sim.fast_forward = args.fast_forward;
    config.pacing.speed = args.speed;
    config.pacing.realtime = !args.no_delay;
    Ok(config)
}

/// Runs each rule in turn from an empty grid, logging a summary after each.
fn run(config: &Config, rules: &[RuleId]) -> Result<()> {
    let mut view = AntView::new(&config.sim);
    info!("{}x{} grid", config.sim.width, config.sim.height);

    for (i, &rule) in rules.iter().enumerate() {
        if i > 0 {
            view.enqueue(Command::Reset);
        }
        view.enqueue(Command::SetRule(rule));
        if config.sim.fast_forward > 0 {
            view.enqueue(SimCommand::Step(config.sim.fast_forward));
        }
        view.enqueue(SimCommand::StartRunning);
        while let Some(delay) = view.do_frame(config)? {
            if config.pacing.realtime {
                thread::sleep(delay);
            }
        }

        info!("{}", status::ant_text(view.sim()));
        info!("Highway: {}", view.status());
        info!("Prediction: {}", status::prediction_text(view.sim()));
    }
    Ok(())
}
