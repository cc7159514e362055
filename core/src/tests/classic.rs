//! The classic ant builds a highway with period 104 after roughly ten
//! thousand steps of chaos.

use crate::prelude::*;

/// Large enough that nothing wraps around before the highway forms.
const SIZE: usize = 256;

fn run_to_highway(rule: RuleId) -> (Simulation, HighwayEvent) {
    let mut sim = Simulation::new(SIZE, SIZE).with_rule(rule);
    let event = sim
        .run(20_000)
        .unwrap_or_else(|| panic!("no highway for {} within 20000 steps", rule));
    (sim, event)
}

fn assert_window_repeats(detector: &HighwayDetector) {
    let history: Vec<PathRecord> = detector.history().copied().collect();
    let l = detector.window_len();
    assert_eq!(2 * l, history.len());
    let (previous, recent) = history.split_at(l);
    for i in 0..l {
        assert_eq!(
            previous[i].pos - previous[0].pos,
            recent[i].pos - recent[0].pos,
            "index {}",
            i,
        );
    }
}

#[test]
fn test_lr_classic_highway() {
    let (sim, event) = run_to_highway(RuleId::LR);

    assert!(
        (9_500..=11_000).contains(&event.detected_at),
        "highway detected at step {}",
        event.detected_at,
    );
    assert_eq!(event.detected_at, sim.step_count());
    assert_eq!(event.detected_at - HIGHWAY_PERIOD as u64, event.start_step);
    assert_eq!(Some(event.start_step), sim.detector().highway_start_step());

    // The highway moves two cells diagonally per period.
    assert_eq!(2, event.displacement.dx.abs());
    assert_eq!(2, event.displacement.dy.abs());

    assert!(sim.detector().is_detected());
    assert_window_repeats(sim.detector());
}

#[test]
fn test_rl_highway_mirrors_lr() {
    let (_, lr) = run_to_highway(RuleId::LR);
    let (sim, rl) = run_to_highway(RuleId::RL);

    assert_eq!(lr.detected_at, rl.detected_at);
    assert_eq!(-lr.displacement.dx, rl.displacement.dx);
    assert_eq!(lr.displacement.dy, rl.displacement.dy);
    assert_window_repeats(sim.detector());
}

#[test]
fn test_highway_continues_after_allowing_continuation() {
    let (mut sim, first) = run_to_highway(RuleId::LR);
    sim.allow_continuation();
    let second = sim
        .run(1_000)
        .expect("highway should be detected again from fresh positions");
    assert_eq!(first.detected_at + 2 * HIGHWAY_PERIOD as u64, second.detected_at);
    assert_eq!(first.displacement, second.displacement);
    assert_eq!(2, sim.detector().detections());
}

#[test]
fn test_highway_detection_is_deterministic() {
    let (a, event_a) = run_to_highway(RuleId::LR);
    let (b, event_b) = run_to_highway(RuleId::LR);
    assert_eq!(event_a, event_b);
    assert_eq!(a, b);
}
