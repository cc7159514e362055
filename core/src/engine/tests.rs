use proptest::prelude::*;

use super::*;
use crate::rule::RULES;

fn proptest_rule() -> impl Strategy<Value = RuleId> {
    (0..RULES.len()).prop_map(|i| RULES[i])
}

#[test]
fn test_engine_initial_state() {
    let engine = AntEngine::new(75, 56);
    assert_eq!(75, engine.width());
    assert_eq!(56, engine.height());
    assert_eq!(Ant::new(Pos::new(37, 28)), engine.ant());
    assert_eq!(Direction::N, engine.ant().direction);
    assert_eq!(0, engine.step_count());
    assert_eq!(0, engine.grid().population());
    assert_eq!(RuleId::LR, engine.rule());
}

#[test]
fn test_engine_first_steps_lr() {
    let mut engine = AntEngine::new(11, 11);

    // Four right turns on white cells trace a square back to the start.
    let expected = [
        (Pos::new(6, 5), Direction::E),
        (Pos::new(6, 6), Direction::S),
        (Pos::new(5, 6), Direction::W),
        (Pos::new(5, 5), Direction::N),
    ];
    for (i, &(pos, direction)) in expected.iter().enumerate() {
        let outcome = engine.step();
        assert_eq!(pos, outcome.pos);
        assert_eq!(direction, outcome.direction);
        assert_eq!(i as u64 + 1, outcome.step_index);
        assert_eq!(0, outcome.prev_state);
    }
    assert_eq!(4, engine.grid().population());

    // The start cell is now black, so the ant turns left and clears it.
    let outcome = engine.step();
    assert_eq!(Pos::new(5, 5), outcome.visited);
    assert_eq!(1, outcome.prev_state);
    assert_eq!(Direction::W, outcome.direction);
    assert_eq!(Pos::new(4, 5), outcome.pos);
    assert_eq!(0, engine.cell(5, 5));
    assert_eq!(3, engine.grid().population());
    assert_eq!(5, engine.step_count());
}

#[test]
fn test_engine_wraps_around_edges() {
    // On a 1-wide grid, moving east or west lands on the same column.
    let mut engine = AntEngine::new(1, 3);
    let outcome = engine.step();
    assert_eq!(Direction::E, outcome.direction);
    assert_eq!(Pos::new(0, 1), outcome.pos);

    // Heading north from the top row reappears on the bottom row.
    let mut engine = AntEngine::with_rule(4, 2, RuleId::RL);
    engine.step(); // (2, 1) -> west to (1, 1)
    engine.step(); // (1, 1) -> south to (1, 0), wrapping
    let outcome = engine.step(); // (1, 0) -> east to (2, 0)
    assert_eq!(Pos::new(2, 0), outcome.pos);
    let outcome = engine.step(); // (2, 0) -> north to (2, 1), wrapping
    assert_eq!(Direction::N, outcome.direction);
    assert_eq!(Pos::new(2, 1), outcome.pos);
}

#[test]
fn test_engine_single_cell_grid() {
    let mut engine = AntEngine::new(1, 1);
    for i in 0..10_u64 {
        let outcome = engine.step();
        assert_eq!(Pos::new(0, 0), outcome.pos);
        assert_eq!((i % 2) as u8, outcome.prev_state);
    }
    assert_eq!(0, engine.cell(0, 0));
}

#[test]
fn test_engine_set_rule() {
    let mut engine = AntEngine::new(20, 20);
    engine.step_n(30);
    let before = engine.clone();

    assert_eq!(
        Err(UnknownRuleError("XYZ".to_owned())),
        engine.set_rule_by_name("XYZ"),
    );
    assert_eq!(before, engine);

    engine.set_rule_by_name("LLRR").unwrap();
    assert_eq!(RuleId::LLRR, engine.rule());
    assert_eq!(before.grid(), engine.grid());
    assert_eq!(before.ant(), engine.ant());
    assert_eq!(before.step_count(), engine.step_count());
}

#[test]
fn test_engine_llrr_loops_in_square() {
    let mut engine = AntEngine::with_rule(11, 11, RuleId::LLRR);
    let start = engine.ant();
    for _ in 0..50 {
        let positions: Vec<Pos> = (0..4).map(|_| engine.step().pos).collect();
        assert_eq!(
            vec![
                Pos::new(4, 5),
                Pos::new(4, 6),
                Pos::new(5, 6),
                Pos::new(5, 5),
            ],
            positions,
        );
        assert_eq!(start, engine.ant());
    }
    assert_eq!(0, engine.grid().population());
}

#[test]
fn test_engine_four_entry_tables_only_read_first_two_slots() {
    for &rule in &[RuleId::LLRR, RuleId::LRRL] {
        let mut engine = AntEngine::with_rule(64, 64, rule);
        engine.step_n(20_000);
        let reads = engine.rule_slot_reads();
        assert!(reads[0] > 0, "{}: {:?}", rule, reads);
        assert!(reads[1] > 0, "{}: {:?}", rule, reads);
        assert_eq!(&[0_u64, 0], &reads[2..], "{}", rule);
        assert_eq!(20_000, reads.iter().sum::<u64>());
    }
}

#[test]
fn test_engine_reset() {
    let fresh = AntEngine::with_rule(30, 20, RuleId::RL);
    let mut engine = fresh.clone();
    engine.step_n(1234);
    assert_ne!(fresh, engine);
    engine.reset(30, 20);
    assert_eq!(fresh, engine);

    // Resizing also recenters the ant.
    engine.step_n(77);
    engine.reset(9, 7);
    assert_eq!(AntEngine::with_rule(9, 7, RuleId::RL), engine);
}

#[test]
fn test_engine_step_n() {
    let mut engine = AntEngine::new(16, 16);
    assert_eq!(None, engine.step_n(0));
    let last = engine.step_n(100).unwrap();
    assert_eq!(100, last.step_index);
    assert_eq!(engine.ant().pos, last.pos);
}

proptest! {
    /// Tests that the same rule and the same number of steps always give the
    /// same state.
    #[test]
    fn test_engine_deterministic(
        width in 1_usize..48,
        height in 1_usize..48,
        rule in proptest_rule(),
        steps in 0_u64..2000,
    ) {
        let mut a = AntEngine::with_rule(width, height, rule);
        let mut b = AntEngine::with_rule(width, height, rule);
        a.step_n(steps);
        b.step_n(steps);
        prop_assert_eq!(a, b);
    }

    /// Tests that the ant stays on the grid and that each step flips exactly
    /// one cell.
    #[test]
    fn test_engine_closure_and_conservation(
        width in 1_usize..24,
        height in 1_usize..24,
        rule in proptest_rule(),
        steps in 1_u64..400,
    ) {
        let mut engine = AntEngine::with_rule(width, height, rule);
        for _ in 0..steps {
            let before = engine.grid().clone();
            let outcome = engine.step();
            prop_assert!(outcome.pos.x < width);
            prop_assert!(outcome.pos.y < height);
            let changed: Vec<Pos> = before
                .iter_enumerated()
                .filter(|&(pos, state)| engine.grid().cell(pos) != state)
                .map(|(pos, _)| pos)
                .collect();
            prop_assert_eq!(vec![outcome.visited], changed);
            prop_assert_eq!(before.cell(outcome.visited), outcome.prev_state);
        }
        prop_assert!(engine.grid().population() as u64 <= steps);
    }

    /// Tests that `RL` traces the mirror image of `LR`, and that `LRRL`
    /// behaves exactly like `RL` on a two-state grid.
    #[test]
    fn test_engine_mirror_rules(
        width in 1_usize..64,
        height in 1_usize..64,
        steps in 0_u64..3000,
    ) {
        let mut lr = AntEngine::with_rule(width, height, RuleId::LR);
        let mut rl = AntEngine::with_rule(width, height, RuleId::RL);
        let mut lrrl = AntEngine::with_rule(width, height, RuleId::LRRL);
        lr.step_n(steps);
        rl.step_n(steps);
        lrrl.step_n(steps);

        let cx = width / 2;
        let mirror_x = |x: usize| (2 * cx + width - x) % width;
        prop_assert_eq!(mirror_x(lr.ant().x()), rl.ant().x());
        prop_assert_eq!(lr.ant().y(), rl.ant().y());
        let mirrored_direction = match lr.ant().direction {
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            d => d,
        };
        prop_assert_eq!(mirrored_direction, rl.ant().direction);
        for (pos, state) in lr.grid().iter_enumerated() {
            prop_assert_eq!(state, rl.cell(mirror_x(pos.x), pos.y));
        }

        prop_assert_eq!(rl.grid(), lrrl.grid());
        prop_assert_eq!(rl.ant(), lrrl.ant());
    }
}
