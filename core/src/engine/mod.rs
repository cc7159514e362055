//! Grid and ant state, advanced one step at a time.

use log::{debug, trace};

use crate::ant::{Ant, Direction};
use crate::grid::{Grid, Pos};
use crate::rule::{RuleId, RuleTable, UnknownRuleError, MAX_RULE_LEN};

/// Result of a single step of the ant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Position of the ant after moving.
    pub pos: Pos,
    /// Direction the ant faces after turning.
    pub direction: Direction,
    /// Number of steps taken so far, including this one.
    pub step_index: u64,
    /// Position of the cell that was visited and flipped.
    pub visited: Pos,
    /// State of the visited cell before it was flipped.
    pub prev_state: u8,
}

/// Langton's Ant automaton: a toroidal grid, a single ant, a rule, and a step
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntEngine {
    grid: Grid,
    ant: Ant,
    rule: RuleId,
    table: RuleTable,
    steps: u64,
    /// Number of times each slot of the rule table has been read since the
    /// last reset.
    slot_reads: [u64; MAX_RULE_LEN],
}

impl AntEngine {
    /// Creates an engine with an all-white grid of the given size, the ant in
    /// the center facing north, and the default rule.
    ///
    /// # Panics
    ///
    /// This function panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rule(width, height, RuleId::default())
    }
    /// Creates an engine in the same state as `new()`, but with the given
    /// rule.
    pub fn with_rule(width: usize, height: usize, rule: RuleId) -> Self {
        let grid = Grid::new(width, height);
        let ant = Ant::new(grid.center());
        Self {
            grid,
            ant,
            rule,
            table: rule.table(),
            steps: 0,
            slot_reads: [0; MAX_RULE_LEN],
        }
    }

    /// Clears the grid to the given size, returns the ant to the center
    /// facing north, and zeroes the step count. The rule is kept.
    ///
    /// # Panics
    ///
    /// This function panics if `width` or `height` is zero.
    pub fn reset(&mut self, width: usize, height: usize) {
        if self.grid.width() == width && self.grid.height() == height {
            self.grid.clear();
        } else {
            self.grid = Grid::new(width, height);
        }
        self.ant = Ant::new(self.grid.center());
        self.steps = 0;
        self.slot_reads = [0; MAX_RULE_LEN];
        trace!("Reset ant engine to {}x{}", width, height);
    }

    /// Replaces the rule used for future steps. Grid and ant are untouched.
    pub fn set_rule(&mut self, rule: RuleId) {
        if rule != self.rule {
            debug!("Changing rule from {} to {}", self.rule, rule);
        }
        self.rule = rule;
        self.table = rule.table();
    }
    /// Replaces the rule by name. On error, nothing is changed.
    pub fn set_rule_by_name(&mut self, name: &str) -> Result<(), UnknownRuleError> {
        let rule = name.parse()?;
        self.set_rule(rule);
        Ok(())
    }

    /// Advances the automaton by one step: turn according to the current
    /// cell, flip it, then move forward one cell.
    pub fn step(&mut self) -> StepOutcome {
        let visited = self.ant.pos;
        let prev_state = self.grid.cell(visited);

        let slot = self.table.slot_for(prev_state);
        self.slot_reads[slot] += 1;
        let turn = self.table.turns()[slot];

        self.ant.direction = self.ant.direction.turn(turn);
        self.grid.flip(visited);
        self.ant.pos = self.grid.neighbor(visited, self.ant.direction);
        self.steps += 1;

        StepOutcome {
            pos: self.ant.pos,
            direction: self.ant.direction,
            step_index: self.steps,
            visited,
            prev_state,
        }
    }
    /// Advances the automaton by `n` steps and returns the outcome of the last
    /// one, or `None` if `n` is zero.
    pub fn step_n(&mut self, n: u64) -> Option<StepOutcome> {
        (0..n).map(|_| self.step()).last()
    }

    /// Returns the grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    /// Returns the state of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// This function may panic if the position is outside the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.grid.cell(Pos::new(x, y))
    }
    /// Returns the ant.
    #[inline]
    pub fn ant(&self) -> Ant {
        self.ant
    }
    /// Returns the number of steps taken since the last reset.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.steps
    }
    /// Returns the active rule.
    #[inline]
    pub fn rule(&self) -> RuleId {
        self.rule
    }
    /// Returns how many times each slot of the rule table has been read
    /// since the last reset. Slots past the end of the active table are
    /// still counted if an earlier, longer rule read them.
    #[inline]
    pub fn rule_slot_reads(&self) -> [u64; MAX_RULE_LEN] {
        self.slot_reads
    }
}

#[cfg(test)]
mod tests;
