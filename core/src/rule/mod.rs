//! Everything related to the description of an ant rule, primarily the table
//! of turns indexed by cell state.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// All supported rules, in the order a frontend should list them.
pub const RULES: [RuleId; 4] = [RuleId::LR, RuleId::RL, RuleId::LLRR, RuleId::LRRL];

/// Error returned when parsing a rule name that is not one of [`RULES`].
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown rule: {0:?} (expected one of LR, RL, LLRR, LRRL)")]
pub struct UnknownRuleError(pub String);

/// Identifier of one of the supported ant rules.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RuleId {
    LR,
    RL,
    LLRR,
    LRRL,
}
impl Default for RuleId {
    fn default() -> Self {
        RuleId::LR
    }
}
impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for RuleId {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, UnknownRuleError> {
        RULES
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRuleError(s.to_owned()))
    }
}
impl RuleId {
    /// Returns the name of the rule, which is also the string it parses from.
    pub fn name(self) -> &'static str {
        match self {
            RuleId::LR => "LR",
            RuleId::RL => "RL",
            RuleId::LLRR => "LLRR",
            RuleId::LRRL => "LRRL",
        }
    }

    /// Returns the table of turns for this rule.
    pub fn table(self) -> RuleTable {
        match self {
            // Right on white, left on black.
            RuleId::LR => RuleTable::new(&[1, -1]),
            RuleId::RL => RuleTable::new(&[-1, 1]),
            RuleId::LLRR => RuleTable::new(&[-1, -1, 1, 1]),
            RuleId::LRRL => RuleTable::new(&[-1, 1, 1, -1]),
        }
    }

    /// Returns a human-readable description of each entry in the table, one
    /// line per cell state.
    pub fn description(self) -> &'static [&'static str] {
        match self {
            RuleId::LR => &[
                "At a white square: turn 90° right, flip the color, move forward",
                "At a black square: turn 90° left, flip the color, move forward",
            ],
            RuleId::RL => &[
                "At a white square: turn 90° left, flip the color, move forward",
                "At a black square: turn 90° right, flip the color, move forward",
            ],
            RuleId::LLRR => &[
                "White (0): turn left, flip, move forward",
                "Black (1): turn left, flip, move forward",
                "Color 2: turn right, flip, move forward",
                "Color 3: turn right, flip, move forward",
            ],
            RuleId::LRRL => &[
                "White (0): turn left, flip, move forward",
                "Black (1): turn right, flip, move forward",
                "Color 2: turn right, flip, move forward",
                "Color 3: turn left, flip, move forward",
            ],
        }
    }

    /// Returns the approximate number of steps before this rule is expected
    /// to settle into a highway, for progress reporting.
    ///
    /// Only the value for `LR` is the classical result; the others are rough
    /// estimates.
    pub fn expected_highway_step(self) -> u64 {
        match self {
            RuleId::LR => 10_400,
            RuleId::RL => 8_500,
            RuleId::LLRR => 15_000,
            RuleId::LRRL => 12_000,
        }
    }
}

/// Maximum number of entries in a rule table.
pub const MAX_RULE_LEN: usize = 4;

/// Ordered turn deltas indexed by cell state, each either `-1` (left) or `+1`
/// (right).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RuleTable {
    len: usize,
    turns: [i8; MAX_RULE_LEN],
}
impl RuleTable {
    /// Constructs a rule table from a slice of turns.
    ///
    /// # Panics
    ///
    /// This function panics if `turns` is empty, longer than
    /// [`MAX_RULE_LEN`], or contains anything other than `-1` and `+1`.
    pub fn new(turns: &[i8]) -> Self {
        assert!(
            !turns.is_empty() && turns.len() <= MAX_RULE_LEN,
            "Rule table must have between 1 and {} entries",
            MAX_RULE_LEN,
        );
        assert!(
            turns.iter().all(|&t| t == 1 || t == -1),
            "Rule table turns must be -1 or +1",
        );
        let mut table = [0_i8; MAX_RULE_LEN];
        table[..turns.len()].copy_from_slice(turns);
        Self {
            len: turns.len(),
            turns: table,
        }
    }

    /// Returns the number of entries in the table.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns the entries of the table.
    pub fn turns(&self) -> &[i8] {
        &self.turns[..self.len]
    }

    /// Returns the table slot consulted for a cell in the given state.
    ///
    /// The cell state is reduced modulo the table length, so on a two-state
    /// grid only slots 0 and 1 of a four-entry table are reachable.
    #[inline]
    pub fn slot_for(&self, cell_state: u8) -> usize {
        cell_state as usize % self.len
    }
    /// Returns the turn for a cell in the given state.
    #[inline]
    pub fn turn_for(&self, cell_state: u8) -> i8 {
        self.turns[self.slot_for(cell_state)]
    }
}
