//! Detection of "highways": periodic, translating trajectories that an ant
//! settles into after a chaotic transient.
//!
//! The detector keeps a trailing window of the ant's recent positions and
//! compares the shape of the last `L` positions against the `L` positions
//! before them. Shapes are compared relative to the first position of each
//! half, so a pattern that repeats while drifting across the grid still
//! matches. The comparison is exact.

use std::collections::VecDeque;

use itertools::Itertools;
use log::debug;

use crate::grid::{Offset, Pos};

/// Period of the highway built by the classic `LR` ant, in steps. This is
/// the default window length.
pub const HIGHWAY_PERIOD: usize = 104;

/// Position of the ant, tagged with the step at which it was recorded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PathRecord {
    /// Position of the ant.
    pub pos: Pos,
    /// Step index at which the ant was at `pos`.
    pub step: u64,
}

/// Whether the detector is still looking for a highway.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DetectorState {
    /// Recording positions and checking for a highway.
    Active,
    /// A highway was found; the window that matched is frozen until
    /// `allow_continuation()` is called.
    Detected,
}
impl Default for DetectorState {
    fn default() -> Self {
        DetectorState::Active
    }
}

/// Notification that a highway was just detected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HighwayEvent {
    /// Step at which the repeating pattern is considered to have started.
    pub start_step: u64,
    /// Step of the newest position in the matching window.
    pub detected_at: u64,
    /// Net movement of the ant over one period. This ignores wraparound, so
    /// it is only meaningful when the window does not cross an edge of the
    /// grid.
    pub displacement: Offset,
}

/// Streaming highway detector with bounded memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighwayDetector {
    window: usize,
    history: VecDeque<PathRecord>,
    state: DetectorState,
    highway_start_step: Option<u64>,
    pending_event: Option<HighwayEvent>,
    detections: usize,
}
impl Default for HighwayDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HighwayDetector {
    /// Creates a detector looking for highways with the classic period of
    /// [`HIGHWAY_PERIOD`] steps.
    pub fn new() -> Self {
        Self::with_window(HIGHWAY_PERIOD)
    }
    /// Creates a detector looking for highways with a period of `window`
    /// steps (or any divisor of it).
    ///
    /// # Panics
    ///
    /// This function panics if `window` is zero.
    pub fn with_window(window: usize) -> Self {
        assert!(window > 0, "Highway window must be nonzero");
        Self {
            window,
            history: VecDeque::with_capacity(2 * window),
            state: DetectorState::Active,
            highway_start_step: None,
            pending_event: None,
            detections: 0,
        }
    }

    /// Records the position of the ant at the given step. Does nothing while
    /// a detected highway has not been continued.
    pub fn observe(&mut self, pos: Pos, step: u64) {
        if self.state == DetectorState::Detected {
            return;
        }
        if self.history.len() == 2 * self.window {
            self.history.pop_front();
        }
        self.history.push_back(PathRecord { pos, step });
    }

    /// Checks whether the recorded trajectory has become periodic.
    ///
    /// Returns true only if a highway was newly detected by this call, in
    /// which case the detector moves to [`DetectorState::Detected`] and a
    /// [`HighwayEvent`] becomes available from `take_event()`. Returns false
    /// without doing anything if there are fewer than twice the window length
    /// positions recorded, or if a highway was already detected.
    pub fn check_for_highway(&mut self) -> bool {
        if self.state == DetectorState::Detected || !self.window_is_periodic() {
            return false;
        }

        let n = self.history.len();
        let previous_start = self.history[n - 2 * self.window].pos;
        let recent_start = self.history[n - self.window].pos;
        let detected_at = self.history[n - 1].step;
        let start_step = detected_at.saturating_sub(self.window as u64);
        let event = HighwayEvent {
            start_step,
            detected_at,
            displacement: recent_start - previous_start,
        };
        debug!(
            "Highway detected at step {} (started at step {}, moving {} per {} steps)",
            detected_at, start_step, event.displacement, self.window,
        );

        self.state = DetectorState::Detected;
        self.highway_start_step = Some(start_step);
        self.pending_event = Some(event);
        self.detections += 1;
        true
    }

    /// Returns true if the last `L` recorded positions trace the same shape
    /// as the `L` positions before them, where `L` is the window length.
    ///
    /// This has no side effects.
    pub fn window_is_periodic(&self) -> bool {
        if self.history.len() < 2 * self.window {
            return false;
        }
        let n = self.history.len();
        let p0 = self.history[n - 2 * self.window].pos;
        let r0 = self.history[n - self.window].pos;
        let previous = self.history.range(n - 2 * self.window..n - self.window);
        let recent = self.history.range(n - self.window..);
        previous
            .zip_eq(recent)
            .all(|(p, r)| p.pos - p0 == r.pos - r0)
    }

    /// Returns the pending highway event, if one has been detected since the
    /// last call.
    pub fn take_event(&mut self) -> Option<HighwayEvent> {
        self.pending_event.take()
    }

    /// Resumes recording after a highway was detected. The frozen window is
    /// discarded so that any later detection is based on new positions. The
    /// start step of the previous highway is kept.
    pub fn allow_continuation(&mut self) {
        if self.state == DetectorState::Active {
            return;
        }
        debug!("Continuing after highway");
        self.state = DetectorState::Active;
        self.pending_event = None;
        self.history.clear();
    }

    /// Forgets all recorded positions and detections.
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = DetectorState::Active;
        self.highway_start_step = None;
        self.pending_event = None;
        self.detections = 0;
    }

    /// Returns the current state of the detector.
    pub fn state(&self) -> DetectorState {
        self.state
    }
    /// Returns true if a highway has been detected and not yet continued.
    pub fn is_detected(&self) -> bool {
        self.state == DetectorState::Detected
    }
    /// Returns the step at which the most recently detected highway started.
    pub fn highway_start_step(&self) -> Option<u64> {
        self.highway_start_step
    }
    /// Returns the number of highways detected since the last reset.
    pub fn detections(&self) -> usize {
        self.detections
    }
    /// Returns the window length `L`.
    pub fn window_len(&self) -> usize {
        self.window
    }
    /// Returns the recorded positions, oldest first. At most `2L` positions
    /// are kept.
    pub fn history(&self) -> impl '_ + ExactSizeIterator<Item = &PathRecord> {
        self.history.iter()
    }
}
