//! Playback over a completed trace
//!
//! Runners compute their full trace synchronously; [`Playback`] then advances
//! through the sealed, immutable step sequence on its own cadence (keypress
//! or timer), one step per tick. This decouples algorithmic recursion depth
//! from animation timing entirely: stepping never re-enters the algorithm,
//! it only moves a cursor.
//!
//! Position `i` means steps `0..=i` have been applied; the renderer shows
//! step `i`'s snapshot. Starting a new run replaces the playback wholesale.

use crate::runner::errors::RunnerError;
use crate::trace::{Outcome, Step, Trace};

/// Cursor over a sealed [`Trace`].
#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    position: usize,
}

impl Playback {
    /// Take ownership of a completed trace, positioned at the first step.
    pub fn new(trace: Trace) -> Self {
        Playback { trace, position: 0 }
    }

    /// The step the cursor is on. None only for an empty trace.
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    /// Advance one step.
    pub fn step_forward(&mut self) -> Result<(), RunnerError> {
        if self.position + 1 >= self.trace.len() {
            return Err(RunnerError::PlaybackOutOfRange {
                position: self.position,
                total: self.trace.len(),
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Move back one step.
    pub fn step_backward(&mut self) -> Result<(), RunnerError> {
        if self.position == 0 {
            return Err(RunnerError::PlaybackOutOfRange {
                position: self.position,
                total: self.trace.len(),
            });
        }
        self.position -= 1;
        Ok(())
    }

    /// Jump back to the first step.
    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    /// Jump to the last step.
    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    /// Current cursor position (0-based step index).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps in the trace.
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Whether the cursor sits on the last step.
    pub fn is_finished(&self) -> bool {
        self.trace.is_empty() || self.position + 1 == self.trace.len()
    }

    /// The run's final result.
    pub fn result(&self) -> &Outcome {
        self.trace.result()
    }

    /// The underlying trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
