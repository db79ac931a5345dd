//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`state`]: the current step's snapshot with kind-specific highlighting
//!   (compared pair, pivot and partitions, search bounds, visited sets,
//!   partial MST, tree shape)
//! - [`log`]: the step log up to the playback cursor
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared helpers (pane borders, element joining)
//!
//! Each pane module exports a primary `render_*_pane()` function taking the
//! frame, its area, and the data it displays. Panes are stateless except for
//! the scroll offsets the caller owns.

mod utils;

pub mod log;
pub mod state;
pub mod status;

// Re-export render functions for convenience
pub use log::render_log_pane;
pub use state::{outcome_text, render_state_pane};
pub use status::render_status_bar;
