//! Runner error types
//!
//! This module defines [`RunnerError`], which covers every failure a run can
//! produce: input validation errors (rejected before any step is recorded),
//! algorithm precondition violations (negative values into counting sort,
//! unweighted edges into Dijkstra), and resource guards (trace step limit).
//!
//! All runner errors are fatal for the run — a run is a one-shot pure
//! computation and is never retried or resumed.

use std::fmt;

/// Errors that can occur while parsing input or executing a runner
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerError {
    /// Input array is empty
    EmptyInput,

    /// A search was requested without a target value
    EmptyTarget,

    /// An array entry is not alphanumeric
    InvalidToken { token: String },

    /// A numeric algorithm received a non-numeric entry
    NonNumeric { token: String },

    /// JSON input did not parse to an array of numbers/strings
    InvalidJson { message: String },

    /// Counting sort received a negative value
    NegativeValue { value: i64 },

    /// Graph input produced no nodes
    EmptyGraph,

    /// A weighted-graph algorithm found an edge without a weight
    MissingWeight { from: String, to: String },

    /// Duplicate value inserted into a BST/AVL tree
    DuplicateValue { value: i64 },

    /// A tree delete targeted a value that is not in the tree
    ValueNotFound { value: i64 },

    /// Trace step limit exceeded
    TraceLimitExceeded { message: String },

    /// Playback was asked to move past either end of the trace
    PlaybackOutOfRange { position: usize, total: usize },

    /// Unknown algorithm name (CLI dispatch)
    UnknownAlgorithm { name: String },
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::EmptyInput => {
                write!(f, "Input array is empty")
            }
            RunnerError::EmptyTarget => {
                write!(f, "No target value provided")
            }
            RunnerError::InvalidToken { token } => {
                write!(
                    f,
                    "Invalid array entry '{}': entries must be alphanumeric",
                    token
                )
            }
            RunnerError::NonNumeric { token } => {
                write!(
                    f,
                    "Entry '{}' is not a number (this algorithm requires numeric input)",
                    token
                )
            }
            RunnerError::InvalidJson { message } => {
                write!(f, "Invalid JSON input: {}", message)
            }
            RunnerError::NegativeValue { value } => {
                write!(
                    f,
                    "Counting sort requires non-negative integers, got {}",
                    value
                )
            }
            RunnerError::EmptyGraph => {
                write!(f, "Graph input produced no nodes")
            }
            RunnerError::MissingWeight { from, to } => {
                write!(
                    f,
                    "Edge {}-{} has no weight (use the 'node-weight' neighbor form)",
                    from, to
                )
            }
            RunnerError::DuplicateValue { value } => {
                write!(f, "Duplicate value {} rejected by tree insert", value)
            }
            RunnerError::ValueNotFound { value } => {
                write!(f, "Value {} is not in the tree", value)
            }
            RunnerError::TraceLimitExceeded { message } => {
                write!(f, "Trace limit exceeded: {}", message)
            }
            RunnerError::PlaybackOutOfRange { position, total } => {
                write!(
                    f,
                    "Playback position {} out of range for {} steps",
                    position, total
                )
            }
            RunnerError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
        }
    }
}

impl std::error::Error for RunnerError {}

impl RunnerError {
    /// Wrap a trace-builder capacity failure.
    pub fn from_trace_limit(message: String) -> Self {
        RunnerError::TraceLimitExceeded { message }
    }
}
