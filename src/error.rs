//! Error types for graph algorithms
//!
//! Errors fall into two groups:
//! - Contract violations (unknown vertices, NaN weights, bad config) that the
//!   caller should fix.
//! - Expected algorithmic outcomes (negative cycles, cyclic graphs handed to a
//!   topological sort) that the caller is expected to branch on.
//!
//! [`GraphError::kind`] tells the two apart.

mod macros;

use std::fmt::Debug;
use thiserror::Error;

/// Broad classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A query named a vertex that was never registered, or an edge carried
    /// an unusable weight
    Structural,
    /// Bellman-Ford found a negative-weight cycle reachable from the start
    NegativeCycle,
    /// A topological sort was requested on a cyclic graph
    CycleDetected,
    /// A configured resource limit would be exceeded
    Resource,
    /// Configuration could not be loaded or is invalid
    Config,
}

impl ErrorKind {
    /// Whether this kind is an ordinary algorithm outcome rather than misuse
    pub fn is_expected_outcome(self) -> bool {
        matches!(self, ErrorKind::NegativeCycle | ErrorKind::CycleDetected)
    }

    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Structural => "structural",
            ErrorKind::NegativeCycle => "negative_cycle",
            ErrorKind::CycleDetected => "cycle_detected",
            ErrorKind::Resource => "resource",
            ErrorKind::Config => "config",
        }
    }
}

/// Errors that can occur while running graph algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Structural errors
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    // Expected outcomes
    #[error("negative-weight cycle reachable from start (through {vertex})")]
    NegativeCycle { vertex: String },

    #[error("graph contains a cycle ({unordered} vertices could not be ordered)")]
    CycleDetected { unordered: usize },

    // Resource guards
    #[error("{what} exceeds limit: {actual} > {limit}")]
    LimitExceeded {
        what: String,
        limit: usize,
        actual: usize,
    },

    #[error("recursion depth exceeded limit of {limit}")]
    RecursionLimit { limit: usize },

    // Configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a vertex that was never registered
    pub fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an edge whose weight cannot be compared
    pub fn invalid_weight<V: Debug>(from: &V, to: &V, weight: f64) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a negative cycle observed at `vertex`
    pub fn negative_cycle<V: Debug>(vertex: &V) -> Self {
        GraphError::NegativeCycle {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an exceeded resource limit
    pub fn limit_exceeded(what: &str, limit: usize, actual: usize) -> Self {
        GraphError::LimitExceeded {
            what: what.to_string(),
            limit,
            actual,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::UnknownVertex { .. } | GraphError::InvalidWeight { .. } => {
                ErrorKind::Structural
            }
            GraphError::NegativeCycle { .. } => ErrorKind::NegativeCycle,
            GraphError::CycleDetected { .. } => ErrorKind::CycleDetected,
            GraphError::LimitExceeded { .. } | GraphError::RecursionLimit { .. } => {
                ErrorKind::Resource
            }
            GraphError::Config(_) | GraphError::Io(_) | GraphError::Toml(_) => ErrorKind::Config,
        }
    }

    /// Convert error to JSON representation for structured output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "kind": self.kind().as_str(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
