//! Error types of the equilibrium engine.

use super::link::LinkId;
use thiserror::Error;

/// Result type for equilibrium operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a network or solving on it.
#[derive(Debug, Error)]
pub enum Error {
    /// A link identifier outside the configured link set was referenced.
    #[error("unknown link: {0}")]
    UnknownLink(LinkId),

    /// The same link identifier was configured twice.
    #[error("duplicate link: {0}")]
    DuplicateLink(LinkId),

    /// A link names only one of its two endpoints.
    #[error("link {0} must give both `from` and `to`, or neither")]
    IncompleteEndpoints(LinkId),

    /// A network needs at least one link.
    #[error("network has no links")]
    EmptyNetwork,

    /// Cost parameters must be finite and non-negative.
    #[error("invalid cost parameters on link {link}: alpha={alpha}, beta={beta}")]
    InvalidCost { link: LinkId, alpha: f64, beta: f64 },

    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("invalid demand unit: {0}")]
    InvalidDemand(f64),

    /// Drawing the convergence chart failed.
    #[error("plot error: {0}")]
    Plot(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
