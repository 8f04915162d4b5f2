use crate::SolverVariable;

/// Failure to read or write a value in the solution step history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateAccessError {
    #[error("Unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("Offset {offset} is out of range for a history of depth {depth}")]
    OffsetOutOfRange { offset: usize, depth: usize },

    /// Values at offsets `>= 1` are committed and can only be moved by advancing the history.
    #[error("Value of {variable} at offset {offset} is committed and cannot be modified")]
    ReadOnly {
        variable: SolverVariable,
        offset: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or missing construction parameter. Detected once, eagerly, before any solver
    /// instance exists.
    #[error("Invalid solver configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    StateAccess(#[from] StateAccessError),

    /// The dynamic solve exceeded its iteration cap without reducing the residual below tolerance.
    #[error("Dynamic solve did not converge after {iterations} iterations (residual = {residual:e})")]
    Divergence { iterations: usize, residual: f64 },
}
