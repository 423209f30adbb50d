//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of panicking.

use wayfinder_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction rejected the generated edges.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
