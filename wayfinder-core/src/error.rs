//! Error types for the wayfinder core library.
//!
//! Only precondition violations are errors. Unreachable nodes, cycles and
//! empty graphs are ordinary outcomes and are reported through result types.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A violated precondition detected by a graph operation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node index fell outside `0..node_count`.
    #[error("node {node} is out of bounds for a graph of {node_count} nodes")]
    NodeOutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the graph or set.
        node_count: usize,
    },
    /// A weighted edge carried a negative weight.
    #[error("edge ({origin}, {target}) has negative weight {weight}")]
    NegativeWeight {
        /// Tail of the offending edge.
        origin: usize,
        /// Head of the offending edge.
        target: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// A tentative shortest-path distance exceeded `u64::MAX`.
    #[error("shortest-path distance to node {node} overflows u64")]
    DistanceOverflow {
        /// Node whose tentative distance overflowed.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node index fell outside `0..node_count`.
        NodeOutOfBounds => NodeOutOfBounds { .. } => "GRAPH_NODE_OUT_OF_BOUNDS",
        /// A weighted edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// A tentative shortest-path distance exceeded `u64::MAX`.
        DistanceOverflow => DistanceOverflow { .. } => "GRAPH_DISTANCE_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Fails with [`GraphError::NodeOutOfBounds`] unless `node < node_count`.
pub(crate) const fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfBounds { node, node_count })
    }
}
