use thiserror::Error;

use crate::*;

/// Errors reported by the cycle space computation
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CycleSpaceError {
    /// No graph was provided
    #[error("graph must not be absent")]
    MissingGraph,

    /// The requested root is not a node of the graph
    #[error("root {root} is not a node of a graph with {number_of_nodes} nodes")]
    RootOutOfRange {
        root: Node,
        number_of_nodes: NumNodes,
    },

    /// A connected graph was required but the graph has more than one component
    #[error("graph has {components} connected components but must be connected")]
    Disconnected { components: usize },

    /// The cycle space has more dimensions than the caller allowed
    #[error("cycle space has dimension {dimension} which exceeds the limit of {limit}")]
    DimensionTooLarge { dimension: usize, limit: usize },
}
