/*!
# Errors

Structural edits are the only fallible operations of this crate. They either fully
apply or fail before touching any state, so there is nothing to recover from: the
error is returned to the immediate caller.
*/

use thiserror::Error;

use crate::node::Node;

/// Errors raised by graph editing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not registered in the graph, or the node id is reserved
    /// (see [`INVALID_NODE`](crate::node::INVALID_NODE)) and can never be registered.
    #[error("invalid node reference: node {node} is not registered in the graph")]
    InvalidNodeReference {
        /// The offending node id
        node: Node,
    },
}

/// Shorthand for results of graph editing operations
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
