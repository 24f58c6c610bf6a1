/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Node ids are *handles*: they need not be contiguous, a graph may contain `{1, 3, 17}`.
The only intrinsic property used by the algorithms is their total order, which makes
every enumeration of nodes deterministic.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// It can never be registered in a graph and is used as a sentinel wherever a result
/// carries node ids that may be meaningless (see [`CycleReport`](crate::algo::CycleReport)).
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Returns *true* if `u` may be registered in a graph
#[inline]
pub const fn is_valid_node(u: Node) -> bool {
    u != INVALID_NODE
}
