//! Core types for terminal references.

use std::collections::HashMap;
use std::fmt;

/// A handle to a circuit node, issued by the topology resolver.
/// Node 0 is always ground.
///
/// Devices store these as foreign keys; they never own the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// An ordered pair of terminals whose voltage difference `V(pos) - V(neg)`
/// drives or is measured by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port {
    pub pos: NodeId,
    pub neg: NodeId,
}

impl Port {
    pub fn new(pos: NodeId, neg: NodeId) -> Self {
        Self { pos, neg }
    }
}

impl From<[NodeId; 2]> for Port {
    fn from([pos, neg]: [NodeId; 2]) -> Self {
        Self { pos, neg }
    }
}

impl From<(NodeId, NodeId)> for Port {
    fn from((pos, neg): (NodeId, NodeId)) -> Self {
        Self { pos, neg }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pos, self.neg)
    }
}

/// Lookup from internal node handles to the external names used in netlists.
///
/// Only consulted when writing netlist lines, never during evaluation.
pub trait NodeNames {
    /// Display name of `node`, or `None` if the topology does not know it.
    fn node_name(&self, node: NodeId) -> Option<&str>;
}

impl NodeNames for HashMap<NodeId, String> {
    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.get(&node).map(String::as_str)
    }
}

/// Names indexed by the raw node number, ground first.
impl NodeNames for [String] {
    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.get(node.0).map(String::as_str)
    }
}

impl NodeNames for Vec<String> {
    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.as_slice().node_name(node)
    }
}
