use alloc::string::String;
use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, NodeIndex};

/// Handle of a node inside a [`ResidualGraph`](crate::graph::ResidualGraph).
pub type NodeId = NodeIndex<u32>;

/// Handle of an arc inside a [`ResidualGraph`](crate::graph::ResidualGraph).
pub type ArcId = EdgeIndex<u32>;

/// A labelled vertex owning the handles of its outgoing arcs.
///
/// The order of `outgoing` is the insertion order of the arcs and decides which of two
/// equally short paths the shortest-path search settles on.
#[derive(Clone, Debug)]
pub struct Node {
    label: String,
    outgoing: Vec<ArcId>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outgoing: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn outgoing(&self) -> &[ArcId] {
        &self.outgoing
    }

    pub(crate) fn push_outgoing(&mut self, arc: ArcId) {
        self.outgoing.push(arc);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}
