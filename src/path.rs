use alloc::vec::Vec;

use itertools::Itertools;

use crate::amount::Amount;
use crate::graph::ResidualGraph;
use crate::node::NodeId;

/// An ordered sequence of nodes from source to sink.
///
/// An empty path means the sink could not be reached under the residual capacities it was
/// computed against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive `(u, v)` hops along the path.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.0.iter().copied().tuple_windows()
    }

    pub fn labels<'g, Int: Amount>(&self, graph: &'g ResidualGraph<Int>) -> Vec<&'g str> {
        self.0.iter().map(|&n| graph.label(n)).collect()
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl IntoIterator for Path {
    type Item = NodeId;
    type IntoIter = alloc::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
