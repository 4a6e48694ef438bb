#[cfg(feature = "lemon-cpp")]
pub mod network_simplex;

pub mod successive_shortest_paths;

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::algo::FlowPath;
use crate::amount::Amount;
use crate::graph::ResidualGraph;
use crate::node::NodeId;
use crate::path::Path;

/// The minimum cost flow algorithm.
pub trait MinCostFlow {
    type Amount;
    type Error: Debug;

    /// Run the algorithm over `graph` between `source` and `sink` and return the flow volume and
    /// cost reached, along with the paths that were used.
    fn min_cost_flow(
        &mut self,
        graph: &mut ResidualGraph<Self::Amount>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowSummary<Self::Amount>, Self::Error>;
}

/// One augmenting step: the path, the flow pushed along it and its unit cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation<Int> {
    pub path: Path,
    pub flow: Int,
    pub unit_cost: Int,
}

impl<Int: Amount> FlowPath for Augmentation<Int> {
    type Node = NodeId;
    type Flow = Int;
    type Iter = Vec<NodeId>;

    fn nodes(&self) -> Self::Iter {
        self.path.nodes().to_vec()
    }

    fn flow(&self) -> Self::Flow {
        self.flow
    }
}

/// Running totals after the driver terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowSummary<Int> {
    pub flow: Int,
    pub cost: Int,
    pub augmentations: Vec<Augmentation<Int>>,
}

impl<Int: Amount> FlowSummary<Int> {
    /// Unit costs of the augmenting paths, in the order they were found.
    pub fn path_costs(&self) -> Vec<Int> {
        self.augmentations.iter().map(|a| a.unit_cost).collect()
    }
}
