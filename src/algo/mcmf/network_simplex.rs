use alloc::format;
use alloc::vec::Vec;

use mcmf::{Capacity, Cost, GraphBuilder, Path as LemonPath, Vertex};
use petgraph::graph::NodeIndex;

use crate::algo::mcmf::{Augmentation, FlowSummary, MinCostFlow};
use crate::error::Error;
use crate::graph::ResidualGraph;
use crate::node::NodeId;
use crate::path::Path;

/// Network simplex through LEMON (via the `mcmf` crate).
///
/// Solves the topology as built, treating the current residual capacities as arc capacities,
/// and leaves `graph` untouched. Meant for cross-checking the totals of the SPFA driver.
#[derive(Debug, Clone, Default)]
pub struct NetworkSimplex;

impl NetworkSimplex {
    fn vertex(node: NodeId, source: NodeId, sink: NodeId) -> Vertex<usize> {
        if node == source {
            Vertex::Source
        } else if node == sink {
            Vertex::Sink
        } else {
            Vertex::Node(node.index())
        }
    }

    fn node(vertex: &Vertex<usize>, source: NodeId, sink: NodeId) -> NodeId {
        match vertex {
            Vertex::Source => source,
            Vertex::Sink => sink,
            Vertex::Node(id) => NodeIndex::new(*id),
        }
    }

    /// Unit costs are summed over the arcs LEMON routed the path through, which may be a
    /// later parallel arc than the one `find_arc` resolves.
    fn augmentation(
        path: &LemonPath<usize>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<Augmentation<i32>, Error> {
        let amount = path.flows.first().map_or(0, |f| f.amount);
        let flow = i32::try_from(amount).map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;
        let unit_cost = path
            .flows
            .iter()
            .try_fold(0i32, |acc, f| acc.checked_add(f.cost))
            .ok_or(Error::ArithmeticOverflow)?;
        let path = Path::from(
            path.vertices()
                .into_iter()
                .map(|v| Self::node(v, source, sink))
                .collect::<Vec<_>>(),
        );
        Ok(Augmentation {
            path,
            flow,
            unit_cost,
        })
    }
}

impl MinCostFlow for NetworkSimplex {
    type Amount = i32;
    type Error = Error;

    fn min_cost_flow(
        &mut self,
        graph: &mut ResidualGraph<i32>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowSummary<i32>, Self::Error> {
        if source == sink {
            return Err(Error::SourceIsSink);
        }

        // build a lemon graph from the positive-capacity arcs
        let g = graph
            .arcs()
            .filter(|arc| arc.weight.has_capacity())
            .fold(GraphBuilder::new(), |mut acc, arc| {
                acc.add_edge(
                    Self::vertex(arc.source, source, sink),
                    Self::vertex(arc.target, source, sink),
                    Capacity(arc.weight.capacity),
                    Cost(arc.weight.cost),
                );
                acc
            });

        let (cost, paths) = g.mcmf();

        let mut flow = 0i32;
        let mut augmentations = Vec::with_capacity(paths.len());
        for path in &paths {
            let augmentation = Self::augmentation(path, source, sink)?;
            flow = flow
                .checked_add(augmentation.flow)
                .ok_or(Error::ArithmeticOverflow)?;
            augmentations.push(augmentation);
        }

        Ok(FlowSummary {
            flow,
            cost,
            augmentations,
        })
    }
}
