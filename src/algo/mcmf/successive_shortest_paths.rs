use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::algo::mcmf::{Augmentation, FlowSummary, MinCostFlow};
use crate::algo::spfa::shortest_path;
use crate::amount::Amount;
use crate::error::Error;
use crate::graph::ResidualGraph;
use crate::node::NodeId;
use crate::path::Path;

#[derive(Debug, Clone, Default)]
pub struct SuccessiveShortestPaths<Int>(PhantomData<Int>);

impl<Int> SuccessiveShortestPaths<Int> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Int: Amount> MinCostFlow for SuccessiveShortestPaths<Int> {
    type Amount = Int;
    type Error = Error;

    fn min_cost_flow(
        &mut self,
        graph: &mut ResidualGraph<Int>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowSummary<Int>, Self::Error> {
        successive_shortest_paths(graph, source, sink)
    }
}

enum State {
    Searching,
    Augmenting(Path),
    Terminated,
}

/// Sends as much flow as possible from `source` to `sink`, always along the currently cheapest
/// residual path, and returns the accumulated flow and cost.
///
/// A negative-cost cycle reachable from `source` aborts the whole computation with
/// [`Error::NegativeCycle`]; no partial flow is reported in that case.
pub fn successive_shortest_paths<Int: Amount>(
    graph: &mut ResidualGraph<Int>,
    source: NodeId,
    sink: NodeId,
) -> Result<FlowSummary<Int>, Error> {
    graph.check_node(source)?;
    graph.check_node(sink)?;
    if source == sink {
        return Err(Error::SourceIsSink);
    }

    let mut flow = Int::zero();
    let mut cost = Int::zero();
    let mut augmentations = Vec::new();
    let mut state = State::Searching;

    loop {
        state = match state {
            State::Searching => {
                let path = shortest_path(graph, source, sink).map_err(|e| {
                    log::warn!("stopping after {} augmentation(s): {e}", augmentations.len());
                    e
                })?;
                if path.is_empty() {
                    log::debug!("{} is unreachable, flow is maximal", graph.label(sink));
                    State::Terminated
                } else {
                    State::Augmenting(path)
                }
            }
            State::Augmenting(path) => {
                let unit_cost = graph.path_cost(&path)?;
                let sent = graph.augment(&path)?;

                flow = flow.checked_add(&sent).ok_or(Error::ArithmeticOverflow)?;
                cost = sent
                    .checked_mul(&unit_cost)
                    .and_then(|c| cost.checked_add(&c))
                    .ok_or(Error::ArithmeticOverflow)?;

                log::debug!(
                    "augmenting path {:?}: flow {sent}, unit cost {unit_cost}",
                    path.labels(graph)
                );
                augmentations.push(Augmentation {
                    path,
                    flow: sent,
                    unit_cost,
                });
                State::Searching
            }
            State::Terminated => break,
        };
    }

    log::info!("----------------------------------");
    log::info!("      Augmenting paths = {}", augmentations.len());
    log::info!("            Total flow = {flow}");
    log::info!("            Total cost = {cost}");

    Ok(FlowSummary {
        flow,
        cost,
        augmentations,
    })
}
