use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::error::Error;
use crate::graph::ResidualGraph;
use crate::node::NodeId;
use crate::path::Path;

/// Distances and predecessors from one SPFA run; scratch state that is rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<Int> {
    source: NodeId,
    dist: Vec<Option<Int>>,
    pred: Vec<Option<NodeId>>,
}

impl<Int: Amount> ShortestPaths<Int> {
    /// Cost of the cheapest residual path to `node`, `None` if it can't be reached.
    pub fn distance(&self, node: NodeId) -> Option<Int> {
        self.dist.get(node.index()).copied().flatten()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.pred.get(node.index()).copied().flatten()
    }

    /// Walks the predecessors back from `sink`. Returns an empty path if `sink` was never
    /// relaxed.
    pub fn path_to(&self, sink: NodeId) -> Result<Path, Error> {
        if sink == self.source {
            return Ok(Path::from(vec![sink]));
        }
        if self.predecessor(sink).is_none() {
            return Ok(Path::empty());
        }

        let mut nodes = vec![sink];
        let mut current = sink;
        while current != self.source {
            // a chain longer than the node count can only come from a cycle
            if nodes.len() > self.pred.len() {
                return Err(Error::NegativeCycle);
            }
            current = self.predecessor(current).ok_or(Error::NegativeCycle)?;
            nodes.push(current);
        }
        nodes.reverse();

        Ok(Path::from(nodes))
    }
}

/// Shortest Path Faster Algorithm: Bellman-Ford driven by a FIFO worklist, restricted to arcs
/// with residual capacity left.
///
/// A node is only queued again once it has been dequeued, and every enqueue after a strict
/// improvement counts as a relaxation of that node. A node relaxed more often than there are
/// nodes in the graph sits on a negative-cost cycle reachable from `source`, in which case
/// [`Error::NegativeCycle`] is returned and no distances are reported.
///
/// Ties are settled by the first strict improvement, so the outgoing-arc insertion order
/// decides between equally cheap paths.
pub fn spfa<Int: Amount>(
    graph: &ResidualGraph<Int>,
    source: NodeId,
) -> Result<ShortestPaths<Int>, Error> {
    graph.check_node(source)?;

    let n = graph.node_count();
    let mut dist: Vec<Option<Int>> = vec![None; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut queued = vec![false; n];
    let mut relaxations = vec![0usize; n];
    let mut queue = VecDeque::new();

    dist[source.index()] = Some(Int::zero());
    queue.push_back(source);
    queued[source.index()] = true;

    while let Some(u) = queue.pop_front() {
        queued[u.index()] = false;
        let dist_u = match dist[u.index()] {
            Some(d) => d,
            None => continue,
        };

        for (v, arc) in graph.outgoing(u) {
            if !arc.has_capacity() {
                continue;
            }

            let candidate = dist_u
                .checked_add(&arc.cost)
                .ok_or(Error::ArithmeticOverflow)?;
            if dist[v.index()].map_or(false, |d| candidate >= d) {
                continue;
            }

            log::trace!(
                "relax {} -> {}: {:?} -> {}",
                graph.label(u),
                graph.label(v),
                dist[v.index()],
                candidate
            );
            dist[v.index()] = Some(candidate);
            pred[v.index()] = Some(u);

            if !queued[v.index()] {
                queue.push_back(v);
                queued[v.index()] = true;
                relaxations[v.index()] += 1;

                if relaxations[v.index()] > n {
                    log::warn!(
                        "negative cycle detected: {} relaxed {} times",
                        graph.label(v),
                        relaxations[v.index()]
                    );
                    return Err(Error::NegativeCycle);
                }
            }
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}

/// Least-cost residual path from `source` to `sink`; empty when `sink` is unreachable.
pub fn shortest_path<Int: Amount>(
    graph: &ResidualGraph<Int>,
    source: NodeId,
    sink: NodeId,
) -> Result<Path, Error> {
    graph.check_node(sink)?;
    spfa(graph, source)?.path_to(sink)
}
