use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;
use petgraph::graph::DiGraph;
use petgraph::visit::{Bfs, Dfs, EdgeFiltered};

use crate::amount::Amount;
use crate::arc::{ArcView, ArcWeight};
use crate::error::Error;
use crate::node::{ArcId, Node, NodeId};
use crate::path::Path;

/// Flow network holding the residual state of every arc.
///
/// Nodes live in a petgraph arena and are addressed by [`NodeId`]; labels are resolved through
/// an index instead of scanning the node list. Residual capacity is an independent counter and
/// is never derived from `initial capacity - flow`.
#[derive(Clone, Debug)]
pub struct ResidualGraph<Int> {
    graph: DiGraph<Node, ArcWeight<Int>>,
    index: BTreeMap<String, NodeId>,
}

impl<Int: Amount> Default for ResidualGraph<Int> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Int: Amount> ResidualGraph<Int> {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: BTreeMap::new(),
        }
    }

    /// Returns the node labelled `label`, creating it if it doesn't exist yet.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.graph.add_node(Node::new(label));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Appends an arc to the outgoing list of `source`.
    pub fn add_arc(
        &mut self,
        source: NodeId,
        target: NodeId,
        capacity: Int,
        cost: Int,
    ) -> Result<ArcId, Error> {
        self.check_node(source)?;
        self.check_node(target)?;
        if capacity < Int::zero() {
            return Err(Error::NegativeCapacity);
        }

        let id = self
            .graph
            .add_edge(source, target, ArcWeight::new(capacity, cost));
        self.graph[source].push_outgoing(id);
        Ok(id)
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Resolves `label` or fails with [`Error::UnknownNode`].
    pub fn require(&self, label: &str) -> Result<NodeId, Error> {
        self.node_id(label)
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.graph.node_count()
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), Error> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::UnknownNode(node.index().to_string()))
        }
    }

    /// Panics if `node` doesn't belong to this graph.
    pub fn label(&self, node: NodeId) -> &str {
        self.graph[node].label()
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.graph.node_weight(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn arc(&self, arc: ArcId) -> Option<&ArcWeight<Int>> {
        self.graph.edge_weight(arc)
    }

    /// Outgoing arcs of `node` as `(target, weight)` pairs, in insertion order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &ArcWeight<Int>)> + '_ {
        self.graph[node]
            .outgoing()
            .iter()
            .map(move |&arc| (self.target(arc), &self.graph[arc]))
    }

    /// First arc from `source` to `target` in insertion order.
    pub fn find_arc(&self, source: NodeId, target: NodeId) -> Option<ArcId> {
        self.graph
            .node_weight(source)?
            .outgoing()
            .iter()
            .copied()
            .find(|&arc| self.target(arc) == target)
    }

    fn target(&self, arc: ArcId) -> NodeId {
        self.graph.raw_edges()[arc.index()].target()
    }

    fn connecting_arc(&self, source: NodeId, target: NodeId) -> Result<ArcId, Error> {
        self.find_arc(source, target)
            .ok_or_else(|| Error::DisconnectedPath {
                from: self.node_label(source),
                to: self.node_label(target),
            })
    }

    fn node_label(&self, node: NodeId) -> String {
        self.node(node)
            .map(|n| n.label().to_string())
            .unwrap_or_else(|| node.index().to_string())
    }

    /// Minimum residual capacity over the arcs connecting consecutive nodes of `path`.
    ///
    /// A path with fewer than two nodes has a zero bottleneck.
    pub fn bottleneck(&self, path: &Path) -> Result<Int, Error> {
        let mut bottleneck: Option<Int> = None;
        for (u, v) in path.hops() {
            let capacity = self.graph[self.connecting_arc(u, v)?].capacity;
            bottleneck = Some(bottleneck.map_or(capacity, |b| b.min(capacity)));
        }
        Ok(bottleneck.unwrap_or_else(Int::zero))
    }

    /// Pushes the bottleneck flow along `path` and returns the amount sent.
    ///
    /// Every forward arc gains flow and loses residual capacity. If the topology has an arc
    /// running the opposite way, its residual capacity grows by the same amount; no such arc
    /// is ever created here. The path must not visit a node twice. Nothing is written unless
    /// every hop can be updated.
    pub fn augment(&mut self, path: &Path) -> Result<Int, Error> {
        let mut seen = BTreeSet::new();
        if let Some(&node) = path.nodes().iter().find(|&&n| !seen.insert(n)) {
            return Err(Error::RepeatedNode(self.node_label(node)));
        }

        let flow = self.bottleneck(path)?;
        if path.len() < 2 {
            return Ok(flow);
        }
        if flow <= Int::zero() {
            return Err(Error::SaturatedPath);
        }

        let mut updates = Vec::with_capacity(2 * path.len());
        for (u, v) in path.hops() {
            let forward = self.connecting_arc(u, v)?;
            let weight = &self.graph[forward];
            let pushed = weight
                .flow
                .checked_add(&flow)
                .ok_or(Error::ArithmeticOverflow)?;
            updates.push((forward, pushed, weight.capacity - flow));

            if let Some(reverse) = self.find_arc(v, u) {
                let weight = &self.graph[reverse];
                let restored = weight
                    .capacity
                    .checked_add(&flow)
                    .ok_or(Error::ArithmeticOverflow)?;
                updates.push((reverse, weight.flow, restored));
            }
        }

        for (arc, new_flow, new_capacity) in updates {
            let weight = &mut self.graph[arc];
            weight.flow = new_flow;
            weight.capacity = new_capacity;
            log::trace!("{}", self.view(arc));
        }

        Ok(flow)
    }

    /// Sum of unit costs of the arcs connecting consecutive nodes of `path`.
    pub fn path_cost(&self, path: &Path) -> Result<Int, Error> {
        path.hops().try_fold(Int::zero(), |acc, (u, v)| {
            let cost = self.graph[self.connecting_arc(u, v)?].cost;
            acc.checked_add(&cost).ok_or(Error::ArithmeticOverflow)
        })
    }

    fn view(&self, arc: ArcId) -> ArcView<'_, Int> {
        let edge = &self.graph.raw_edges()[arc.index()];
        ArcView {
            id: arc,
            source: edge.source(),
            target: edge.target(),
            source_label: self.graph[edge.source()].label(),
            target_label: self.graph[edge.target()].label(),
            weight: &edge.weight,
        }
    }

    /// Every arc of the network, in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = ArcView<'_, Int>> + '_ {
        self.graph.edge_indices().map(move |arc| self.view(arc))
    }

    /// Every arc of the network, de-duplicated by `(source, target, cost)`.
    pub fn flat_arcs(&self) -> Vec<ArcView<'_, Int>> {
        self.arcs().unique_by(|view| view.key()).collect()
    }

    /// Arcs whose residual capacity is exhausted.
    pub fn saturated_arcs(&self) -> Vec<ArcView<'_, Int>> {
        self.arcs().filter(|view| view.weight.is_saturated()).collect()
    }

    /// Saturated arcs leaving `subset` for its complement.
    pub fn cut_arcs(&self, subset: &BTreeSet<NodeId>) -> Vec<ArcView<'_, Int>> {
        self.arcs()
            .filter(|view| {
                subset.contains(&view.source)
                    && !subset.contains(&view.target)
                    && view.weight.is_saturated()
            })
            .collect()
    }

    /// Nodes reachable from `start` over arcs with residual capacity left.
    pub fn reachable(&self, start: NodeId) -> BTreeSet<NodeId> {
        let mut reached = BTreeSet::new();
        if !self.contains(start) {
            return reached;
        }

        let residual = EdgeFiltered::from_fn(&self.graph, |e| e.weight().has_capacity());
        let mut bfs = Bfs::new(&residual, start);
        while let Some(node) = bfs.next(&residual) {
            reached.insert(node);
        }
        reached
    }

    /// Fewest-hop path from `start` to `goal` over arcs with residual capacity left.
    ///
    /// Outgoing arcs are explored in insertion order, so the first of several equally short
    /// paths wins. Returns an empty path when `goal` can't be reached.
    pub fn bfs_path(&self, start: NodeId, goal: NodeId) -> Result<Path, Error> {
        self.check_node(start)?;
        self.check_node(goal)?;
        if start == goal {
            return Ok(Path::from(vec![start]));
        }

        let mut pred: Vec<Option<NodeId>> = vec![None; self.node_count()];
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for (v, arc) in self.outgoing(u) {
                if v == start || pred[v.index()].is_some() || !arc.has_capacity() {
                    continue;
                }
                pred[v.index()] = Some(u);
                if v == goal {
                    let mut nodes = vec![goal];
                    let mut current = goal;
                    while let Some(p) = pred[current.index()] {
                        nodes.push(p);
                        current = p;
                    }
                    nodes.reverse();
                    return Ok(Path::from(nodes));
                }
                queue.push_back(v);
            }
        }

        Ok(Path::empty())
    }

    /// Source side of a minimum cut and the arcs crossing it, once no augmenting path is left.
    pub fn min_cut(&self, source: NodeId) -> (BTreeSet<NodeId>, Vec<ArcView<'_, Int>>) {
        let side = self.reachable(source);
        let cut = self.cut_arcs(&side);
        (side, cut)
    }

    /// Depth-first preorder from `start`, ignoring residual capacities.
    pub fn depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if !self.contains(start) {
            return order;
        }

        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(node) = dfs.next(&self.graph) {
            order.push(node);
        }
        order
    }
}

impl<Int: Amount> fmt::Display for ResidualGraph<Int> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for view in self.arcs() {
            writeln!(f, "{view}")?;
        }
        Ok(())
    }
}
