use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;
use crate::graph::ResidualGraph;

/// An arc row as read from a table, before validation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawArc<Int> {
    pub source: String,
    pub target: String,
    pub capacity: Int,
    pub cost: Int,
}

/// A validated arc specification.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(
    try_from = "RawArc<Int>",
    bound(deserialize = "Int: Amount + Deserialize<'de>")
)]
pub struct ArcSpec<Int> {
    source: String,
    target: String,
    capacity: Int,
    cost: Int,
}

impl<Int: Amount> ArcSpec<Int> {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        capacity: Int,
        cost: Int,
    ) -> Result<Self, Error> {
        let (source, target) = (source.into(), target.into());
        if source == target {
            Err(Error::ArcToSelf)
        } else if capacity < Int::zero() {
            Err(Error::NegativeCapacity)
        } else {
            Ok(Self {
                source,
                target,
                capacity,
                cost,
            })
        }
    }
}

impl<Int> ArcSpec<Int> {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<Int: Copy> ArcSpec<Int> {
    pub fn capacity(&self) -> Int {
        self.capacity
    }

    pub fn cost(&self) -> Int {
        self.cost
    }
}

impl<Int: Amount> TryFrom<RawArc<Int>> for ArcSpec<Int> {
    type Error = Error;

    fn try_from(a: RawArc<Int>) -> Result<Self, Self::Error> {
        Self::new(a.source, a.target, a.capacity, a.cost)
    }
}

impl<Int> From<ArcSpec<Int>> for RawArc<Int> {
    fn from(a: ArcSpec<Int>) -> Self {
        Self {
            source: a.source,
            target: a.target,
            capacity: a.capacity,
            cost: a.cost,
        }
    }
}

/// Assembles a [`ResidualGraph`] from arc specifications.
///
/// Nodes are created in order of first appearance and arcs keep the order they were given in.
/// With `cancellable(true)`, every arc `u -> v` without an explicit `v -> u` counterpart gets a
/// reverse arc of zero capacity and negated cost, appended after all given arcs. Without it,
/// flow pushed along an arc can never be cancelled again.
#[derive(Clone, Debug)]
pub struct TopologyBuilder<Int> {
    arcs: Vec<ArcSpec<Int>>,
    cancellable: bool,
}

impl<Int: Amount> Default for TopologyBuilder<Int> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Int: Amount> TopologyBuilder<Int> {
    pub fn new() -> Self {
        Self {
            arcs: Vec::new(),
            cancellable: false,
        }
    }

    pub fn cancellable(mut self, cancellable: bool) -> Self {
        self.cancellable = cancellable;
        self
    }

    pub fn arc(mut self, arc: ArcSpec<Int>) -> Self {
        self.arcs.push(arc);
        self
    }

    pub fn arcs(mut self, arcs: impl IntoIterator<Item = ArcSpec<Int>>) -> Self {
        self.arcs.extend(arcs);
        self
    }

    /// Builds the topology from four parallel columns.
    pub fn from_tables<S: AsRef<str>>(
        sources: &[S],
        targets: &[S],
        capacities: &[Int],
        costs: &[Int],
    ) -> Result<Self, Error> {
        let n = sources.len();
        if targets.len() != n || capacities.len() != n || costs.len() != n {
            return Err(Error::TableLengthMismatch);
        }

        let arcs = sources
            .iter()
            .zip(targets)
            .zip(capacities.iter().zip(costs))
            .map(|((s, t), (&capacity, &cost))| {
                ArcSpec::new(s.as_ref(), t.as_ref(), capacity, cost)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new().arcs(arcs))
    }

    /// Person/task assignment network between `s` and `t`.
    ///
    /// Person `i` may take one task, task `j` accepts up to `task_capacity` persons, and
    /// assigning `i` to `j` costs `cost_matrix[i][j]`.
    pub fn assignment(cost_matrix: &[Vec<Int>], task_capacity: Int) -> Result<Self, Error> {
        let tasks = cost_matrix.first().map_or(0, Vec::len);
        if cost_matrix.iter().any(|row| row.len() != tasks) {
            return Err(Error::TableLengthMismatch);
        }

        let mut arcs = Vec::new();
        for (i, row) in cost_matrix.iter().enumerate() {
            let person = format!("p{i}");
            arcs.push(ArcSpec::new("s", person.as_str(), Int::one(), Int::zero())?);
            for (j, &cost) in row.iter().enumerate() {
                arcs.push(ArcSpec::new(person.as_str(), format!("task{j}"), Int::one(), cost)?);
            }
        }
        for j in 0..tasks {
            arcs.push(ArcSpec::new(format!("task{j}"), "t", task_capacity, Int::zero())?);
        }

        Ok(Self::new().arcs(arcs))
    }

    pub fn build(self) -> Result<ResidualGraph<Int>, Error> {
        let mut graph = ResidualGraph::new();
        for arc in &self.arcs {
            let source = graph.add_node(&arc.source);
            let target = graph.add_node(&arc.target);
            if graph.find_arc(source, target).is_some() {
                log::warn!(
                    "parallel arc {} -> {}: only the first one is used along paths",
                    arc.source,
                    arc.target
                );
            }
            graph.add_arc(source, target, arc.capacity, arc.cost)?;
        }

        if self.cancellable {
            for arc in &self.arcs {
                let source = graph.require(&arc.source)?;
                let target = graph.require(&arc.target)?;
                if graph.find_arc(target, source).is_none() {
                    log::trace!("reverse arc {} -> {}", arc.target, arc.source);
                    graph.add_arc(target, source, Int::zero(), -arc.cost)?;
                }
            }
        }

        log::debug!(
            "built network with {} nodes and {} arcs",
            graph.node_count(),
            graph.arc_count()
        );
        Ok(graph)
    }
}
