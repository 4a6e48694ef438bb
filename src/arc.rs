use core::fmt;

use num_traits::Zero;

use crate::node::{ArcId, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcWeight<Int> {
    pub cost: Int,     // c
    pub capacity: Int, // µ, residual
    pub flow: Int,     // x
}

impl<Int: Zero> ArcWeight<Int> {
    pub fn new(capacity: Int, cost: Int) -> Self {
        Self {
            cost,
            capacity,
            flow: Int::zero(),
        }
    }
}

impl<Int: Zero + PartialOrd> ArcWeight<Int> {
    pub fn has_capacity(&self) -> bool {
        self.capacity > Int::zero()
    }

    pub fn is_saturated(&self) -> bool {
        self.capacity.is_zero()
    }
}

/// Read-only view of an arc together with its endpoints, used for reporting.
#[derive(Debug, Clone, Copy)]
pub struct ArcView<'a, Int> {
    pub id: ArcId,
    pub source: NodeId,
    pub target: NodeId,
    pub source_label: &'a str,
    pub target_label: &'a str,
    pub weight: &'a ArcWeight<Int>,
}

impl<'a, Int> ArcView<'a, Int> {
    /// Identity used to de-duplicate the flat arc view.
    pub fn key(&self) -> (NodeId, NodeId, &'a Int) {
        (self.source, self.target, &self.weight.cost)
    }
}

impl<Int: fmt::Display> fmt::Display for ArcView<'_, Int> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} | cost: {} | capacity: {} | flow: {}",
            self.source_label,
            self.target_label,
            self.weight.cost,
            self.weight.capacity,
            self.weight.flow
        )
    }
}
