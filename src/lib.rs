//! Minimum-cost flow over a residual network.
//!
//! A [`ResidualGraph`] is assembled by the [`TopologyBuilder`] (or by hand) and then handed to
//! a [`MinCostFlow`] implementation together with a source and a sink. The default driver,
//! [`SuccessiveShortestPaths`], repeatedly asks the SPFA engine for the cheapest residual path
//! and augments along it until the sink is no longer reachable, failing with
//! [`Error::NegativeCycle`] if a negative-cost cycle shows up.
//!
//! ```
//! use mincostflow::{ArcSpec, MinCostFlow, SuccessiveShortestPaths, TopologyBuilder};
//!
//! let mut graph = TopologyBuilder::new()
//!     .arc(ArcSpec::new("s", "a", 4i32, 1).unwrap())
//!     .arc(ArcSpec::new("a", "t", 3, 2).unwrap())
//!     .build()
//!     .unwrap();
//! let (s, t) = (graph.require("s").unwrap(), graph.require("t").unwrap());
//!
//! let summary = SuccessiveShortestPaths::new()
//!     .min_cost_flow(&mut graph, s, t)
//!     .unwrap();
//! assert_eq!((summary.flow, summary.cost), (3, 9));
//! ```

#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod amount;
pub mod arc;
pub mod builder;
pub mod error;
pub mod graph;
pub mod node;
pub mod path;

#[cfg(feature = "lemon-cpp")]
pub use crate::algo::mcmf::network_simplex::NetworkSimplex;
pub use crate::algo::mcmf::successive_shortest_paths::{
    successive_shortest_paths, SuccessiveShortestPaths,
};
pub use crate::algo::mcmf::{Augmentation, FlowSummary, MinCostFlow};
pub use crate::algo::spfa::{shortest_path, spfa, ShortestPaths};
pub use crate::algo::FlowPath;
pub use crate::amount::Amount;
pub use crate::arc::{ArcView, ArcWeight};
pub use crate::builder::{ArcSpec, RawArc, TopologyBuilder};
pub use crate::error::Error;
pub use crate::graph::ResidualGraph;
pub use crate::node::{ArcId, Node, NodeId};
pub use crate::path::Path;
