use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Negative-cost cycle reachable from the source
    NegativeCycle,
    /// Unknown node `{0}`
    UnknownNode(String),
    /// Source and sink must be distinct nodes
    SourceIsSink,
    /// No arc connects `{from}` to `{to}` along the path
    DisconnectedPath { from: String, to: String },
    /// Path has no residual capacity left to augment
    SaturatedPath,
    /// Path visits node `{0}` more than once
    RepeatedNode(String),
    /// Arithmetic overflow while accumulating flow or cost
    ArithmeticOverflow,
    /// Invalid arc where source and target are the same
    ArcToSelf,
    /// Invalid arc capacity, expected non-negative value
    NegativeCapacity,
    /// Arc tables have mismatched lengths
    TableLengthMismatch,
    /// Min-cost flow backend specific error: {0}
    AlgoSpecific(String),
}
