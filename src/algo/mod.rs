pub mod mcmf;
pub mod spfa;

/// A source-to-sink path together with the flow it carries.
pub trait FlowPath {
    type Node;
    type Flow;
    type Iter: IntoIterator<Item = Self::Node>;

    fn nodes(&self) -> Self::Iter;
    fn flow(&self) -> Self::Flow;
}
