use std::fmt::Debug;

use derive_more::{Display, Error};

/// The error produced when querying a vertex that was never added to the graph. Carries the
/// offending vertex identity for diagnostics.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("Vertex {vertex:?} does not exist in the graph!")]
pub struct VertexNotFound<V: Debug> {
    pub vertex: V,
}
