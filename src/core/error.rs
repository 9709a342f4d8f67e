use std::fmt;

use thiserror::Error;

/// An operation referenced a vertex that is not in the graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("vertex {0:?} not found")]
pub struct VertexNotFound<Id>(pub Id);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("adding vertex {id:?} failed: {kind}")]
pub struct AddVertexError<Id> {
    pub id: Id,
    pub kind: AddVertexErrorKind,
}

impl<Id> AddVertexError<Id> {
    pub fn new(id: Id, kind: AddVertexErrorKind) -> Self {
        Self { id, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    Duplicate,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::Duplicate => "a vertex with the same id already exists",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("adding edge ({src:?}, {dst:?}) failed: {kind}")]
pub struct AddEdgeError<Id> {
    pub src: Id,
    pub dst: Id,
    pub kind: AddEdgeErrorKind,
}

impl<Id> AddEdgeError<Id> {
    pub fn new(src: Id, dst: Id, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }

    /// Returns the endpoint that is missing in the graph.
    pub fn missing(&self) -> &Id {
        match self.kind {
            AddEdgeErrorKind::SourceAbsent => &self.src,
            AddEdgeErrorKind::DestinationAbsent => &self.dst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}
