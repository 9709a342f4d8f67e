pub mod error;
pub mod id;
pub mod weight;

mod base;
mod vertex;

pub use base::*;
pub use error::{AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind, VertexNotFound};
pub use vertex::Vertex;
pub use weight::Weight;
