//! Find [connected] components in a graph.
//!
//! On directed graphs the components are weakly connected, that is, the
//! direction of the edges is ignored.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::{is_connected, ConnectedComponents}, Graph};
//!
//! let mut graph = Graph::new_directed();
//!
//! graph.extend_with_vertices(["a", "b", "c", "d"]).unwrap();
//! graph.extend_with_edges([("a", "b"), ("c", "b")]).unwrap();
//!
//! let components = ConnectedComponents::on(&*graph).run();
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.iter().collect::<Vec<_>>(), vec![&["a", "b", "c"][..], &["d"][..]]);
//! assert!(!is_connected(&*graph));
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

use crate::core::{Neighbors, VertexSet};

mod bfs;
mod builder;

pub use builder::ConnectedComponentsBuilder;

/// Connected components of a graph.
///
/// Components are ordered by their first vertex in the insertion order of the
/// graph. Vertices inside a component are in breadth-first order from that
/// vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents<Id> {
    components: Vec<Vec<Id>>,
}

impl<Id> ConnectedComponents<Id> {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, Id> {
        Iter {
            inner: self.components.iter(),
        }
    }

    pub fn into_inner(self) -> Vec<Vec<Id>> {
        self.components
    }
}

pub struct Iter<'a, Id> {
    inner: std::slice::Iter<'a, Vec<Id>>,
}

impl<'a, Id> Iterator for Iter<'a, Id> {
    type Item = &'a [Id];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

/// Returns `true` if every vertex is reachable from every other vertex when
/// the direction of the edges is ignored. An empty graph is connected.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    ConnectedComponents::on(graph).run().len() <= 1
}
