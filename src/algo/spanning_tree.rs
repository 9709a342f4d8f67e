//! Find a [minimum spanning tree] of an undirected weighted graph.
//!
//! See available parameters [here](SpanningTreeBuilder#implementations).
//!
//! Both algorithms produce the edge list and the total weight of the tree.
//! A graph without a spanning tree (disconnected) is reported as an error
//! instead of returning a spanning forest.
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::SpanningTree, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new_undirected();
//!
//! graph.extend_with_vertices(["a", "b", "c", "d"]).unwrap();
//! graph
//!     .extend_with_edges([("a", "b", 3), ("b", "c", 1), ("a", "c", 2), ("c", "d", 5)])
//!     .unwrap();
//!
//! let tree = SpanningTree::on(&graph).kruskal().run().unwrap();
//!
//! assert_eq!(tree.total(), &8);
//! assert_eq!(tree.edges(), &[("b", "c", 1), ("a", "c", 2), ("c", "d", 5)]);
//!
//! let tree = SpanningTree::on(&graph).prim().run().unwrap();
//! assert_eq!(tree.total(), &8);
//! ```

use thiserror::Error;

mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningTreeBuilder;

/// Edges of a minimum spanning tree and their total weight.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<Id, W> {
    edges: Vec<(Id, Id, W)>,
    total: W,
}

impl<Id, W> SpanningTree<Id, W> {
    pub(crate) fn new(edges: Vec<(Id, Id, W)>, total: W) -> Self {
        Self { edges, total }
    }

    /// Tree edges in the order they were selected by the algorithm.
    pub fn edges(&self) -> &[(Id, Id, W)] {
        &self.edges
    }

    /// Sum of the weights of all tree edges.
    pub fn total(&self) -> &W {
        &self.total
    }

    /// Number of edges in the tree, one less than the number of vertices of a
    /// non-empty graph.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edges(self) -> Vec<(Id, Id, W)> {
        self.edges
    }

    pub fn into_total(self) -> W {
        self.total
    }
}

/// The error encountered during a [`SpanningTree`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Not all vertices can be connected by the tree.
    #[error("graph is disconnected")]
    Disconnected,
    /// Spanning trees are defined for undirected graphs only.
    #[error("graph is directed")]
    Directed,
}

/// Algorithm for [`SpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm)
    ///
    /// Considers all edges from the lightest and adds those that connect two
    /// different components, tracked by a union-find structure. Ties are
    /// resolved by the order in which the edges are stored.
    Kruskal,

    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    ///
    /// Grows the tree from the first vertex of the graph, always adding the
    /// lightest edge leaving the tree.
    Prim,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Algo);

    #[derive(Debug)]
    pub struct Kruskal;

    #[derive(Debug)]
    pub struct Prim;
}
