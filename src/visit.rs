//! Lazy graph traversals.
//!
//! All traversals in this module are **iterative**, they don't use recursion.
//! A visitor can be stopped at any point, it does not borrow the graph between
//! steps and it is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are discovered in the insertion order of its
//! adjacency.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsEvents},
};

use rustc_hash::FxHashSet;

use crate::core::{id::IdType, VertexSet};

/// Trait for a specific graph traversal approach.
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// Unlike [`Iterator::next`], the visitor doesn't hold a reference to the
    /// graph, so it can be passed around without lifetime problems.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjgraph::{
    ///     visit::{Dfs, Visitor},
    ///     Graph,
    /// };
    ///
    /// let mut graph = Graph::new_directed();
    ///
    /// graph.extend_with_vertices(["a", "b", "c"]).unwrap();
    /// graph.extend_with_edges([("a", "b"), ("b", "c")]).unwrap();
    ///
    /// let mut dfs = Dfs::new(&graph);
    /// let mut visitor = dfs.start("a");
    ///
    /// assert_eq!(visitor.visit_next(&graph), Some("a"));
    /// assert_eq!(visitor.visit_next(&graph), Some("b"));
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// A collection of starting vertices for a graph traversal.
///
/// This trait is implemented for any [`Iterator`].
pub trait VisitRoots<I: IdType> {
    /// Returns next id to start the traversal from.
    ///
    /// The returned id might have already been visited. It is the
    /// responsibility of the visitor to skip such roots.
    fn next_root(&mut self) -> Option<I>;

    /// Returns `true` if the collection can tell from the visited set that all
    /// remaining roots have already been visited.
    fn is_done(&mut self, _visited: &FxHashSet<I>) -> bool {
        false
    }
}

impl<I: IdType, T> VisitRoots<I> for T
where
    T: Iterator<Item = I>,
{
    fn next_root(&mut self) -> Option<I> {
        self.next()
    }
}

/// A [`VisitRoots`] collection for visiting all vertices in a graph, in the
/// order in which they were added.
pub struct VisitAll<'a, G>
where
    G: VertexSet,
{
    graph: &'a G,
    ids: G::VertexIdsIter<'a>,
}

impl<'a, G> VisitAll<'a, G>
where
    G: VertexSet,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            ids: graph.vertex_ids(),
        }
    }
}

impl<G> VisitRoots<G::VertexId> for VisitAll<'_, G>
where
    G: VertexSet,
{
    fn next_root(&mut self) -> Option<G::VertexId> {
        self.ids.next().cloned()
    }

    fn is_done(&mut self, visited: &FxHashSet<G::VertexId>) -> bool {
        visited.len() == self.graph.vertex_count()
    }
}

/// Strictly monotonically increasing numbering of traversal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsEvent<Id> {
    /// A new vertex was discovered.
    Open { vertex: Id, time: Time },

    /// An edge of the tree formed by the traversal.
    TreeEdge { from: Id, to: Id },

    /// An edge to a vertex that is discovered but not yet closed, that is, to
    /// an ancestor in the traversal tree.
    ///
    /// Presence of a back edge indicates a cycle in the graph.
    BackEdge { from: Id, to: Id },

    /// An edge to an already closed vertex.
    ///
    /// In undirected graphs there is no concept of cross or forward edges and
    /// this event is never reported.
    CrossForwardEdge { from: Id, to: Id },

    /// All edges from the vertex have been reported.
    Close { vertex: Id, time: Time },
}
