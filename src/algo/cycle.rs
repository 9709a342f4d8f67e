//! Find a [cycle] in a graph.
//!
//! See available parameters [here](CycleBuilder#implementations).
//!
//! The whole graph is searched, not only the part reachable from some vertex.
//! In undirected graphs, the two adjacency entries of a single edge do not
//! form a cycle, but a self loop does.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend_with_vertices(["a", "b", "c", "d"]).unwrap();
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "d")]).unwrap();
//!
//! assert!(!is_cyclic(&*graph));
//!
//! graph.add_edge(&"d", &"a").unwrap();
//!
//! assert!(is_cyclic(&*graph));
//! ```

use crate::core::{Neighbors, VertexSet};

mod builder;
mod dfs;

pub use builder::CycleBuilder;

/// Cycle in a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<Id> {
    vertices: Vec<Id>,
}

impl<Id> Cycle<Id> {
    pub(crate) fn new(vertices: Vec<Id>) -> Self {
        Self { vertices }
    }

    /// Vertices on the cycle in the order of traversal. The edge closing the
    /// cycle goes from the last vertex to the first one.
    pub fn vertices(&self) -> &[Id] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Id> {
        self.vertices
    }

    /// Number of edges on the cycle.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Returns `true` if the graph is cyclic.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Cycle::on(graph).run().is_some()
}

/// Returns `true` if the graph is cyclic, ignoring the direction of the edges.
pub fn is_cyclic_undirected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Cycle::on(graph).as_undirected().run().is_some()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::ConnectedComponents, infra::proptest::graph_undirected, storage::AdjList,
    };

    use super::*;

    fn create_graph(
        directed: bool,
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str)],
    ) -> AdjList<&'static str, ()> {
        let mut graph = AdjList::new(directed);

        for v in vertices {
            graph.add_vertex(*v).unwrap();
        }

        for (u, v) in edges {
            graph.add_edge(u, v, ()).unwrap();
        }

        graph
    }

    #[test]
    fn directed_triangle() {
        let graph = create_graph(
            true,
            &["A", "B", "C"],
            &[("A", "B"), ("B", "C"), ("C", "A")],
        );

        let cycle = Cycle::on(&graph).run().unwrap();

        assert_eq!(cycle.vertices(), &["A", "B", "C"]);
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn directed_acyclic() {
        let graph = create_graph(
            true,
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn directed_cycle_not_reachable_from_first_vertex() {
        let graph = create_graph(true, &["x", "a", "b"], &[("a", "b"), ("b", "a")]);

        let cycle = Cycle::on(&graph).run().unwrap();

        assert_eq!(cycle.vertices(), &["a", "b"]);
    }

    #[test]
    fn directed_cross_edge_is_not_cycle() {
        let graph = create_graph(true, &["a", "b", "c"], &[("a", "b"), ("c", "b")]);

        assert!(!is_cyclic(&graph));
        assert!(!is_cyclic_undirected(&graph));
    }

    #[test]
    fn directed_as_undirected() {
        let graph = create_graph(
            true,
            &["a", "b", "c"],
            &[("a", "b"), ("c", "b"), ("a", "c")],
        );

        assert!(!is_cyclic(&graph));
        assert!(is_cyclic_undirected(&graph));
    }

    #[test]
    fn undirected_path() {
        let graph = create_graph(false, &["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn undirected_triangle() {
        let graph = create_graph(
            false,
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        );

        let cycle = Cycle::on(&graph).run().unwrap();

        assert_eq!(cycle.vertices(), &["a", "b", "c"]);
    }

    #[test]
    fn self_loop() {
        let graph = create_graph(false, &["a", "b"], &[("a", "b"), ("b", "b")]);

        let cycle = Cycle::on(&graph).run().unwrap();

        assert_eq!(cycle.vertices(), &["b"]);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_undirected_forest_is_acyclic(graph in graph_undirected(64)) {
            // A forest has exactly `vertices - components` edges.
            let components = ConnectedComponents::on(&*graph).run().len();
            let is_forest = graph.edge_count() + components == graph.vertex_count();

            prop_assert_eq!(is_cyclic(&*graph), !is_forest);
        }
    }
}
