//! Find a [topologically sorted] collection of vertices on a [directed acyclic
//! graph] (DAG).
//!
//! The order is the reversed order in which a depth-first search over the
//! whole graph closes the vertices. Every adjacency entry is treated as an
//! arc, so an undirected graph with at least one edge is reported as cyclic.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::TopoSort, Graph};
//!
//! let mut dependency_tree = Graph::new_directed();
//!
//! dependency_tree
//!     .extend_with_vertices(["cargo", "cargo_credential", "serde", "serde_json", "time", "libc"])
//!     .unwrap();
//!
//! // Edge direction in "must be compiled before" relation.
//! dependency_tree
//!     .extend_with_edges([
//!         ("cargo_credential", "cargo"),
//!         ("serde", "cargo_credential"),
//!         ("serde_json", "cargo_credential"),
//!         ("serde", "serde_json"),
//!         ("time", "cargo_credential"),
//!         ("libc", "time"),
//!         ("serde", "time"),
//!     ])
//!     .unwrap();
//!
//! let order = TopoSort::on(&*dependency_tree).run().unwrap();
//!
//! assert_eq!(order, vec!["libc", "serde", "time", "serde_json", "cargo_credential", "cargo"]);
//! ```

use thiserror::Error;

use super::Cycle;

mod builder;
mod dfs;

pub use builder::TopoSortBuilder;

/// Topological sort of a graph.
///
/// See [module](self) documentation for more details and example.
pub struct TopoSort;

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<Id> {
    /// The graph contains a cycle.
    #[error("the graph contains a cycle")]
    Cycle(Cycle<Id>),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{infra::proptest::graph_directed, storage::AdjList};

    use super::*;

    fn create_basic_graph() -> AdjList<u32, ()> {
        let mut graph = AdjList::new(true);

        for v in 0..5 {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&0, &1, ()).unwrap();
        graph.add_edge(&1, &2, ()).unwrap();
        graph.add_edge(&0, &3, ()).unwrap();
        graph.add_edge(&3, &2, ()).unwrap();
        graph.add_edge(&4, &3, ()).unwrap();

        graph
    }

    fn assert_valid_order(graph: &AdjList<usize, ()>, order: &[usize]) {
        assert_eq!(order.len(), graph.vertex_count());

        let position = |v: &usize| order.iter().position(|u| u == v).unwrap();

        for (u, v, _) in graph.edges() {
            assert!(position(u) < position(v), "{u} -> {v} violates the order");
        }
    }

    #[test]
    fn basic() {
        let graph = create_basic_graph();

        let order = TopoSort::on(&graph).run().unwrap();

        assert_eq!(order, vec![4, 0, 3, 1, 2]);
    }

    #[test]
    fn cycle() {
        let mut graph = create_basic_graph();
        graph.add_edge(&2, &4, ()).unwrap();

        let error = TopoSort::on(&graph).run().unwrap_err();

        assert_matches!(error, Error::Cycle(ref cycle) if cycle.vertices() == [2, 4, 3]);
    }

    #[test]
    fn self_loop() {
        let mut graph = create_basic_graph();
        graph.add_edge(&1, &1, ()).unwrap();

        assert_matches!(TopoSort::on(&graph).run(), Err(Error::Cycle(_)));
    }

    #[test]
    fn undirected_edge_is_cycle() {
        let mut graph = AdjList::new(false);
        graph.add_vertex("a").unwrap();
        graph.add_vertex("b").unwrap();

        // Without edges the order is the reversed finishing order.
        assert_eq!(TopoSort::on(&graph).run(), Ok(vec!["b", "a"]));

        graph.add_edge(&"a", &"b", ()).unwrap();

        assert_matches!(TopoSort::on(&graph).run(), Err(Error::Cycle(_)));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dag_order_is_valid(graph in graph_directed(64).acyclic()) {
            let order = TopoSort::on(&*graph).run().unwrap();
            assert_valid_order(&graph, &order);
        }
    }
}
