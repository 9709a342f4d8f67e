//! Check whether a graph is [bipartite].
//!
//! Every component is two-colored separately, starting from its first vertex
//! in insertion order. The direction of edges is ignored.
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::Bipartite, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend_with_vertices([1, 2, 3, 4]).unwrap();
//! graph.extend_with_edges([(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
//!
//! let bipartite = Bipartite::on(&*graph).run();
//! assert_eq!(bipartite.partition(), Some((&[1, 3][..], &[2, 4][..])));
//!
//! graph.add_edge(&1, &3).unwrap();
//!
//! let bipartite = Bipartite::on(&*graph).run();
//! assert!(!bipartite.is());
//! ```

use crate::core::{Neighbors, VertexSet};

mod bfs;
mod builder;

pub use builder::BipartiteBuilder;

/// Result of a bipartiteness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartite<Id> {
    outcome: Result<(Vec<Id>, Vec<Id>), (Id, Id)>,
}

impl<Id> Bipartite<Id> {
    /// Returns `true` if the graph is bipartite.
    pub fn is(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the two color classes if the graph is bipartite. The first class
    /// contains the first vertex of every component.
    pub fn partition(&self) -> Option<(&[Id], &[Id])> {
        self.outcome
            .as_ref()
            .ok()
            .map(|(left, right)| (left.as_slice(), right.as_slice()))
    }

    /// Returns an edge whose endpoints received the same color if the graph is
    /// not bipartite.
    pub fn conflict(&self) -> Option<(&Id, &Id)> {
        self.outcome.as_ref().err().map(|(u, v)| (u, v))
    }
}

/// Returns `true` if the vertices can be two-colored such that no edge
/// connects vertices of the same color.
pub fn is_bipartite<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Bipartite::on(graph).run().is()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::ShortestPaths, infra::proptest::graph_undirected, storage::AdjList,
    };

    use super::*;

    fn create_graph(directed: bool, n: usize, edges: &[(usize, usize)]) -> AdjList<usize, ()> {
        let mut graph = AdjList::new(directed);

        for v in 0..n {
            graph.add_vertex(v).unwrap();
        }

        for (u, v) in edges {
            graph.add_edge(u, v, ()).unwrap();
        }

        graph
    }

    #[test]
    fn even_cycle() {
        let graph = create_graph(false, 4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);

        let bipartite = Bipartite::on(&graph).run();

        assert_eq!(bipartite.partition(), Some((&[0, 2][..], &[1, 3][..])));
        assert_eq!(bipartite.conflict(), None);
    }

    #[test]
    fn odd_cycle() {
        let graph = create_graph(false, 3, &[(0, 1), (1, 2), (2, 0)]);

        let bipartite = Bipartite::on(&graph).run();

        assert!(!bipartite.is());
        assert_eq!(bipartite.conflict(), Some((&1, &2)));
    }

    #[test]
    fn conflict_in_second_component() {
        let graph = create_graph(false, 5, &[(0, 1), (2, 3), (3, 4), (4, 2)]);

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn disconnected_bipartite() {
        let graph = create_graph(false, 5, &[(0, 1), (3, 4)]);

        let bipartite = Bipartite::on(&graph).run();

        assert_eq!(bipartite.partition(), Some((&[0, 2, 3][..], &[1, 4][..])));
    }

    #[test]
    fn directed_ignores_direction() {
        // 0 -> 1 <- 2 -> 0 is an odd cycle when direction is ignored.
        let graph = create_graph(true, 3, &[(0, 1), (2, 1), (2, 0)]);

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn self_loop() {
        let graph = create_graph(false, 2, &[(0, 1), (1, 1)]);

        let bipartite = Bipartite::on(&graph).run();

        assert_eq!(bipartite.conflict(), Some((&1, &1)));
    }

    #[test]
    fn empty() {
        let graph = create_graph(false, 0, &[]);

        assert!(is_bipartite(&graph));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_partition_is_valid(graph in graph_undirected(64)) {
            let bipartite = Bipartite::on(&*graph).run();

            if let Some((left, _)) = bipartite.partition() {
                for (u, v, _) in graph.edges() {
                    prop_assert_ne!(left.contains(u), left.contains(v));
                }
            } else {
                let (u, v) = bipartite.conflict().unwrap();

                // Components are rooted at their first vertex in insertion
                // order. Endpoints of an edge at the same depth parity close
                // an odd cycle through the root.
                let hops = graph.vertex_ids().find_map(|root| {
                    let paths = ShortestPaths::on(&*graph).bfs().run(*root).ok()?;
                    Some((*paths.dist(u)?, *paths.dist(v)?))
                });

                prop_assert!(hops.is_some());
                let (u_hops, v_hops) = hops.unwrap();
                prop_assert_eq!(u_hops % 2, v_hops % 2);
            }
        }
    }
}
