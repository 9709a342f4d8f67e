//! Find [single source shortest paths] and their distances in a graph.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! Unweighted graphs are searched by breadth-first search which gives the
//! number of hops. Weighted graphs use Dijkstra's algorithm and require
//! non-negative weights.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ShortestPaths, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new_undirected();
//!
//! graph
//!     .extend_with_vertices(["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"])
//!     .unwrap();
//! graph
//!     .extend_with_edges([
//!         ("Prague", "Bratislava", 328u32),
//!         ("Prague", "Nuremberg", 297),
//!         ("Prague", "Vienna", 293),
//!         ("Bratislava", "Vienna", 79),
//!         ("Nuremberg", "Munich", 170),
//!         ("Vienna", "Munich", 402),
//!         ("Vienna", "Florence", 863),
//!         ("Munich", "Florence", 646),
//!         ("Florence", "Rome", 278),
//!     ])
//!     .unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal("Prague").run("Rome").unwrap();
//!
//! assert_eq!(shortest_paths.dist(&"Prague"), Some(&1391));
//! assert_eq!(
//!     shortest_paths.path_to(&"Prague"),
//!     Some(vec!["Rome", "Florence", "Munich", "Nuremberg", "Prague"])
//! );
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::GraphBase;

mod bfs;
mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<W, G: GraphBase> {
    source: G::VertexId,
    // Hash maps because the search may terminate early when the goal is
    // reached, having seen only a small part of the graph.
    dist: FxHashMap<G::VertexId, W>,
    pred: FxHashMap<G::VertexId, G::VertexId>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &G::VertexId {
        &self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// The distance is not known if the vertex is not reachable from the
    /// source, or if the [goal](ShortestPathsBuilder::goal) was reached before
    /// visiting the vertex.
    pub fn dist(&self, to: &G::VertexId) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns an iterator over vertices on the path from the given vertex to
    /// the source vertex, in this order, excluding the given vertex itself.
    ///
    /// The iterator is empty if the path is not known.
    pub fn reconstruct(&self, to: G::VertexId) -> PathReconstruction<'_, G> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the full path from the source vertex to the given vertex, both
    /// endpoints included, or `None` if the path is not known.
    pub fn path_to(&self, to: &G::VertexId) -> Option<Vec<G::VertexId>> {
        if !self.dist.contains_key(to) {
            return None;
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to.clone()));
        path.reverse();
        Some(path)
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<Id> {
    /// The source or the goal vertex is not in the graph.
    #[error("vertex {0:?} not found")]
    VertexNotFound(Id),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

mod algo {
    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct Dijkstra;

    #[derive(Debug)]
    pub struct Bfs;
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, G: GraphBase> {
    curr: G::VertexId,
    pred: &'a FxHashMap<G::VertexId, G::VertexId>,
}

impl<'a, G: GraphBase> Iterator for PathReconstruction<'a, G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use petgraph::{algo::dijkstra as petgraph_dijkstra, graph::UnGraph};
    use proptest::prelude::*;

    use crate::{
        infra::proptest::{graph_undirected, weighted_graph_undirected},
        storage::AdjList,
    };

    use super::*;

    fn create_basic_graph() -> AdjList<usize, i32> {
        let mut graph = AdjList::new(false);

        for v in 0..6 {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&0, &1, 3).unwrap();
        graph.add_edge(&0, &2, 2).unwrap();
        graph.add_edge(&1, &2, 2).unwrap();
        graph.add_edge(&1, &3, 2).unwrap();
        graph.add_edge(&1, &4, 7).unwrap();
        graph.add_edge(&2, &3, 5).unwrap();
        graph.add_edge(&3, &4, 3).unwrap();
        graph.add_edge(&4, &5, 10).unwrap();

        graph
    }

    fn create_graph_with_isolated_vertex() -> (AdjList<usize, i32>, usize) {
        let mut graph = AdjList::new(false);

        for v in 0..4 {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&0, &1, 3).unwrap();
        graph.add_edge(&0, &2, 2).unwrap();
        graph.add_edge(&1, &2, 2).unwrap();

        (graph, 3)
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).dijkstra().run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(&8));
        assert_eq!(
            shortest_paths.reconstruct(4).collect::<Vec<_>>(),
            vec![3, 1, 0]
        );
        assert_eq!(shortest_paths.path_to(&4), Some(vec![0, 1, 3, 4]));

        assert_eq!(shortest_paths.dist(&2), Some(&2));
        assert_eq!(shortest_paths.path_to(&0), Some(vec![0]));
    }

    #[test]
    fn dijkstra_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(4).run(0).unwrap();

        assert!(shortest_paths.dist(&5).is_none());
        assert_eq!(shortest_paths.path_to(&5), None);
    }

    #[test]
    fn dijkstra_negative_edge() {
        let mut graph = create_basic_graph();
        graph.add_vertex(6).unwrap();
        graph.add_edge(&2, &6, -1).unwrap();

        let shortest_paths = ShortestPaths::on(&graph).goal(4).dijkstra().run(0);

        assert_matches!(shortest_paths, Err(Error::NegativeWeight));
    }

    #[test]
    fn dijkstra_goal_not_reached() {
        let (graph, u) = create_graph_with_isolated_vertex();

        let shortest_paths = ShortestPaths::on(&graph).goal(u).dijkstra().run(0);

        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn dijkstra_source_not_found() {
        let graph = create_basic_graph();

        let shortest_paths = ShortestPaths::on(&graph).run(42);

        assert_matches!(shortest_paths, Err(Error::VertexNotFound(42)));
    }

    #[test]
    fn dijkstra_goal_same_as_source() {
        let mut graph = AdjList::new(false);
        graph.add_vertex('a').unwrap();
        graph.add_vertex('b').unwrap();
        graph.add_edge(&'a', &'b', -1i32).unwrap();

        // The search finishes before relaxing the negative edge.
        let shortest_paths = ShortestPaths::on(&graph).goal('b').run('b').unwrap();

        assert_eq!(shortest_paths.dist(&'b'), Some(&0));
    }

    #[test]
    fn dijkstra_float_weights() {
        let mut graph = AdjList::new(true);

        for v in ["s", "a", "t"] {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&"s", &"t", 2.5f64).unwrap();
        graph.add_edge(&"s", &"a", 0.5).unwrap();
        graph.add_edge(&"a", &"t", 1.25).unwrap();

        let shortest_paths = ShortestPaths::on(&graph).goal("t").run("s").unwrap();

        assert_eq!(shortest_paths.dist(&"t"), Some(&1.75));
    }

    #[test]
    fn bfs_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).bfs().run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(&2));
        assert_eq!(shortest_paths.reconstruct(4).collect::<Vec<_>>(), vec![1, 0]);

        assert_eq!(shortest_paths.dist(&2), Some(&1));
        assert_eq!(shortest_paths.dist(&5), Some(&3));
    }

    #[test]
    fn bfs_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(4).bfs().run(0).unwrap();

        assert!(shortest_paths.dist(&5).is_none());
    }

    #[test]
    fn bfs_goal_not_reached() {
        let (graph, u) = create_graph_with_isolated_vertex();

        let shortest_paths = ShortestPaths::on(&graph).goal(u).bfs().run(0);

        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn bfs_directed_respects_direction() {
        let mut graph = AdjList::new(true);

        for v in 0..3 {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&0, &1, ()).unwrap();
        graph.add_edge(&2, &1, ()).unwrap();

        let shortest_paths = ShortestPaths::on(&graph).bfs().run(0).unwrap();

        assert_eq!(shortest_paths.dist(&1), Some(&1));
        assert_eq!(shortest_paths.dist(&2), None);
    }

    #[test]
    fn dijkstra_agrees_with_petgraph() {
        let graph = create_basic_graph();

        let mut oracle = UnGraph::<(), i32>::new_undirected();
        let nodes = (0..6).map(|_| oracle.add_node(())).collect::<Vec<_>>();
        for (u, v, w) in graph.edges() {
            oracle.add_edge(nodes[*u], nodes[*v], *w);
        }

        let expected = petgraph_dijkstra(&oracle, nodes[0], None, |e| *e.weight());
        let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();

        for v in 0..6 {
            assert_eq!(shortest_paths.dist(&v), expected.get(&nodes[v]));
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_connected_all_reachable(graph in weighted_graph_undirected(64, 0u32..1000).connected(), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let source = source % n;
            let paths = ShortestPaths::on(&*graph).dijkstra().run(source).unwrap();

            for v in graph.vertex_ids() {
                prop_assert_ne!(paths.dist(v), None);

                let u = paths.reconstruct(*v).last();
                if *v != source {
                    prop_assert_eq!(u, Some(source));
                } else {
                    prop_assert_eq!(u, None);
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_dijkstra_agree(graph in graph_undirected(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let source = source % n;

            let mut unit = AdjList::new(false);
            for v in graph.vertex_ids() {
                unit.add_vertex(*v).unwrap();
            }
            for (u, v, _) in graph.edges() {
                unit.add_edge(u, v, 1usize).unwrap();
            }

            let paths_bfs = ShortestPaths::on(&*graph).bfs().run(source).unwrap();
            let paths_d = ShortestPaths::on(&unit).dijkstra().run(source).unwrap();

            for v in graph.vertex_ids() {
                prop_assert_eq!(paths_bfs.dist(v), paths_d.dist(v));
            }
        }
    }
}
