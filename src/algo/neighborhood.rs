//! Find vertices at an exact hop distance from a vertex.

use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{error::VertexNotFound, Neighbors, VertexSet};

/// Returns all vertices whose shortest hop distance from `start` is exactly
/// `n`, in breadth-first discovery order.
///
/// For `n == 0` the result is `start` alone. Vertices not reachable from
/// `start` are never included.
///
/// # Examples
///
/// ```
/// use adjgraph::{algo::vertices_at_distance, Graph};
///
/// let mut graph = Graph::new_undirected();
///
/// graph.extend_with_vertices([1, 2, 3, 4, 5]).unwrap();
/// graph.extend_with_edges([(1, 2), (2, 3), (1, 3), (3, 4)]).unwrap();
///
/// assert_eq!(vertices_at_distance(&*graph, &1, 1), Ok(vec![2, 3]));
/// assert_eq!(vertices_at_distance(&*graph, &1, 2), Ok(vec![4]));
/// assert_eq!(vertices_at_distance(&*graph, &1, 3), Ok(vec![]));
/// ```
pub fn vertices_at_distance<G>(
    graph: &G,
    start: &G::VertexId,
    n: usize,
) -> Result<Vec<G::VertexId>, VertexNotFound<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    if !graph.contains_id(start) {
        return Err(VertexNotFound(start.clone()));
    }

    let mut visited: FxHashSet<G::VertexId> =
        HashSet::with_capacity_and_hasher(graph.vertex_count(), BuildHasherDefault::default());
    let mut frontier = VecDeque::new();

    visited.insert(start.clone());
    frontier.push_back(start.clone());

    // Expand level by level, the frontier after `depth` rounds holds exactly
    // the vertices at distance `depth`.
    for depth in 0..n {
        let mut next_frontier = VecDeque::new();

        for vertex in frontier {
            for next in graph.neighbors(&vertex) {
                if visited.insert(next.clone()) {
                    next_frontier.push_back(next.clone());
                }
            }
        }

        trace!("{} vertices at distance {}", next_frontier.len(), depth + 1);

        if next_frontier.is_empty() {
            return Ok(Vec::new());
        }

        frontier = next_frontier;
    }

    Ok(frontier.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::storage::AdjList;

    use super::*;

    fn create_path_graph(directed: bool) -> AdjList<char, ()> {
        let mut graph = AdjList::new(directed);

        for v in ['a', 'b', 'c', 'd', 'e'] {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&'a', &'b', ()).unwrap();
        graph.add_edge(&'b', &'c', ()).unwrap();
        graph.add_edge(&'c', &'d', ()).unwrap();
        graph.add_edge(&'a', &'c', ()).unwrap();

        graph
    }

    #[test]
    fn zero_is_start() {
        let graph = create_path_graph(false);

        assert_eq!(vertices_at_distance(&graph, &'c', 0), Ok(vec!['c']));
    }

    #[test]
    fn exact_distance_only() {
        let graph = create_path_graph(false);

        assert_eq!(vertices_at_distance(&graph, &'a', 1), Ok(vec!['b', 'c']));
        assert_eq!(vertices_at_distance(&graph, &'a', 2), Ok(vec!['d']));
        assert_eq!(vertices_at_distance(&graph, &'b', 2), Ok(vec!['d']));
    }

    #[test]
    fn unreachable_excluded() {
        let graph = create_path_graph(false);

        // 'e' is isolated.
        assert_eq!(vertices_at_distance(&graph, &'a', 3), Ok(vec![]));
        assert_eq!(vertices_at_distance(&graph, &'e', 1), Ok(vec![]));
    }

    #[test]
    fn directed_follows_arcs() {
        let graph = create_path_graph(true);

        assert_eq!(vertices_at_distance(&graph, &'d', 1), Ok(vec![]));
        assert_eq!(vertices_at_distance(&graph, &'b', 1), Ok(vec!['c']));
    }

    #[test]
    fn missing_start() {
        let graph = create_path_graph(false);

        assert_matches!(
            vertices_at_distance(&graph, &'x', 1),
            Err(VertexNotFound('x'))
        );
    }
}
