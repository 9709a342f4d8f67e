//! Find any path between two vertices by depth-first search.

use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::core::{error::VertexNotFound, Neighbors, VertexSet};

/// Returns a path from `start` to `target`, both included, found by iterative
/// depth-first search. The path is not necessarily the shortest one.
///
/// Returns `Ok(None)` if `target` is not reachable from `start`.
///
/// # Examples
///
/// ```
/// use adjgraph::{algo::find_path, Graph};
///
/// let mut graph = Graph::new_directed();
///
/// graph.extend_with_vertices(["a", "b", "c", "d"]).unwrap();
/// graph.extend_with_edges([("a", "b"), ("b", "c"), ("a", "c")]).unwrap();
///
/// assert_eq!(find_path(&*graph, &"a", &"c"), Ok(Some(vec!["a", "b", "c"])));
/// assert_eq!(find_path(&*graph, &"a", &"d"), Ok(None));
/// ```
pub fn find_path<G>(
    graph: &G,
    start: &G::VertexId,
    target: &G::VertexId,
) -> Result<Option<Vec<G::VertexId>>, VertexNotFound<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    for id in [start, target] {
        if !graph.contains_id(id) {
            return Err(VertexNotFound(id.clone()));
        }
    }

    // Predecessor on the search tree, recorded when a vertex is popped for the
    // first time. Doubles as the visited set.
    let mut pred: FxHashMap<G::VertexId, Option<G::VertexId>> =
        HashMap::with_capacity_and_hasher(graph.vertex_count(), Default::default());
    let mut stack = vec![(start.clone(), None)];

    while let Some((vertex, parent)) = stack.pop() {
        if pred.contains_key(&vertex) {
            continue;
        }

        pred.insert(vertex.clone(), parent);

        if &vertex == target {
            let mut path = vec![vertex];

            while let Some(Some(prev)) = path.last().and_then(|last| pred.get(last)) {
                path.push(prev.clone());
            }

            path.reverse();
            return Ok(Some(path));
        }

        let unvisited = graph
            .neighbors(&vertex)
            .filter(|next| !pred.contains_key(*next))
            .cloned()
            .collect::<Vec<_>>();

        stack.extend(
            unvisited
                .into_iter()
                .rev()
                .map(|next| (next, Some(vertex.clone()))),
        );
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{infra::proptest::graph_directed, storage::AdjList};

    use super::*;

    fn create_basic_graph() -> AdjList<u32, ()> {
        let mut graph = AdjList::new(true);

        for v in 0..6 {
            graph.add_vertex(v).unwrap();
        }

        graph.add_edge(&0, &1, ()).unwrap();
        graph.add_edge(&0, &2, ()).unwrap();
        graph.add_edge(&1, &3, ()).unwrap();
        graph.add_edge(&3, &4, ()).unwrap();
        graph.add_edge(&2, &4, ()).unwrap();
        graph.add_edge(&5, &0, ()).unwrap();

        graph
    }

    #[test]
    fn follows_depth_first_order() {
        let graph = create_basic_graph();

        assert_eq!(find_path(&graph, &0, &4), Ok(Some(vec![0, 1, 3, 4])));
    }

    #[test]
    fn trivial_path() {
        let graph = create_basic_graph();

        assert_eq!(find_path(&graph, &2, &2), Ok(Some(vec![2])));
    }

    #[test]
    fn unreachable() {
        let graph = create_basic_graph();

        assert_eq!(find_path(&graph, &0, &5), Ok(None));
    }

    #[test]
    fn missing_vertex() {
        let graph = create_basic_graph();

        assert_matches!(find_path(&graph, &0, &9), Err(VertexNotFound(9)));
        assert_matches!(find_path(&graph, &9, &0), Err(VertexNotFound(9)));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_path_uses_edges(graph in graph_directed(64), start: usize, target: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let (start, target) = (start % n, target % n);

            if let Some(path) = find_path(&*graph, &start, &target).unwrap() {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&target));

                for pair in path.windows(2) {
                    prop_assert!(graph.vertex(&pair[0]).unwrap().contains_neighbor(&pair[1]));
                }
            }
        }
    }
}
