use crate::{
    algo::{shortest_paths, ShortestPaths},
    core::{
        error::{AddEdgeError, AddVertexError, VertexNotFound},
        id::IdType,
    },
    storage::AdjList,
};

use super::delegate_storage;

/// Graph with plain, unweighted edges.
///
/// # Examples
///
/// ```
/// use adjgraph::Graph;
///
/// let mut graph = Graph::new_undirected();
///
/// graph.extend_with_vertices(["X", "Y", "Z"]).unwrap();
/// graph.add_edge(&"X", &"Y").unwrap();
///
/// assert_eq!(graph.find_shortest_path(&"X", &"Y"), Ok(Some(vec!["X", "Y"])));
/// assert_eq!(graph.find_shortest_path(&"X", &"Z"), Ok(None));
/// assert_eq!(graph.get_connected_components(), vec![vec!["X", "Y"], vec!["Z"]]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<Id> {
    storage: AdjList<Id, ()>,
}

delegate_storage!([Id: IdType] Graph<Id>, Id, ());

impl<Id: IdType> Graph<Id> {
    pub fn new(directed: bool) -> Self {
        Self {
            storage: AdjList::new(directed),
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn with_capacity(directed: bool, vertex_count: usize) -> Self {
        Self {
            storage: AdjList::with_capacity(directed, vertex_count),
        }
    }

    /// Adds a new vertex. Fails if the id is already present.
    pub fn add_vertex(&mut self, id: Id) -> Result<(), AddVertexError<Id>> {
        self.storage.add_vertex(id)
    }

    /// Adds an edge between two existing vertices. Returns `false` if the edge
    /// already existed.
    pub fn add_edge(&mut self, src: &Id, dst: &Id) -> Result<bool, AddEdgeError<Id>> {
        self.storage.add_edge(src, dst, ())
    }

    /// Adds all vertices from the iterator, stopping at the first duplicate.
    pub fn extend_with_vertices<I>(&mut self, iter: I) -> Result<(), AddVertexError<Id>>
    where
        I: IntoIterator<Item = Id>,
    {
        for id in iter {
            self.add_vertex(id)?;
        }

        Ok(())
    }

    /// Adds all edges from the iterator, stopping at the first one with a
    /// missing endpoint.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<Id>>
    where
        I: IntoIterator<Item = (Id, Id)>,
    {
        for (src, dst) in iter {
            self.add_edge(&src, &dst)?;
        }

        Ok(())
    }

    /// Returns a path from `start` to `target` with the fewest edges, both
    /// endpoints included. Returns `Ok(None)` if `target` is not reachable.
    pub fn find_shortest_path(
        &self,
        start: &Id,
        target: &Id,
    ) -> Result<Option<Vec<Id>>, VertexNotFound<Id>> {
        let result = ShortestPaths::on(self)
            .goal(target.clone())
            .bfs()
            .run(start.clone());

        match result {
            Ok(paths) => Ok(paths.path_to(target)),
            Err(shortest_paths::Error::VertexNotFound(id)) => Err(VertexNotFound(id)),
            Err(_) => Ok(None),
        }
    }

    pub fn into_storage(self) -> AdjList<Id, ()> {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        algo::toposort,
        core::{AddEdgeErrorKind, AddVertexErrorKind},
    };

    use super::*;

    fn create_basic_graph() -> Graph<&'static str> {
        let mut graph = Graph::new_undirected();

        graph
            .extend_with_vertices(["a", "b", "c", "d", "e", "f"])
            .unwrap();
        graph
            .extend_with_edges([
                ("a", "b"),
                ("a", "c"),
                ("b", "d"),
                ("c", "d"),
                ("d", "e"),
            ])
            .unwrap();

        graph
    }

    #[test]
    fn add_vertex_duplicate() {
        let mut graph = create_basic_graph();

        let error = graph.add_vertex("a").unwrap_err();

        assert_eq!(error.kind, AddVertexErrorKind::Duplicate);
        // Adjacency of the existing vertex is kept.
        assert_eq!(graph.vertex(&"a").unwrap().degree(), 2);
    }

    #[test]
    fn add_edge_missing() {
        let mut graph = create_basic_graph();

        let error = graph.add_edge(&"a", &"z").unwrap_err();

        assert_eq!(error.kind, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(error.missing(), &"z");
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn add_edge_twice() {
        let mut graph = create_basic_graph();

        assert_eq!(graph.add_edge(&"b", &"a"), Ok(false));
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn traversals() {
        let graph = create_basic_graph();

        assert_eq!(graph.bfs_traversal(&"a"), Ok(vec!["a", "b", "c", "d", "e"]));
        assert_eq!(graph.dfs_traversal(&"a"), Ok(vec!["a", "b", "d", "c", "e"]));
        assert_matches!(graph.bfs_traversal(&"z"), Err(VertexNotFound("z")));
        assert_matches!(graph.dfs_traversal(&"z"), Err(VertexNotFound("z")));
    }

    #[test]
    fn shortest_path() {
        let graph = create_basic_graph();

        assert_eq!(
            graph.find_shortest_path(&"a", &"e"),
            Ok(Some(vec!["a", "b", "d", "e"]))
        );
        assert_eq!(graph.find_shortest_path(&"e", &"e"), Ok(Some(vec!["e"])));
        assert_eq!(graph.find_shortest_path(&"a", &"f"), Ok(None));
        assert_matches!(
            graph.find_shortest_path(&"a", &"z"),
            Err(VertexNotFound("z"))
        );
    }

    #[test]
    fn isolated_pair() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(["X", "Y"]).unwrap();

        assert_eq!(graph.get_connected_components(), vec![vec!["X"], vec!["Y"]]);
        assert_eq!(graph.find_shortest_path(&"X", &"Y"), Ok(None));
    }

    #[test]
    fn n_away() {
        let graph = create_basic_graph();

        assert_eq!(graph.find_vertices_n_away(&"a", 0), Ok(vec!["a"]));
        assert_eq!(graph.find_vertices_n_away(&"a", 2), Ok(vec!["d"]));
        assert_eq!(graph.find_vertices_n_away(&"a", 3), Ok(vec!["e"]));
        assert_eq!(graph.find_vertices_n_away(&"a", 4), Ok(vec![]));
    }

    #[test]
    fn dfs_path() {
        let graph = create_basic_graph();

        assert_eq!(
            graph.find_path_dfs_iter(&"a", &"e"),
            Ok(Some(vec!["a", "b", "d", "e"]))
        );
        assert_eq!(graph.find_path_dfs_iter(&"a", &"f"), Ok(None));
    }

    #[test]
    fn bipartite_and_cycle() {
        let mut graph = create_basic_graph();

        assert!(graph.is_bipartite());
        assert!(graph.contains_cycle());

        graph.add_edge(&"b", &"c").unwrap();

        assert!(!graph.is_bipartite());
    }

    #[test]
    fn directed_cycle() {
        let mut graph = Graph::new_directed();

        graph.extend_with_vertices(['A', 'B', 'C']).unwrap();
        graph
            .extend_with_edges([('A', 'B'), ('B', 'C'), ('C', 'A')])
            .unwrap();

        assert!(graph.contains_cycle());
        assert_matches!(graph.topological_sort(), Err(toposort::Error::Cycle(_)));
    }

    #[test]
    fn cycle_in_second_component() {
        let mut graph = Graph::new_directed();

        graph.extend_with_vertices([0, 1, 2, 3]).unwrap();
        graph.extend_with_edges([(0, 1), (2, 3), (3, 2)]).unwrap();

        assert!(graph.contains_cycle());
    }

    #[test]
    fn topological_sort() {
        let mut graph = Graph::new_directed();

        graph.extend_with_vertices(["shirt", "tie", "jacket", "belt", "pants"]).unwrap();
        graph
            .extend_with_edges([
                ("shirt", "tie"),
                ("tie", "jacket"),
                ("shirt", "belt"),
                ("belt", "jacket"),
                ("pants", "belt"),
            ])
            .unwrap();

        assert!(!graph.contains_cycle());
        assert_eq!(
            graph.topological_sort(),
            Ok(vec!["pants", "shirt", "belt", "tie", "jacket"])
        );
    }

    #[test]
    fn display() {
        let mut graph = Graph::new_directed();

        graph.extend_with_vertices(["a", "b"]).unwrap();
        graph.add_edge(&"a", &"b").unwrap();

        assert_eq!(
            graph.to_string(),
            r#"Graph with vertices: ["a" adjacent to ["b"], "b" adjacent to []]"#
        );
    }
}
