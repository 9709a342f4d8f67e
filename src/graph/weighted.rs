use rustc_hash::FxHashMap;

use crate::{
    algo::{
        all_pairs, shortest_paths, spanning_tree, AllPairsShortestPaths, ShortestPaths,
        SpanningTree,
    },
    core::{
        error::{AddEdgeError, AddVertexError},
        id::IdType,
        weight::Weight,
        WeightedNeighbors,
    },
    storage::{adj_list::WeightedNeighborsIter, AdjList},
};

use super::delegate_storage;

/// Graph with a numeric weight on every edge.
///
/// # Examples
///
/// ```
/// use adjgraph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new_undirected();
///
/// graph.extend_with_vertices(["a", "b", "c"]).unwrap();
/// graph
///     .extend_with_edges([("a", "b", 2.5), ("b", "c", 1.0), ("a", "c", 4.0)])
///     .unwrap();
///
/// assert_eq!(graph.find_shortest_path(&"a", &"c"), Ok(Some(3.5)));
/// assert_eq!(graph.minimum_spanning_tree_prim(), Ok(3.5));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<Id, W> {
    storage: AdjList<Id, W>,
}

delegate_storage!([Id: IdType, W] WeightedGraph<Id, W>, Id, W);

impl<Id: IdType, W: Weight> WeightedNeighbors for WeightedGraph<Id, W> {
    type Weight = W;

    type WeightedNeighborsIter<'a> = WeightedNeighborsIter<'a, Id, W>
    where
        Self: 'a;

    fn neighbors_with_weights(&self, id: &Id) -> Self::WeightedNeighborsIter<'_> {
        self.storage.neighbors_with_weights(id)
    }
}

impl<Id: IdType, W: Weight> WeightedGraph<Id, W> {
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

    /// Adds a weighted edge between two existing vertices.
    ///
    /// If the edge already exists, its weight is kept and `false` is returned.
    pub fn add_edge(&mut self, src: &Id, dst: &Id, weight: W) -> Result<bool, AddEdgeError<Id>> {
        self.storage.add_edge(src, dst, weight)
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
        I: IntoIterator<Item = (Id, Id, W)>,
    {
        for (src, dst, weight) in iter {
            self.add_edge(&src, &dst, weight)?;
        }

        Ok(())
    }

    /// Returns the total weight of the lightest path from `start` to
    /// `target`, or `Ok(None)` if `target` is not reachable.
    ///
    /// Use [`dijkstra`](Self::dijkstra) to get the path itself.
    pub fn find_shortest_path(
        &self,
        start: &Id,
        target: &Id,
    ) -> Result<Option<W>, shortest_paths::Error<Id>> {
        let result = ShortestPaths::on(self)
            .goal(target.clone())
            .dijkstra()
            .run(start.clone());

        match result {
            Ok(paths) => Ok(paths.dist(target).cloned()),
            Err(shortest_paths::Error::GoalNotReached) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Returns the lightest paths from `start` to all reachable vertices.
    pub fn dijkstra(&self, start: &Id) -> Result<ShortestPaths<W, Self>, shortest_paths::Error<Id>> {
        ShortestPaths::on(self).dijkstra().run(start.clone())
    }

    /// Returns the edges of a minimum spanning tree found by Kruskal's
    /// algorithm, in the order they were selected.
    pub fn minimum_spanning_tree_kruskal(
        &self,
    ) -> Result<Vec<(Id, Id, W)>, spanning_tree::Error> {
        SpanningTree::on(self)
            .kruskal()
            .run()
            .map(SpanningTree::into_edges)
    }

    /// Returns the total weight of a minimum spanning tree found by Prim's
    /// algorithm.
    pub fn minimum_spanning_tree_prim(&self) -> Result<W, spanning_tree::Error> {
        SpanningTree::on(self).prim().run().map(SpanningTree::into_total)
    }

    /// Returns the lightest path weight between every pair of vertices.
    /// Unreachable pairs have the distance [`Weight::inf`].
    ///
    /// For integer weights this is the maximum value of the type, which is
    /// also a valid distance. Use [`AllPairsShortestPaths::dist`] to tell the
    /// two apart.
    pub fn floyd_warshall(&self) -> Result<FxHashMap<Id, FxHashMap<Id, W>>, all_pairs::Error> {
        AllPairsShortestPaths::on(self)
            .run()
            .map(|paths| paths.to_map())
    }

    pub fn into_storage(self) -> AdjList<Id, W> {
        self.storage
    }
}
