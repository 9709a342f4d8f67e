use crate::{
    algo::{
        find_path, is_bipartite, is_cyclic, toposort, vertices_at_distance, ConnectedComponents,
        TopoSort,
    },
    core::{error::VertexNotFound, id::IdType},
    storage::AdjList,
    visit::{Bfs, Dfs, Visitor},
};

impl<Id: IdType, E> AdjList<Id, E> {
    /// Returns the vertices reachable from `start` in breadth-first order.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjgraph::Graph;
    ///
    /// let mut graph = Graph::new_undirected();
    ///
    /// graph.extend_with_vertices([1, 2, 3, 4]).unwrap();
    /// graph.extend_with_edges([(1, 2), (2, 4), (1, 3)]).unwrap();
    ///
    /// assert_eq!(graph.bfs_traversal(&1), Ok(vec![1, 2, 3, 4]));
    /// ```
    pub fn bfs_traversal(&self, start: &Id) -> Result<Vec<Id>, VertexNotFound<Id>> {
        self.check_contains(start)?;

        let mut bfs = Bfs::new(self);
        let order = bfs.start(start.clone()).iter(self).collect();

        Ok(order)
    }

    /// Returns the vertices reachable from `start` in depth-first preorder.
    ///
    /// The order is the same as of a recursive traversal that descends into
    /// neighbors in their insertion order.
    pub fn dfs_traversal(&self, start: &Id) -> Result<Vec<Id>, VertexNotFound<Id>> {
        self.check_contains(start)?;

        let mut dfs = Dfs::new(self);
        let order = dfs.start(start.clone()).iter(self).collect();

        Ok(order)
    }

    /// See [`vertices_at_distance`].
    pub fn find_vertices_n_away(&self, start: &Id, n: usize) -> Result<Vec<Id>, VertexNotFound<Id>> {
        vertices_at_distance(self, start, n)
    }

    /// See [`find_path`].
    pub fn find_path_dfs_iter(
        &self,
        start: &Id,
        target: &Id,
    ) -> Result<Option<Vec<Id>>, VertexNotFound<Id>> {
        find_path(self, start, target)
    }

    /// Returns `true` if the vertices can be colored by two colors so that no
    /// edge connects vertices of the same color. Every component is checked.
    pub fn is_bipartite(&self) -> bool {
        is_bipartite(self)
    }

    /// Returns the vertex sets of the connected components. Directed graphs
    /// are split to weakly connected components.
    ///
    /// Components are ordered by their first vertex in the insertion order.
    pub fn get_connected_components(&self) -> Vec<Vec<Id>> {
        ConnectedComponents::on(self).run().into_inner()
    }

    /// Returns `true` if there is a cycle anywhere in the graph.
    ///
    /// In undirected graphs, going back along the same edge does not count as
    /// a cycle, while a self loop does.
    pub fn contains_cycle(&self) -> bool {
        is_cyclic(self)
    }

    /// See [`TopoSort`].
    pub fn topological_sort(&self) -> Result<Vec<Id>, toposort::Error<Id>> {
        TopoSort::on(self).run()
    }

    fn check_contains(&self, id: &Id) -> Result<(), VertexNotFound<Id>> {
        if self.contains_id(id) {
            Ok(())
        } else {
            Err(VertexNotFound(id.clone()))
        }
    }
}
