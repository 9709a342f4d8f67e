use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{dfs::dfs, Error, TopoSort};

/// Builder for [`TopoSort`].
pub struct TopoSortBuilder<'a, G> {
    graph: &'a G,
}

impl TopoSort {
    pub fn on<G>(graph: &G) -> TopoSortBuilder<'_, G>
    where
        G: GraphBase,
    {
        TopoSortBuilder { graph }
    }
}

impl<'a, G> TopoSortBuilder<'a, G>
where
    G: GraphBase,
{
    /// Returns the topologically sorted vertices, or the cycle that prevents
    /// the sorting.
    pub fn run(self) -> Result<Vec<G::VertexId>, Error<G::VertexId>>
    where
        G: Neighbors + VertexSet,
    {
        dfs(self.graph)
    }
}
