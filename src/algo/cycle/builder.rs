use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    as_undirected: bool,
}

impl<Id> Cycle<Id> {
    pub fn on<G>(graph: &G) -> CycleBuilder<'_, G>
    where
        G: GraphBase<VertexId = Id>,
    {
        CycleBuilder {
            graph,
            as_undirected: false,
        }
    }
}

impl<'a, G> CycleBuilder<'a, G>
where
    G: GraphBase,
{
    /// Instructs the algorithm to ignore the direction of the edges.
    #[allow(clippy::wrong_self_convention)]
    pub fn as_undirected(self) -> Self {
        Self {
            as_undirected: true,
            ..self
        }
    }

    pub fn run(self) -> Option<Cycle<G::VertexId>>
    where
        G: Neighbors + VertexSet,
    {
        dfs_find(self.graph, self.as_undirected)
    }
}
