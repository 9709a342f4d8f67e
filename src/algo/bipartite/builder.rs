use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{bfs::bfs, Bipartite};

/// Builder for [`Bipartite`].
pub struct BipartiteBuilder<'a, G> {
    graph: &'a G,
}

impl<Id> Bipartite<Id> {
    pub fn on<G>(graph: &G) -> BipartiteBuilder<'_, G>
    where
        G: GraphBase<VertexId = Id>,
    {
        BipartiteBuilder { graph }
    }
}

impl<'a, G> BipartiteBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn run(self) -> Bipartite<G::VertexId>
    where
        G: Neighbors + VertexSet,
    {
        Bipartite {
            outcome: bfs(self.graph),
        }
    }
}
