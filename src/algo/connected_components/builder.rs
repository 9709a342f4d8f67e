use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{bfs::bfs, ConnectedComponents};

/// Builder for [`ConnectedComponents`].
pub struct ConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

impl<Id> ConnectedComponents<Id> {
    pub fn on<G>(graph: &G) -> ConnectedComponentsBuilder<'_, G>
    where
        G: GraphBase<VertexId = Id>,
    {
        ConnectedComponentsBuilder { graph }
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn run(self) -> ConnectedComponents<G::VertexId>
    where
        G: Neighbors + VertexSet,
    {
        ConnectedComponents {
            components: bfs(self.graph),
        }
    }
}
