use crate::core::{VertexSet, WeightedNeighbors};

use super::{floyd_warshall::floyd_warshall, AllPairsShortestPaths, Error};

/// Builder for [`AllPairsShortestPaths`].
pub struct AllPairsShortestPathsBuilder<'a, G> {
    graph: &'a G,
}

impl<Id, W> AllPairsShortestPaths<Id, W> {
    pub fn on<G>(graph: &G) -> AllPairsShortestPathsBuilder<'_, G>
    where
        G: WeightedNeighbors<VertexId = Id, Weight = W>,
    {
        AllPairsShortestPathsBuilder { graph }
    }
}

impl<'a, G> AllPairsShortestPathsBuilder<'a, G>
where
    G: WeightedNeighbors + VertexSet,
{
    pub fn run(self) -> Result<AllPairsShortestPaths<G::VertexId, G::Weight>, Error> {
        floyd_warshall(self.graph)
    }
}
