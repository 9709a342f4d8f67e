use std::marker::PhantomData;

use crate::core::{GraphBase, Neighbors, VertexSet, WeightedNeighbors};

use super::{algo, bfs::bfs, dijkstra::dijkstra, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, G, A>
where
    G: GraphBase,
{
    graph: &'a G,
    goal: Option<G::VertexId>,
    algo: A,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> ShortestPathsBuilder<'_, W, G, algo::AnyAlgo> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            algo: algo::AnyAlgo,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, A> ShortestPathsBuilder<'a, W, G, A>
where
    G: GraphBase,
{
    /// Stops the search as soon as the shortest path to `goal` is known.
    pub fn goal(self, goal: G::VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    /// Uses breadth-first search, every edge counts as one hop.
    pub fn bfs(self) -> ShortestPathsBuilder<'a, W, G, algo::Bfs>
    where
        G: Neighbors,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            algo: algo::Bfs,
            ty: PhantomData,
        }
    }

    /// Uses Dijkstra's algorithm over the edge weights.
    pub fn dijkstra(self) -> ShortestPathsBuilder<'a, W, G, algo::Dijkstra>
    where
        G: WeightedNeighbors,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            algo: algo::Dijkstra,
            ty: PhantomData,
        }
    }
}

impl<'a, G> ShortestPathsBuilder<'a, G::Weight, G, algo::AnyAlgo>
where
    G: WeightedNeighbors,
{
    pub fn run(
        self,
        source: G::VertexId,
    ) -> Result<ShortestPaths<G::Weight, G>, Error<G::VertexId>>
    where
        G: VertexSet,
    {
        let ShortestPathsBuilder { graph, goal, .. } = self;
        dijkstra(graph, source, goal)
    }
}

impl<'a, G> ShortestPathsBuilder<'a, G::Weight, G, algo::Dijkstra>
where
    G: WeightedNeighbors,
{
    pub fn run(
        self,
        source: G::VertexId,
    ) -> Result<ShortestPaths<G::Weight, G>, Error<G::VertexId>>
    where
        G: VertexSet,
    {
        let ShortestPathsBuilder { graph, goal, .. } = self;
        dijkstra(graph, source, goal)
    }
}

impl<'a, G> ShortestPathsBuilder<'a, usize, G, algo::Bfs>
where
    G: Neighbors,
{
    pub fn run(self, source: G::VertexId) -> Result<ShortestPaths<usize, G>, Error<G::VertexId>>
    where
        G: VertexSet,
    {
        let ShortestPathsBuilder { graph, goal, .. } = self;
        bfs(graph, source, goal)
    }
}
