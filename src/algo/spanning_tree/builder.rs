use crate::core::{GraphBase, VertexSet, WeightedNeighbors};

use super::{algo, kruskal::kruskal, prim::prim, Algo, Error, SpanningTree};

pub struct SpanningTreeBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl<Id, W> SpanningTree<Id, W> {
    pub fn on<G>(graph: &G) -> SpanningTreeBuilder<'_, G, algo::AnyAlgo>
    where
        G: WeightedNeighbors<VertexId = Id, Weight = W>,
    {
        SpanningTreeBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> SpanningTreeBuilder<'a, G, A>
where
    G: WeightedNeighbors,
{
    pub fn kruskal(self) -> SpanningTreeBuilder<'a, G, algo::Kruskal> {
        SpanningTreeBuilder {
            graph: self.graph,
            algo: algo::Kruskal,
        }
    }

    pub fn prim(self) -> SpanningTreeBuilder<'a, G, algo::Prim> {
        SpanningTreeBuilder {
            graph: self.graph,
            algo: algo::Prim,
        }
    }

    pub fn using(self, algo: Algo) -> SpanningTreeBuilder<'a, G, algo::SpecificAlgo> {
        SpanningTreeBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

type Outcome<G> = Result<
    SpanningTree<<G as GraphBase>::VertexId, <G as WeightedNeighbors>::Weight>,
    Error,
>;

impl<'a, G> SpanningTreeBuilder<'a, G, algo::AnyAlgo>
where
    G: WeightedNeighbors + VertexSet,
{
    pub fn run(self) -> Outcome<G> {
        kruskal(self.graph)
    }
}

impl<'a, G> SpanningTreeBuilder<'a, G, algo::SpecificAlgo>
where
    G: WeightedNeighbors + VertexSet,
{
    pub fn run(self) -> Outcome<G> {
        match self.algo.0 {
            Algo::Kruskal => kruskal(self.graph),
            Algo::Prim => prim(self.graph),
        }
    }
}

impl<'a, G> SpanningTreeBuilder<'a, G, algo::Kruskal>
where
    G: WeightedNeighbors + VertexSet,
{
    pub fn run(self) -> Outcome<G> {
        kruskal(self.graph)
    }
}

impl<'a, G> SpanningTreeBuilder<'a, G, algo::Prim>
where
    G: WeightedNeighbors + VertexSet,
{
    pub fn run(self) -> Outcome<G> {
        prim(self.graph)
    }
}
