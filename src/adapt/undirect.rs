use std::{iter::Chain, slice};

use crate::core::{GraphBase, Neighbors, VertexSet};

/// Read-only view of a graph in which every edge can be traversed in both
/// directions.
///
/// For a directed graph, the neighbors of a vertex are its successors followed
/// by its predecessors. Traversals over this view therefore follow weak
/// connectivity. An undirected graph is passed through unchanged.
pub struct Undirect<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    // Predecessors by vertex index, empty for undirected graphs.
    incoming: Vec<Vec<G::VertexId>>,
}

impl<'a, G> Undirect<'a, G>
where
    G: VertexSet + Neighbors,
{
    pub fn new(graph: &'a G) -> Self {
        let mut incoming = Vec::new();

        if graph.is_directed() {
            incoming.resize_with(graph.vertex_count(), Vec::new);

            for src in graph.vertex_ids() {
                for dst in graph.neighbors(src) {
                    if let Some(index) = graph.index_of(dst) {
                        incoming[index].push(src.clone());
                    }
                }
            }
        }

        Self { graph, incoming }
    }

    pub fn inner(&self) -> &'a G {
        self.graph
    }
}

impl<G> GraphBase for Undirect<'_, G>
where
    G: GraphBase,
{
    type VertexId = G::VertexId;

    fn is_directed(&self) -> bool {
        false
    }
}

impl<G> VertexSet for Undirect<'_, G>
where
    G: VertexSet,
{
    type VertexIdsIter<'b> = G::VertexIdsIter<'b>
    where
        Self: 'b;

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.graph.vertex_ids()
    }

    fn index_of(&self, id: &Self::VertexId) -> Option<usize> {
        self.graph.index_of(id)
    }

    fn id_at(&self, index: usize) -> Option<&Self::VertexId> {
        self.graph.id_at(index)
    }
}

impl<G> Neighbors for Undirect<'_, G>
where
    G: VertexSet + Neighbors,
{
    type NeighborsIter<'b> = Chain<G::NeighborsIter<'b>, slice::Iter<'b, G::VertexId>>
    where
        Self: 'b;

    fn neighbors(&self, id: &Self::VertexId) -> Self::NeighborsIter<'_> {
        let incoming = self
            .graph
            .index_of(id)
            .and_then(|index| self.incoming.get(index))
            .map_or(&[][..], Vec::as_slice);

        self.graph.neighbors(id).chain(incoming.iter())
    }
}
