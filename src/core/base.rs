use super::{id::IdType, weight::Weight};

/// Base trait for all graph types.
pub trait GraphBase {
    /// Vertex identifier type of the graph.
    type VertexId: IdType;

    /// Returns `true` if the edges are one-way.
    fn is_directed(&self) -> bool;
}

/// Access to the set of vertices of a graph.
///
/// Every vertex has, besides its id, a dense index in the range
/// `0..vertex_count()`. The index is stable as long as no vertex is added and
/// allows algorithms to use bit sets and vectors instead of hash maps.
pub trait VertexSet: GraphBase {
    type VertexIdsIter<'a>: Iterator<Item = &'a Self::VertexId>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    /// Returns the ids of all vertices in the order of their indices.
    fn vertex_ids(&self) -> Self::VertexIdsIter<'_>;

    fn index_of(&self, id: &Self::VertexId) -> Option<usize>;

    fn id_at(&self, index: usize) -> Option<&Self::VertexId>;

    fn contains_id(&self, id: &Self::VertexId) -> bool {
        self.index_of(id).is_some()
    }
}

/// Access to the outgoing adjacencies of vertices.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::VertexId>
    where
        Self: 'a;

    /// Returns the ids of vertices adjacent to `id`. For a vertex that is not
    /// in the graph, the iterator is empty.
    fn neighbors(&self, id: &Self::VertexId) -> Self::NeighborsIter<'_>;
}

/// Access to the outgoing adjacencies of vertices together with the weights
/// of the connecting edges.
pub trait WeightedNeighbors: Neighbors {
    type Weight: Weight;

    type WeightedNeighborsIter<'a>: Iterator<Item = (&'a Self::VertexId, &'a Self::Weight)>
    where
        Self: 'a;

    fn neighbors_with_weights(&self, id: &Self::VertexId) -> Self::WeightedNeighborsIter<'_>;
}
