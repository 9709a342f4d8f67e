use std::fmt;

use indexmap::map::{Iter, Keys, Values};
use log::trace;

use crate::{
    common::FxIndexMap,
    core::{
        error::{AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind},
        id::IdType,
        GraphBase, Neighbors, Vertex, VertexSet, Weight, WeightedNeighbors,
    },
};

/// Adjacency list storage.
///
/// Vertices are kept in a map keyed by their id, in insertion order. Each
/// vertex owns its outgoing adjacencies. An undirected edge is stored as two
/// independent adjacency entries, one in each endpoint.
#[derive(Clone)]
pub struct AdjList<Id, E> {
    vertices: FxIndexMap<Id, Vertex<Id, E>>,
    edge_count: usize,
    directed: bool,
}

impl<Id: IdType, E> AdjList<Id, E> {
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    pub fn with_capacity(directed: bool, vertex_count: usize) -> Self {
        Self {
            vertices: FxIndexMap::with_capacity_and_hasher(vertex_count, Default::default()),
            edge_count: 0,
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_id(&self, id: &Id) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &Id) -> Option<&Vertex<Id, E>> {
        self.vertices.get(id)
    }

    /// Returns all vertices in insertion order.
    pub fn vertices(&self) -> Values<'_, Id, Vertex<Id, E>> {
        self.vertices.values()
    }

    pub fn vertex_ids(&self) -> Keys<'_, Id, Vertex<Id, E>> {
        self.vertices.keys()
    }

    /// Adds a new vertex. Fails if a vertex with the same id already exists,
    /// leaving the existing vertex and its adjacencies untouched.
    pub fn add_vertex(&mut self, id: Id) -> Result<(), AddVertexError<Id>> {
        if self.vertices.contains_key(&id) {
            return Err(AddVertexError::new(id, AddVertexErrorKind::Duplicate));
        }

        self.vertices.insert(id.clone(), Vertex::new(id));
        Ok(())
    }

    /// Adds an edge from `src` to `dst` and, in undirected graphs, from `dst`
    /// to `src`.
    ///
    /// If the edge already exists, the call is a no-op and the original
    /// attribute is kept. Returns `true` if a new edge was added.
    pub fn add_edge(&mut self, src: &Id, dst: &Id, edge: E) -> Result<bool, AddEdgeError<Id>>
    where
        E: Clone,
    {
        if !self.vertices.contains_key(src) {
            return Err(AddEdgeError::new(
                src.clone(),
                dst.clone(),
                AddEdgeErrorKind::SourceAbsent,
            ));
        }

        if !self.vertices.contains_key(dst) {
            return Err(AddEdgeError::new(
                src.clone(),
                dst.clone(),
                AddEdgeErrorKind::DestinationAbsent,
            ));
        }

        let added = self
            .vertices
            .get_mut(src)
            .map_or(false, |source| source.add_neighbor(dst.clone(), edge.clone()));

        if !added {
            return Ok(false);
        }

        // Undirected adjacencies are always inserted in pairs, so the reverse
        // entry cannot exist yet.
        if !self.directed && src != dst {
            if let Some(target) = self.vertices.get_mut(dst) {
                target.add_neighbor(src.clone(), edge);
            }
        }

        trace!("added edge {src:?} -> {dst:?}");
        self.edge_count += 1;

        Ok(added)
    }

    /// Returns all edges as `(src, dst, attribute)` triples. In undirected
    /// graphs, every edge is reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&Id, &Id, &E)> + '_ {
        self.vertices
            .values()
            .enumerate()
            .flat_map(move |(index, vertex)| {
                vertex
                    .neighbors_with_weights()
                    .filter(move |(dst, _)| {
                        self.directed
                            || self.vertices.get_index_of(*dst).map_or(false, |i| i >= index)
                    })
                    .map(move |(dst, edge)| (vertex.id(), dst, edge))
            })
    }
}

impl<Id: IdType, E> GraphBase for AdjList<Id, E> {
    type VertexId = Id;

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<Id: IdType, E> VertexSet for AdjList<Id, E> {
    type VertexIdsIter<'a> = Keys<'a, Id, Vertex<Id, E>>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.vertices.keys()
    }

    fn index_of(&self, id: &Id) -> Option<usize> {
        self.vertices.get_index_of(id)
    }

    fn id_at(&self, index: usize) -> Option<&Id> {
        self.vertices.get_index(index).map(|(id, _)| id)
    }

    fn contains_id(&self, id: &Id) -> bool {
        self.vertices.contains_key(id)
    }
}

/// Iterator over neighbor ids returned by [`Neighbors::neighbors`].
pub struct NeighborsIter<'a, Id, E> {
    inner: Option<Keys<'a, Id, E>>,
}

impl<'a, Id, E> Iterator for NeighborsIter<'a, Id, E> {
    type Item = &'a Id;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

/// Iterator over neighbors and edge weights returned by
/// [`WeightedNeighbors::neighbors_with_weights`].
pub struct WeightedNeighborsIter<'a, Id, W> {
    inner: Option<Iter<'a, Id, W>>,
}

impl<'a, Id, W> Iterator for WeightedNeighborsIter<'a, Id, W> {
    type Item = (&'a Id, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl<Id: IdType, E> Neighbors for AdjList<Id, E> {
    type NeighborsIter<'a> = NeighborsIter<'a, Id, E>
    where
        Self: 'a;

    fn neighbors(&self, id: &Id) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            inner: self.vertices.get(id).map(Vertex::neighbors),
        }
    }
}

impl<Id: IdType, W: Weight> WeightedNeighbors for AdjList<Id, W> {
    type Weight = W;

    type WeightedNeighborsIter<'a> = WeightedNeighborsIter<'a, Id, W>
    where
        Self: 'a;

    fn neighbors_with_weights(&self, id: &Id) -> Self::WeightedNeighborsIter<'_> {
        WeightedNeighborsIter {
            inner: self.vertices.get(id).map(Vertex::neighbors_with_weights),
        }
    }
}

impl<Id: fmt::Debug, E> fmt::Debug for AdjList<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjList")
            .field("vertices", &self.vertices.values().collect::<Vec<_>>())
            .field("edge_count", &self.edge_count)
            .field("directed", &self.directed)
            .finish()
    }
}

impl<Id: fmt::Debug, E> fmt::Display for AdjList<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph with vertices: [")?;
        for (i, vertex) in self.vertices.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("]")
    }
}
