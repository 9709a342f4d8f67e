use std::fmt;

use indexmap::map::{Iter, Keys};

use crate::common::FxIndexMap;

use super::id::IdType;

/// A vertex with its outgoing adjacencies.
///
/// The adjacency maps the id of each neighbor to the attribute of the
/// connecting edge (`()` for unweighted graphs, the weight otherwise). Entries
/// keep their insertion order, which determines the order in which traversals
/// discover the neighbors.
#[derive(Clone)]
pub struct Vertex<Id, E> {
    id: Id,
    adjacency: FxIndexMap<Id, E>,
}

impl<Id: IdType, E> Vertex<Id, E> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            adjacency: FxIndexMap::default(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Records an adjacency to `target`.
    ///
    /// If the target is already a neighbor, the call is a no-op and the
    /// original edge attribute is kept. Returns `true` if the entry was added.
    pub fn add_neighbor(&mut self, target: Id, edge: E) -> bool {
        match self.adjacency.entry(target) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(edge);
                true
            }
        }
    }

    /// Returns the ids of adjacent vertices in insertion order.
    pub fn neighbors(&self) -> Keys<'_, Id, E> {
        self.adjacency.keys()
    }

    /// Returns the adjacent vertices together with the edge attributes.
    pub fn neighbors_with_weights(&self) -> Iter<'_, Id, E> {
        self.adjacency.iter()
    }

    pub fn contains_neighbor(&self, target: &Id) -> bool {
        self.adjacency.contains_key(target)
    }

    /// Returns the attribute of the edge to `target`, if there is one.
    pub fn weight_to(&self, target: &Id) -> Option<&E> {
        self.adjacency.get(target)
    }

    /// Number of outgoing adjacencies.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

impl<Id: fmt::Debug, E> fmt::Debug for Vertex<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("neighbors", &self.adjacency.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<Id: fmt::Debug, E> fmt::Display for Vertex<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} adjacent to {:?}",
            self.id,
            self.adjacency.keys().collect::<Vec<_>>()
        )
    }
}
