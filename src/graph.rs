//! The two graph flavors built on top of the adjacency list storage.
//!
//! [`Graph`] has plain edges, [`WeightedGraph`] carries a numeric weight on
//! every edge. Both dereference to [`AdjList`](crate::storage::AdjList), so
//! the read-only operations of the storage (including the traversals and
//! algorithm shortcuts) are available on either of them. Operations whose
//! contract depends on the flavor are defined on the wrappers directly.

macro_rules! delegate_storage {
    ([$($generics:tt)*] $graph:ty, $id:ty, $edge:ty) => {
        impl<$($generics)*> ::std::ops::Deref for $graph {
            type Target = $crate::storage::AdjList<$id, $edge>;

            fn deref(&self) -> &Self::Target {
                &self.storage
            }
        }

        impl<$($generics)*> From<$crate::storage::AdjList<$id, $edge>> for $graph {
            fn from(storage: $crate::storage::AdjList<$id, $edge>) -> Self {
                Self { storage }
            }
        }

        impl<$($generics)*> $crate::core::GraphBase for $graph {
            type VertexId = $id;

            fn is_directed(&self) -> bool {
                self.storage.is_directed()
            }
        }

        impl<$($generics)*> $crate::core::VertexSet for $graph {
            type VertexIdsIter<'a> = ::indexmap::map::Keys<'a, $id, $crate::core::Vertex<$id, $edge>>
            where
                Self: 'a;

            fn vertex_count(&self) -> usize {
                self.storage.vertex_count()
            }

            fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
                self.storage.vertex_ids()
            }

            fn index_of(&self, id: &$id) -> Option<usize> {
                $crate::core::VertexSet::index_of(&self.storage, id)
            }

            fn id_at(&self, index: usize) -> Option<&$id> {
                $crate::core::VertexSet::id_at(&self.storage, index)
            }

            fn contains_id(&self, id: &$id) -> bool {
                self.storage.contains_id(id)
            }
        }

        impl<$($generics)*> $crate::core::Neighbors for $graph {
            type NeighborsIter<'a> = $crate::storage::adj_list::NeighborsIter<'a, $id, $edge>
            where
                Self: 'a;

            fn neighbors(&self, id: &$id) -> Self::NeighborsIter<'_> {
                $crate::core::Neighbors::neighbors(&self.storage, id)
            }
        }

        impl<$($generics)*> ::std::fmt::Display for $graph {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.storage, f)
            }
        }
    };
}

pub(crate) use delegate_storage;

mod traversal;
mod unweighted;
mod weighted;

pub use unweighted::Graph;
pub use weighted::WeightedGraph;
