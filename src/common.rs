pub mod union_find;

use std::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub use union_find::UnionFind;

/// Insertion-ordered hash map with the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered hash set with the Fx hasher.
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
