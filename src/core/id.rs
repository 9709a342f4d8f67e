//! Traits used for identifying vertices in graphs.
//!
//! Vertices are identified by arbitrary user-provided values. Strings and
//! integers are the typical choice, but any type implementing [`IdType`] can be
//! used.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// The graph stores vertices keyed by their identifier, so the identifier must
/// be hashable and comparable for equality. It is cloned into adjacency
/// entries and algorithm results, hence cheap-to-clone types (integers,
/// `&str`, `Rc<str>`) are preferable to owned strings in hot paths.
///
/// The trait is implemented for every type satisfying the super traits.
pub trait IdType: Clone + Eq + Hash + Debug {}

impl<T> IdType for T where T: Clone + Eq + Hash + Debug {}
