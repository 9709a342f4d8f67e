//! Find [shortest paths between all pairs] of vertices using the
//! Floyd–Warshall algorithm.
//!
//! Negative edge weights are allowed as long as they do not form a negative
//! cycle. Note that a negative undirected edge is a negative cycle on its own,
//! because it can be traversed back and forth.
//!
//! [shortest paths between all pairs]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::AllPairsShortestPaths, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new_directed();
//!
//! graph.extend_with_vertices(["a", "b", "c", "d"]).unwrap();
//! graph
//!     .extend_with_edges([("a", "b", 4), ("a", "c", 1), ("c", "b", 2), ("b", "d", -1)])
//!     .unwrap();
//!
//! let paths = AllPairsShortestPaths::on(&graph).run().unwrap();
//!
//! assert_eq!(paths.dist(&"a", &"d"), Some(&2));
//! assert_eq!(paths.path(&"a", &"d"), Some(vec!["a", "c", "b", "d"]));
//! assert_eq!(paths.dist(&"d", &"a"), None);
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    common::FxIndexSet,
    core::{id::IdType, weight::Weight},
};

mod builder;
mod floyd_warshall;

pub use builder::AllPairsShortestPathsBuilder;

/// Shortest path distances between every pair of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<Id, W> {
    ids: FxIndexSet<Id>,
    // Row-major `n * n` matrices indexed by the dense vertex index. `None`
    // stands for an unreachable pair.
    dist: Vec<Option<W>>,
    next: Vec<Option<usize>>,
}

/// The error encountered during an [`AllPairsShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A cycle of negative total weight makes some distances unbounded.
    #[error("graph contains a negative cycle")]
    NegativeCycle,
}

impl<Id, W> AllPairsShortestPaths<Id, W>
where
    Id: IdType,
    W: Weight,
{
    fn cell(&self, from: &Id, to: &Id) -> Option<usize> {
        let from = self.ids.get_index_of(from)?;
        let to = self.ids.get_index_of(to)?;
        Some(from * self.ids.len() + to)
    }

    /// Returns the shortest path distance from `from` to `to`, or `None` if
    /// `to` is not reachable or any of the vertices is not in the graph.
    pub fn dist(&self, from: &Id, to: &Id) -> Option<&W> {
        self.dist[self.cell(from, to)?].as_ref()
    }

    /// Returns the vertices on a shortest path from `from` to `to`, both
    /// endpoints included.
    pub fn path(&self, from: &Id, to: &Id) -> Option<Vec<Id>> {
        self.dist(from, to)?;

        let n = self.ids.len();
        let target = self.ids.get_index_of(to)?;
        let mut current = self.ids.get_index_of(from)?;

        let mut path = vec![from.clone()];

        // A simple path has at most `n` vertices.
        while current != target && path.len() <= n {
            current = self.next[current * n + target]?;
            path.push(self.ids.get_index(current)?.clone());
        }

        Some(path)
    }

    /// Returns the complete distance mapping. Unreachable pairs have the
    /// distance [`Weight::inf`], which for integers can't be distinguished from
    /// a path of the maximum weight. [`dist`](Self::dist) reports them as
    /// `None`.
    pub fn to_map(&self) -> FxHashMap<Id, FxHashMap<Id, W>> {
        let n = self.ids.len();

        self.ids
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .ids
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        let dist = self.dist[i * n + j].clone().unwrap_or_else(W::inf);
                        (to.clone(), dist)
                    })
                    .collect();

                (from.clone(), row)
            })
            .collect()
    }
}
