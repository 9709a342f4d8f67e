//! In-memory graphs stored as adjacency lists, with classic traversal,
//! connectivity, shortest path and spanning tree algorithms.
//!
//! ```
//! use adjgraph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new_undirected();
//!
//! graph.extend_with_vertices(["A", "B", "C", "D"]).unwrap();
//! graph
//!     .extend_with_edges([("A", "B", 4), ("A", "C", 8), ("B", "C", 11), ("C", "D", 2)])
//!     .unwrap();
//!
//! assert_eq!(graph.find_shortest_path(&"A", &"D"), Ok(Some(10)));
//! assert_eq!(graph.minimum_spanning_tree_prim(), Ok(14));
//! assert_eq!(graph.bfs_traversal(&"D"), Ok(vec!["D", "C", "A", "B"]));
//! ```

pub mod adapt;
pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod io;
pub mod storage;
pub mod visit;

pub use graph::{Graph, WeightedGraph};

pub mod prelude {
    pub use crate::{
        core::{GraphBase, Neighbors, VertexSet, Weight, WeightedNeighbors},
        graph::{Graph, WeightedGraph},
        visit::Visitor,
    };
}
