pub mod all_pairs;
pub mod bipartite;
pub mod connected_components;
pub mod cycle;
pub mod neighborhood;
pub mod path;
pub mod shortest_paths;
pub mod spanning_tree;
pub mod toposort;

pub use all_pairs::AllPairsShortestPaths;
pub use bipartite::{is_bipartite, Bipartite};
pub use connected_components::{is_connected, ConnectedComponents};
pub use cycle::{is_cyclic, is_cyclic_undirected, Cycle};
pub use neighborhood::vertices_at_distance;
pub use path::find_path;
pub use shortest_paths::ShortestPaths;
pub use spanning_tree::SpanningTree;
pub use toposort::TopoSort;
