use log::debug;

use crate::{
    adapt::Undirect,
    core::{Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::Cycle;

pub fn dfs_find<G>(graph: &G, as_undirected: bool) -> Option<Cycle<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let cycle = if as_undirected && graph.is_directed() {
        find(&Undirect::new(graph))
    } else {
        find(graph)
    };

    if let Some(ref cycle) = cycle {
        debug!("found cycle {:?}", cycle.vertices());
    }

    cycle
}

fn find<G>(graph: &G) -> Option<Cycle<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    // Vertices opened but not closed yet, that is, the current DFS path.
    let mut path = Vec::new();

    for event in DfsEvents::new(graph).start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::Open { vertex, .. } => path.push(vertex),
            DfsEvent::Close { .. } => {
                path.pop();
            }
            DfsEvent::BackEdge { to, .. } => {
                let start = path.iter().rposition(|vertex| vertex == &to)?;
                return Some(Cycle::new(path.split_off(start)));
            }
            DfsEvent::TreeEdge { .. } | DfsEvent::CrossForwardEdge { .. } => {}
        }
    }

    None
}
