use log::debug;

use crate::{
    adapt::Undirect,
    core::{Neighbors, VertexSet},
    visit::{Bfs, Visitor},
};

pub fn bfs<G>(graph: &G) -> Vec<Vec<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let components = if graph.is_directed() {
        collect(&Undirect::new(graph))
    } else {
        collect(graph)
    };

    debug!("found {} connected components", components.len());
    components
}

fn collect<G>(graph: &G) -> Vec<Vec<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let mut traversal = Bfs::new(graph);
    let mut components = Vec::new();

    for root in graph.vertex_ids() {
        if traversal.is_visited(root) {
            continue;
        }

        let component = traversal
            .start(root.clone())
            .into_iter(graph)
            .collect::<Vec<_>>();

        components.push(component);
    }

    components
}
