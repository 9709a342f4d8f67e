use log::debug;

use crate::{
    algo::Cycle,
    core::{Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::Error;

pub fn dfs<G>(graph: &G) -> Result<Vec<G::VertexId>, Error<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut path = Vec::new();

    let mut events = DfsEvents::new(graph).treat_as_directed();

    for event in events.start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::Open { vertex, .. } => path.push(vertex),
            DfsEvent::Close { vertex, .. } => {
                path.pop();
                order.push(vertex);
            }
            DfsEvent::BackEdge { to, .. } => {
                let start = path.iter().rposition(|vertex| vertex == &to).unwrap_or(0);
                let cycle = Cycle::new(path.split_off(start));

                debug!("topological sort failed on cycle {:?}", cycle.vertices());
                return Err(Error::Cycle(cycle));
            }
            DfsEvent::TreeEdge { .. } | DfsEvent::CrossForwardEdge { .. } => {}
        }
    }

    order.reverse();
    Ok(order)
}
