use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use log::debug;

use crate::{
    adapt::Undirect,
    core::{Neighbors, VertexSet},
};

type Outcome<Id> = Result<(Vec<Id>, Vec<Id>), (Id, Id)>;

pub fn bfs<G>(graph: &G) -> Outcome<G::VertexId>
where
    G: Neighbors + VertexSet,
{
    let outcome = if graph.is_directed() {
        color(&Undirect::new(graph))
    } else {
        color(graph)
    };

    if let Err((ref u, ref v)) = outcome {
        debug!("not bipartite, {u:?} and {v:?} share a color");
    }

    outcome
}

fn color<G>(graph: &G) -> Outcome<G::VertexId>
where
    G: Neighbors + VertexSet,
{
    let n = graph.vertex_count();

    // Indexed by the dense vertex index.
    let mut colored = FixedBitSet::with_capacity(n);
    let mut side = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();

    for (root_index, root) in graph.vertex_ids().enumerate() {
        if colored.contains(root_index) {
            continue;
        }

        colored.insert(root_index);
        queue.push_back((root.clone(), root_index));

        while let Some((vertex, vertex_index)) = queue.pop_front() {
            let vertex_side = side.contains(vertex_index);

            for next in graph.neighbors(&vertex) {
                let Some(next_index) = graph.index_of(next) else {
                    continue;
                };

                if !colored.contains(next_index) {
                    colored.insert(next_index);
                    side.set(next_index, !vertex_side);
                    queue.push_back((next.clone(), next_index));
                } else if side.contains(next_index) == vertex_side {
                    return Err((vertex, next.clone()));
                }
            }
        }
    }

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (index, vertex) in graph.vertex_ids().enumerate() {
        if side.contains(index) {
            right.push(vertex.clone());
        } else {
            left.push(vertex.clone());
        }
    }

    Ok((left, right))
}
