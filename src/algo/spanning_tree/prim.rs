use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use log::debug;

use crate::core::{
    weight::{Weight, Weighted},
    GraphBase, VertexSet, WeightedNeighbors,
};

use super::{Error, SpanningTree};

pub fn prim<G>(graph: &G) -> Result<SpanningTree<G::VertexId, G::Weight>, Error>
where
    G: WeightedNeighbors + VertexSet,
{
    if graph.is_directed() {
        return Err(Error::Directed);
    }

    let n = graph.vertex_count();
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut total = <G::Weight as Weight>::zero();

    let Some(start) = graph.id_at(0) else {
        return Ok(SpanningTree::new(tree, total));
    };

    let mut in_tree = FixedBitSet::with_capacity(n);
    let mut queue = BinaryHeap::new();

    in_tree.insert(0);
    push_leaving(graph, start, &in_tree, &mut queue);

    while let Some(Reverse(Weighted((from, to), w))) = queue.pop() {
        let Some(to_index) = graph.index_of(to) else {
            continue;
        };

        // Stale entry, the vertex was connected by a lighter edge meanwhile.
        if in_tree.contains(to_index) {
            continue;
        }

        in_tree.insert(to_index);

        let w: G::Weight = w.into();
        total = total + w.clone();
        tree.push((from.clone(), to.clone(), w));

        push_leaving(graph, to, &in_tree, &mut queue);
    }

    if tree.len() + 1 < n {
        debug!("prim reached {} of {} vertices", tree.len() + 1, n);
        return Err(Error::Disconnected);
    }

    debug!("prim selected {} edges", tree.len());

    Ok(SpanningTree::new(tree, total))
}

type Queue<'a, G> = BinaryHeap<
    Reverse<
        Weighted<
            (&'a <G as GraphBase>::VertexId, &'a <G as GraphBase>::VertexId),
            <<G as WeightedNeighbors>::Weight as Weight>::Ord,
        >,
    >,
>;

fn push_leaving<'a, G>(
    graph: &'a G,
    from: &'a G::VertexId,
    in_tree: &FixedBitSet,
    queue: &mut Queue<'a, G>,
) where
    G: WeightedNeighbors + VertexSet,
{
    for (to, w) in graph.neighbors_with_weights(from) {
        let outside = graph
            .index_of(to)
            .map_or(false, |index| !in_tree.contains(index));

        if outside {
            queue.push(Reverse(Weighted((from, to), w.clone().into())));
        }
    }
}
