use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashSet},
    hash::BuildHasherDefault,
};

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{
    weight::{Weight, Weighted},
    VertexSet, WeightedNeighbors,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<G>(
    graph: &G,
    source: G::VertexId,
    goal: Option<G::VertexId>,
) -> Result<ShortestPaths<G::Weight, G>, Error<G::VertexId>>
where
    G: WeightedNeighbors + VertexSet,
{
    if !graph.contains_id(&source) {
        return Err(Error::VertexNotFound(source));
    }

    if let Some(ref goal) = goal {
        if !graph.contains_id(goal) {
            return Err(Error::VertexNotFound(goal.clone()));
        }
    }

    let mut visited: FxHashSet<G::VertexId> =
        HashSet::with_capacity_and_hasher(graph.vertex_count(), BuildHasherDefault::default());

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    let zero = <G::Weight as Weight>::zero();
    dist.insert(source.clone(), zero.clone());
    queue.push(Reverse(Weighted(source.clone(), <G::Weight as Weight>::Ord::from(zero))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist: G::Weight = vertex_dist.into();

        // Stale duplicate from an earlier relaxation.
        if visited.contains(&vertex) {
            continue;
        }

        if goal.as_ref() == Some(&vertex) {
            visited.insert(vertex);
            break;
        }

        for (next, edge_dist) in graph.neighbors_with_weights(&vertex) {
            if visited.contains(next) {
                continue;
            }

            if !<G::Weight as Weight>::is_unsigned()
                && *edge_dist < <G::Weight as Weight>::zero()
            {
                return Err(Error::NegativeWeight);
            }

            // A sum that does not fit the type can't be the shortest one.
            let Some(next_dist) = vertex_dist.checked_add(edge_dist) else {
                continue;
            };

            match dist.entry(next.clone()) {
                Entry::Occupied(curr_dist) => {
                    if next_dist < *curr_dist.get() {
                        *curr_dist.into_mut() = next_dist.clone();
                        // Pushed as a new item instead of decreasing the key,
                        // the outdated entry is skipped when popped.
                        queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
                        pred.insert(next.clone(), vertex.clone());
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist.clone());
                    queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
                    pred.insert(next.clone(), vertex.clone());
                }
            }
        }

        visited.insert(vertex);
    }

    if let Some(ref goal) = goal {
        if !visited.contains(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    debug!("dijkstra from {source:?} settled {} vertices", visited.len());

    Ok(ShortestPaths { source, dist, pred })
}
