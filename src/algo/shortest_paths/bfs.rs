use std::collections::{hash_map::Entry, VecDeque};

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{Neighbors, VertexSet};

use super::{Error, ShortestPaths};

pub fn bfs<G>(
    graph: &G,
    source: G::VertexId,
    goal: Option<G::VertexId>,
) -> Result<ShortestPaths<usize, G>, Error<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    if !graph.contains_id(&source) {
        return Err(Error::VertexNotFound(source));
    }

    if let Some(ref goal) = goal {
        if !graph.contains_id(goal) {
            return Err(Error::VertexNotFound(goal.clone()));
        }
    }

    // The distance map doubles as the discovered set. In breadth-first order
    // the first discovery is along a shortest path.
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    dist.insert(source.clone(), 0);
    queue.push_back((source.clone(), 0));

    while let Some((vertex, vertex_dist)) = queue.pop_front() {
        if goal.as_ref() == Some(&vertex) {
            break;
        }

        for next in graph.neighbors(&vertex) {
            if let Entry::Vacant(slot) = dist.entry(next.clone()) {
                slot.insert(vertex_dist + 1);
                pred.insert(next.clone(), vertex.clone());
                queue.push_back((next.clone(), vertex_dist + 1));
            }
        }
    }

    if let Some(ref goal) = goal {
        if !dist.contains_key(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    debug!(
        "bfs from {source:?} reached {} of {} vertices",
        dist.len(),
        graph.vertex_count()
    );

    Ok(ShortestPaths { source, dist, pred })
}
