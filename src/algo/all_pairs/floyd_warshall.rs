use log::debug;

use crate::{
    common::FxIndexSet,
    core::{weight::Weight, VertexSet, WeightedNeighbors},
};

use super::{AllPairsShortestPaths, Error};

pub fn floyd_warshall<G>(
    graph: &G,
) -> Result<AllPairsShortestPaths<G::VertexId, G::Weight>, Error>
where
    G: WeightedNeighbors + VertexSet,
{
    let n = graph.vertex_count();
    let ids = graph.vertex_ids().cloned().collect::<FxIndexSet<_>>();

    let mut dist: Vec<Option<G::Weight>> = vec![None; n * n];
    let mut next = vec![None; n * n];

    for i in 0..n {
        dist[i * n + i] = Some(<G::Weight as Weight>::zero());
        next[i * n + i] = Some(i);
    }

    for (i, u) in ids.iter().enumerate() {
        for (v, w) in graph.neighbors_with_weights(u) {
            let Some(j) = ids.get_index_of(v) else {
                continue;
            };

            // Only a negative self loop beats the zero on the diagonal.
            let shorter = dist[i * n + j].as_ref().map_or(true, |curr| w < curr);

            if shorter {
                dist[i * n + j] = Some(w.clone());
                next[i * n + j] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(dist_ik) = dist[i * n + k].clone() else {
                continue;
            };

            for j in 0..n {
                let Some(dist_kj) = dist[k * n + j].clone() else {
                    continue;
                };

                let Some(candidate) = dist_ik.checked_add(&dist_kj) else {
                    continue;
                };
                let shorter = dist[i * n + j]
                    .as_ref()
                    .map_or(true, |curr| candidate < *curr);

                if shorter {
                    dist[i * n + j] = Some(candidate);
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    let zero = <G::Weight as Weight>::zero();
    let negative_cycle = (0..n).any(|i| {
        dist[i * n + i]
            .as_ref()
            .map_or(false, |self_dist| *self_dist < zero)
    });

    if negative_cycle {
        debug!("floyd-warshall found a negative cycle");
        return Err(Error::NegativeCycle);
    }

    debug!("floyd-warshall computed distances for {n} vertices");

    Ok(AllPairsShortestPaths { ids, dist, next })
}
