use log::debug;

use crate::{
    common::UnionFind,
    core::{weight::Weight, VertexSet, WeightedNeighbors},
};

use super::{Error, SpanningTree};

pub fn kruskal<G>(graph: &G) -> Result<SpanningTree<G::VertexId, G::Weight>, Error>
where
    G: WeightedNeighbors + VertexSet,
{
    if graph.is_directed() {
        return Err(Error::Directed);
    }

    let n = graph.vertex_count();

    // Every undirected edge is stored from both endpoints, take it from the
    // one with the lower index. Self loops never belong to a tree.
    let mut edges = Vec::new();
    for (u_index, u) in graph.vertex_ids().enumerate() {
        for (v, w) in graph.neighbors_with_weights(u) {
            match graph.index_of(v) {
                Some(v_index) if v_index > u_index => {
                    edges.push((<G::Weight as Weight>::Ord::from(w.clone()), u_index, v_index));
                }
                _ => {}
            }
        }
    }

    // Stable, so that equal weights keep the stored order.
    edges.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));

    let mut components = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut total = <G::Weight as Weight>::zero();

    for (w, u_index, v_index) in edges {
        if tree.len() + 1 >= n {
            break;
        }

        if !components.union(u_index, v_index) {
            continue;
        }

        let (Some(u), Some(v)) = (graph.id_at(u_index), graph.id_at(v_index)) else {
            continue;
        };

        let w: G::Weight = w.into();
        total = total + w.clone();
        tree.push((u.clone(), v.clone(), w));
    }

    if components.set_count() > 1 {
        debug!(
            "kruskal stopped with {} components left",
            components.set_count()
        );
        return Err(Error::Disconnected);
    }

    debug!("kruskal selected {} edges", tree.len());

    Ok(SpanningTree::new(tree, total))
}
