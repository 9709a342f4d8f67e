#![allow(dead_code)]

use adjgraph::WeightedGraph;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5d1c3a07b64e29f1;

/// Generates edges `(v, w)` with `w < v` of a G(n, p) random graph, skipping
/// over the non-edges geometrically.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n { Some((*v, *w)) } else { None }
    }
}

pub fn adjgraph_random(
    directed: bool,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> WeightedGraph<usize, f32> {
    let mut graph = WeightedGraph::with_capacity(directed, vertex_count);

    graph.extend_with_vertices(0..vertex_count).unwrap();

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&u, &v, rng.f32()).unwrap();
    }

    graph
}

/// Random graph with a path `0 - 1 - ... - n` added so that it is connected.
pub fn adjgraph_random_connected(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> WeightedGraph<usize, f32> {
    let mut graph = adjgraph_random(false, vertex_count, density, rng);

    for v in 1..vertex_count {
        graph.add_edge(&(v - 1), &v, rng.f32()).unwrap();
    }

    graph
}

pub fn petgraph_from<Ty: petgraph::EdgeType>(
    graph: &WeightedGraph<usize, f32>,
) -> petgraph::Graph<(), f32, Ty> {
    let mut result = petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_count());

    for _ in 0..graph.vertex_count() {
        result.add_node(());
    }

    for (u, v, w) in graph.edges() {
        result.add_edge(NodeIndex::new(*u), NodeIndex::new(*v), *w);
    }

    result
}
