//! Random graph strategies for property-based testing with [`proptest`].
//!
//! Vertices are the integers `0..n` added in increasing order, so the id of a
//! vertex equals its dense index. Self loops are allowed unless the graph is
//! required to be acyclic.

use std::{fmt, marker::PhantomData};

use proptest::{
    collection::vec,
    prelude::*,
    sample::Index,
    strategy::{BoxedStrategy, Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    common::UnionFind,
    graph::{Graph, WeightedGraph},
    storage::AdjList,
};

pub fn graph_undirected(max_size: usize) -> GraphStrategy<Just<()>, Graph<usize>> {
    GraphStrategy::new(Just(()), false, max_size)
}

pub fn graph_directed(max_size: usize) -> GraphStrategy<Just<()>, Graph<usize>> {
    GraphStrategy::new(Just(()), true, max_size)
}

pub fn weighted_graph_undirected<W: Strategy>(
    max_size: usize,
    weight: W,
) -> GraphStrategy<W, WeightedGraph<usize, W::Value>> {
    GraphStrategy::new(weight, false, max_size)
}

pub fn weighted_graph_directed<W: Strategy>(
    max_size: usize,
    weight: W,
) -> GraphStrategy<W, WeightedGraph<usize, W::Value>> {
    GraphStrategy::new(weight, true, max_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    pub max_size: usize,
    pub connected: bool,
    pub acyclic: bool,
}

pub struct GraphStrategy<E, G> {
    edge: E,
    directed: bool,
    params: StrategyParams,
    graph: PhantomData<fn() -> G>,
}

// G is phantom data, we should not require Debug bound on it.
impl<E: fmt::Debug, G> fmt::Debug for GraphStrategy<E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("directed", &self.directed)
            .field("params", &self.params)
            .finish()
    }
}

impl<E, G> GraphStrategy<E, G> {
    pub fn new(edge: E, directed: bool, max_size: usize) -> Self {
        Self {
            edge,
            directed,
            params: StrategyParams {
                max_size,
                connected: false,
                acyclic: false,
            },
            graph: PhantomData,
        }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.params.max_size = max_size;
        self
    }

    /// Every generated graph has a path between any two vertices (ignoring the
    /// direction of edges).
    pub fn connected(mut self) -> Self {
        self.params.connected = true;
        self
    }

    /// Generated graphs have no cycles. Directed graphs only have edges from a
    /// lower to a higher id, undirected graphs are forests.
    pub fn acyclic(mut self) -> Self {
        self.params.acyclic = true;
        self
    }
}

impl<E, G> GraphStrategy<E, G>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone + 'static,
    G: From<AdjList<usize, E::Value>> + fmt::Debug + 'static,
{
    fn build(&self) -> BoxedStrategy<G> {
        let edge = self.edge.clone();
        let directed = self.directed;
        let StrategyParams {
            max_size,
            connected,
            acyclic,
        } = self.params;

        (0..=max_size)
            .prop_flat_map(move |n| {
                let bound = n.max(1);
                let extra = vec((0..bound, 0..bound, edge.clone()), 0..=2 * n);
                let tree = vec((any::<Index>(), edge.clone()), n.saturating_sub(1));
                (Just(n), extra, tree)
            })
            .prop_map(move |(n, extra, tree)| {
                let mut storage = AdjList::with_capacity(directed, n);
                let mut components = UnionFind::new(n);

                for v in 0..n {
                    // Ids are distinct.
                    let _ = storage.add_vertex(v);
                }

                if connected {
                    for (i, (parent, attr)) in tree.into_iter().enumerate() {
                        let v = i + 1;
                        let u = parent.index(v);

                        components.union(u, v);
                        let _ = storage.add_edge(&u, &v, attr);
                    }
                }

                for (u, v, attr) in extra {
                    if acyclic {
                        if u == v {
                            continue;
                        }

                        if !directed && !components.union(u, v) {
                            continue;
                        }
                    }

                    let (u, v) = if acyclic && directed {
                        (u.min(v), u.max(v))
                    } else {
                        (u, v)
                    };

                    let _ = storage.add_edge(&u, &v, attr);
                }

                G::from(storage)
            })
            .boxed()
    }
}

impl<E, G> Strategy for GraphStrategy<E, G>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone + 'static,
    G: From<AdjList<usize, E::Value>> + fmt::Debug + 'static,
{
    type Tree = Box<dyn ValueTree<Value = G>>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}
