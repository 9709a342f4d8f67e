use log::trace;

use crate::core::{id::IdType, GraphBase, Neighbors, VertexSet};

use super::{
    raw::{Queue, RawAlgo, RawVisit, RawVisitMulti},
    VisitAll, VisitRoots, Visitor,
};

pub(crate) struct RawBfs;

impl<Id> RawAlgo<Id> for RawBfs {
    type Item = Id;
    type Collection = Queue<Id>;

    fn start(root: Id) -> Self::Item {
        root
    }

    fn visit_on_start() -> bool {
        true
    }
}

impl<Id: IdType> RawVisit<Id, RawBfs> {
    fn next<G>(&mut self, graph: &G) -> Option<Id>
    where
        G: Neighbors<VertexId = Id>,
    {
        let vertex = self.collection.0.pop_front()?;
        trace!("bfs: visiting {vertex:?}");

        for neighbor in graph.neighbors(&vertex) {
            // Marked on discovery, so every vertex is enqueued once.
            if self.visited.insert(neighbor.clone()) {
                self.collection.0.push_back(neighbor.clone());
            }
        }

        Some(vertex)
    }
}

/// Breadth-first search.
///
/// Vertices are visited in strict FIFO order: all vertices at hop distance
/// `d` from the root before any vertex at distance `d + 1`.
pub struct Bfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G::VertexId, RawBfs>,
}

pub struct BfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G::VertexId, RawBfs>,
}

pub struct BfsMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G::VertexId, RawBfs>,
    multi: RawVisitMulti<G::VertexId, RawBfs, S>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self
    where
        G: VertexSet,
    {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> BfsMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        self.raw.collection.0.clear();
        BfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> BfsMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        self.raw.collection.0.clear();
        BfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn is_visited(&self, vertex: &G::VertexId) -> bool {
        self.raw.visited.contains(vertex)
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

impl<'a, S, G> Visitor<G> for BfsMulti<'a, G, S>
where
    S: VisitRoots<G::VertexId>,
    G: Neighbors + VertexSet,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.multi.next_multi(
            self.raw,
            |raw| raw.next(graph),
            |vertex| graph.contains_id(vertex),
        )
    }
}
