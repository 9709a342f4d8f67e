use std::vec;

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{id::IdType, GraphBase, Neighbors, VertexSet};

use super::{
    raw::{RawAlgo, RawVisit, RawVisitMulti, Stack},
    DfsEvent, Time, VisitAll, VisitRoots, Visitor,
};

pub(crate) struct RawDfs;

impl<Id> RawAlgo<Id> for RawDfs {
    type Item = Id;
    type Collection = Stack<Id>;

    fn start(root: Id) -> Self::Item {
        root
    }

    fn visit_on_start() -> bool {
        false
    }
}

impl<Id: IdType> RawVisit<Id, RawDfs> {
    fn next<G>(&mut self, graph: &G) -> Option<Id>
    where
        G: Neighbors<VertexId = Id>,
    {
        loop {
            let vertex = self.collection.0.pop()?;

            // A vertex can be on the stack multiple times, only the first pop
            // counts.
            if !self.visited.insert(vertex.clone()) {
                continue;
            }

            trace!("dfs: visiting {vertex:?}");

            let unvisited = graph
                .neighbors(&vertex)
                .filter(|neighbor| !self.visited.contains(*neighbor))
                .cloned()
                .collect::<Vec<_>>();

            // Reversed so that the first neighbor is popped first, which gives
            // the same order as the recursive formulation.
            self.collection.0.extend(unvisited.into_iter().rev());

            return Some(vertex);
        }
    }
}

/// Depth-first search in preorder.
///
/// The visiting order is the same as of the recursive depth-first search that
/// explores the neighbors in their adjacency order.
pub struct Dfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G::VertexId, RawDfs>,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G::VertexId, RawDfs>,
}

pub struct DfsMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G::VertexId, RawDfs>,
    multi: RawVisitMulti<G::VertexId, RawDfs, S>,
}

impl<G> Dfs<G>
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

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> DfsMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        self.raw.collection.0.clear();
        DfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        self.raw.collection.0.clear();
        DfsMulti {
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

impl<'a, G> Visitor<G> for DfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

impl<'a, S, G> Visitor<G> for DfsMulti<'a, G, S>
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

pub(crate) struct Frame<Id> {
    vertex: Id,
    parent: Option<Id>,
    // `None` until the vertex is opened.
    neighbors: Option<vec::IntoIter<Id>>,
    parent_skipped: bool,
}

impl<Id> Frame<Id> {
    fn new(vertex: Id, parent: Option<Id>) -> Self {
        Self {
            vertex,
            parent,
            neighbors: None,
            parent_skipped: false,
        }
    }
}

pub(crate) struct RawDfsEvents;

impl<Id> RawAlgo<Id> for RawDfsEvents {
    type Item = Frame<Id>;
    type Collection = Stack<Frame<Id>>;

    fn start(root: Id) -> Self::Item {
        Frame::new(root, None)
    }

    fn visit_on_start() -> bool {
        false
    }
}

fn tick(time: &mut usize) -> Time {
    let current = Time(*time);
    *time += 1;
    current
}

impl<Id: IdType> RawVisit<Id, RawDfsEvents> {
    fn next<G>(
        &mut self,
        graph: &G,
        closed: &mut FxHashSet<Id>,
        time: &mut usize,
        is_directed: bool,
    ) -> Option<DfsEvent<Id>>
    where
        G: Neighbors<VertexId = Id>,
    {
        loop {
            let frame = self.collection.0.last_mut()?;

            if frame.neighbors.is_none() {
                let vertex = frame.vertex.clone();
                let neighbors = graph.neighbors(&vertex).cloned().collect::<Vec<_>>();
                frame.neighbors = Some(neighbors.into_iter());
                self.visited.insert(vertex.clone());

                return Some(DfsEvent::Open {
                    vertex,
                    time: tick(time),
                });
            }

            let Some(neighbor) = frame.neighbors.as_mut().and_then(Iterator::next) else {
                let vertex = frame.vertex.clone();
                self.collection.0.pop();
                closed.insert(vertex.clone());

                return Some(DfsEvent::Close {
                    vertex,
                    time: tick(time),
                });
            };

            let from = frame.vertex.clone();

            if !self.visited.contains(&neighbor) {
                self.collection
                    .0
                    .push(Frame::new(neighbor.clone(), Some(from.clone())));

                return Some(DfsEvent::TreeEdge { from, to: neighbor });
            }

            if is_directed {
                if closed.contains(&neighbor) {
                    return Some(DfsEvent::CrossForwardEdge { from, to: neighbor });
                } else {
                    return Some(DfsEvent::BackEdge { from, to: neighbor });
                }
            }

            // In undirected graphs, an edge to a closed vertex was already
            // reported from the other side. The edge to the parent is the tree
            // edge seen in reverse, skipped exactly once so that a self loop on
            // the parent still counts.
            if closed.contains(&neighbor) {
                continue;
            }

            if !frame.parent_skipped && frame.parent.as_ref() == Some(&neighbor) {
                frame.parent_skipped = true;
                continue;
            }

            return Some(DfsEvent::BackEdge { from, to: neighbor });
        }
    }
}

/// Depth-first search reporting [events](DfsEvent).
///
/// In undirected graphs, the edge leading back to the parent is not reported
/// as a back edge. Use [`DfsEvents::treat_as_directed`] to interpret every
/// adjacency entry as an arc.
pub struct DfsEvents<G>
where
    G: GraphBase,
{
    raw: RawVisit<G::VertexId, RawDfsEvents>,
    closed: FxHashSet<G::VertexId>,
    is_directed: bool,
}

pub struct DfsEventsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G::VertexId, RawDfsEvents>,
    closed: &'a mut FxHashSet<G::VertexId>,
    time: usize,
    is_directed: bool,
}

pub struct DfsEventsMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G::VertexId, RawDfsEvents>,
    multi: RawVisitMulti<G::VertexId, RawDfsEvents, S>,
    closed: &'a mut FxHashSet<G::VertexId>,
    time: usize,
    is_directed: bool,
}

impl<G> DfsEvents<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self
    where
        G: VertexSet,
    {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
            closed: FxHashSet::default(),
            is_directed: graph.is_directed(),
        }
    }

    pub fn treat_as_directed(mut self) -> Self {
        self.is_directed = true;
        self
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsEventsRooted<'_, G> {
        self.raw.start(root);
        DfsEventsRooted {
            raw: &mut self.raw,
            closed: &mut self.closed,
            time: 0,
            is_directed: self.is_directed,
        }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> DfsEventsMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        self.start_multi(VisitAll::new(graph))
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsEventsMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        self.raw.collection.0.clear();
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
            closed: &mut self.closed,
            time: 0,
            is_directed: self.is_directed,
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
        self.closed.clear();
    }
}

impl<'a, G> Visitor<G> for DfsEventsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = DfsEvent<G::VertexId>;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw
            .next(graph, self.closed, &mut self.time, self.is_directed)
    }
}

impl<'a, S, G> Visitor<G> for DfsEventsMulti<'a, G, S>
where
    G: Neighbors + VertexSet,
    S: VisitRoots<G::VertexId>,
{
    type Item = DfsEvent<G::VertexId>;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let closed = &mut *self.closed;
        let time = &mut self.time;
        let is_directed = self.is_directed;

        self.multi.next_multi(
            self.raw,
            |raw| raw.next(graph, closed, time, is_directed),
            |vertex| graph.contains_id(vertex),
        )
    }
}
