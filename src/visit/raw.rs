use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
    marker::PhantomData,
};

use rustc_hash::FxHashSet;

use crate::core::id::IdType;

use super::VisitRoots;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo<Id> {
    type Item;
    type Collection: TraversalCollection<Self::Item>;

    fn start(root: Id) -> Self::Item;
    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<Id, A: RawAlgo<Id>> {
    pub collection: A::Collection,
    // Not a bit set, the graph may grow between visitor steps.
    pub visited: FxHashSet<Id>,
}

impl<Id: IdType, A: RawAlgo<Id>> RawVisit<Id, A> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            collection: A::Collection::default(),
            visited: HashSet::with_capacity_and_hasher(vertex_count, BuildHasherDefault::default()),
        }
    }

    pub fn start(&mut self, root: Id) {
        if A::visit_on_start() {
            self.visited.insert(root.clone());
        }

        self.collection.clear();
        self.collection.push(A::start(root));
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.clear();
    }
}

pub(crate) struct RawVisitMulti<Id, A, S> {
    pub roots: S,
    ty: PhantomData<(Id, A)>,
}

impl<Id: IdType, A: RawAlgo<Id>, S: VisitRoots<Id>> RawVisitMulti<Id, A, S> {
    pub fn new(roots: S) -> Self {
        Self {
            roots,
            ty: PhantomData,
        }
    }

    /// Runs `get_next` and, whenever the current traversal is exhausted,
    /// restarts it from the next root that is valid and not visited yet.
    pub fn next_multi<F, R, V>(
        &mut self,
        raw: &mut RawVisit<Id, A>,
        mut get_next: F,
        is_valid: V,
    ) -> Option<R>
    where
        F: FnMut(&mut RawVisit<Id, A>) -> Option<R>,
        V: Fn(&Id) -> bool,
    {
        loop {
            if let Some(item) = get_next(raw) {
                return Some(item);
            }

            if self.roots.is_done(&raw.visited) {
                return None;
            }

            let root = loop {
                let root = self.roots.next_root()?;

                if !raw.visited.contains(&root) && is_valid(&root) {
                    break root;
                }
            };

            raw.start(root);
        }
    }
}
