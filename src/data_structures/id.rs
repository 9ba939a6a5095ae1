//! Node identity allocation.

use std::{cell::Cell, fmt};

/// Identity of a [`SceneNode`](crate::data_structures::scene_node::SceneNode).
///
/// Ids are handed out by an [`IdAllocator`] in strictly increasing order and
/// are never reused while the allocator lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic node id counter.
///
/// The renderer is single threaded, so the counter is a plain `Cell`. Scenes
/// that must not hand out overlapping ids share one allocator through an `Rc`
/// (see [`Scene::with_allocator`](crate::data_structures::scene_graph::Scene::with_allocator)).
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: Cell<u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an id greater than every id returned before.
    pub fn next_id(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id + 1);
        NodeId(id)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next.get()
    }
}
