use setpick_challenges::problem_set::{CostKey, Item, ProblemId};
use setpick_utils::Points;

pub type PathIndex = usize;

#[derive(Debug, Clone, Copy)]
struct PathNode {
    id: ProblemId,
    parent: Option<PathIndex>,
}

/// Backing store for every chosen-id sequence of one search. A state's path
/// is a node index; children share their parent's prefix instead of copying
/// it.
#[derive(Debug, Default)]
pub struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, parent: Option<PathIndex>, id: ProblemId) -> PathIndex {
        self.nodes.push(PathNode { id, parent });
        self.nodes.len() - 1
    }

    /// Ids from the root to `path`, in the order they were added.
    pub fn collect(&self, path: Option<PathIndex>) -> Vec<ProblemId> {
        let mut ids = Vec::new();
        let mut cursor = path;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            ids.push(node.id);
            cursor = node.parent;
        }
        ids.reverse();
        ids
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Snapshot of one partial subset. Never modified once built.
#[derive(Debug, Clone, Copy)]
pub struct SearchState<V> {
    pub key: CostKey,
    pub value: V,
    /// Catalog index of the last item added, `None` for the empty subset.
    pub frontier_index: Option<usize>,
    pub path: Option<PathIndex>,
}

impl<V: Points> SearchState<V> {
    pub fn initial() -> Self {
        Self {
            key: CostKey::default(),
            value: V::zero(),
            frontier_index: None,
            path: None,
        }
    }

    /// First catalog index a successor may use.
    pub fn successor_start(&self) -> usize {
        self.frontier_index.map_or(0, |i| i + 1)
    }

    pub fn extend(&self, index: usize, item: &Item<V>, paths: &mut PathArena) -> Self {
        Self {
            key: self.key.extend(item),
            value: self.value.saturating_sum(item.value),
            frontier_index: Some(index),
            path: Some(paths.push(self.path, item.id)),
        }
    }

    pub fn reached(&self, threshold: &V) -> bool {
        self.value >= *threshold
    }
}
