use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Minimum-priority frontier for the shortest-path and spanning-tree loops.
///
/// This is a plain binary heap without decrease-key: callers push a fresh
/// entry whenever a priority improves and skip stale entries on pop. The
/// algorithms using it check a settled/visited table after every pop, so
/// duplicates are expected and harmless.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Pushes an item at the given priority. Pushing the same item again at
    /// a better priority is the intended way to "update" it.
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes and returns the lowest-priority item.
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}
