use std::collections::HashMap;

use crate::graph::NodeId;

/// Disjoint-set forest (union-find) over node identifiers, with union by
/// rank and path compression. Kruskal's construction owns one of these for
/// the duration of a single run and discards it afterwards.
///
/// Identifiers that were never registered are created as singletons on first
/// use, matching the lazy self-healing of the mapping-keyed algorithms.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<NodeId, NodeId>,
    rank: HashMap<NodeId, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers every node as its own singleton component.
    pub fn with_nodes(nodes: &[NodeId]) -> Self {
        let mut forest = Self::new();
        for node in nodes {
            forest.ensure(node);
        }
        forest
    }

    fn ensure(&mut self, id: &str) {
        if !self.parent.contains_key(id) {
            self.parent.insert(id.to_string(), id.to_string());
            self.rank.insert(id.to_string(), 0);
        }
    }

    /// Returns the root of the component containing `id`, compressing the
    /// path walked along the way.
    pub fn find(&mut self, id: &str) -> NodeId {
        self.ensure(id);

        let mut root = id.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        let mut current = id.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// Merges the components of `a` and `b`. Returns false when they were
    /// already in the same component (i.e. the edge would close a cycle).
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            self.rank.insert(root_a, rank_a + 1);
        }

        true
    }
}
