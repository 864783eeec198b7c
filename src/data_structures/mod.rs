pub mod disjoint_set;
pub mod min_heap;

pub use disjoint_set::DisjointSet;
pub use min_heap::MinHeap;
