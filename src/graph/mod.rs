pub mod undirected;

pub use undirected::{Edge, NodeId, UndirectedGraph};
