//! graphite-core: In-memory graph container and shortest-path engine.
//!
//! Nodes and edges are plain values identified by allocator-issued ids.
//! A [`Graph`] owns the entities it contains and keeps them in id-sorted
//! sequences with O(1) id lookup and a per-node adjacency index. Shortest
//! paths use Dijkstra over a caller-supplied edge-weight function.
//!
//! ```
//! use graphite_core::{Edge, Graph, GraphOptions, IdAllocator, Node};
//!
//! let ids = IdAllocator::new();
//! let a = Node::new(&ids);
//! let b = Node::new(&ids);
//! let ab = Edge::new(&ids, &a, &b);
//! let (start, end) = (a.id(), b.id());
//!
//! let graph = Graph::from_parts(&ids, [a, b], [ab], GraphOptions::directed());
//! let path = graph.shortest_path(start, end, |_, _| 1.0).unwrap().unwrap();
//! assert_eq!(path.len(), 1);
//! ```

mod entity;
mod error;
mod graph;
mod id;
mod slots;
mod sorted;
mod traversal;

pub use entity::{Edge, Node};
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphOptions};
pub use id::{EdgeId, GraphId, IdAllocator, NodeId};
pub use slots::Slots;
pub use sorted::{locate, SortedIds};
pub use traversal::{shortest_path, shortest_path_with_heuristic, ShortestPath};
