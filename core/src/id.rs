use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GraphError;

macro_rules! typed_id {
    ($name:ident, $prefix:literal) => {
        /// Allocator-issued identifier, displayed as `<Type>_<n>`.
        ///
        /// Ordered by the numeric sequence value, not the text: `_2` sorts
        /// before `_10`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Sequence number within this id type (starts at 1).
            pub fn seq(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", Self::PREFIX, self.0)
            }
        }

        impl FromStr for $name {
            type Err = GraphError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_seq(s, Self::PREFIX).map($name)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                *id
            }
        }
    };
}

typed_id!(NodeId, "Node");
typed_id!(EdgeId, "Edge");
typed_id!(GraphId, "Graph");

fn parse_seq(s: &str, prefix: &str) -> Result<u64, GraphError> {
    let seq = s
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u64>().ok())
        .filter(|&n| n > 0);

    seq.ok_or_else(|| GraphError::InvalidId(format!("'{}' is not a {}_<n> id", s, prefix)))
}

static GLOBAL: IdAllocator = IdAllocator::new();

/// Issues unique, monotonically increasing ids, one counter per entity type.
///
/// Ids are never reused. Allocation goes through `&self`, so one allocator can
/// be shared by everything that builds entities for the same graphs.
#[derive(Debug)]
pub struct IdAllocator {
    nodes: AtomicU64,
    edges: AtomicU64,
    graphs: AtomicU64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            nodes: AtomicU64::new(0),
            edges: AtomicU64::new(0),
            graphs: AtomicU64::new(0),
        }
    }

    /// The process-wide allocator.
    pub fn global() -> &'static IdAllocator {
        &GLOBAL
    }

    pub fn next_node(&self) -> NodeId {
        NodeId(self.nodes.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn next_edge(&self) -> EdgeId {
        EdgeId(self.edges.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn next_graph(&self) -> GraphId {
        GraphId(self.graphs.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn issued_nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn issued_edges(&self) -> u64 {
        self.edges.load(Ordering::Relaxed)
    }

    pub fn issued_graphs(&self) -> u64 {
        self.graphs.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
