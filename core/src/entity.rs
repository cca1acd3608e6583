use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::id::{EdgeId, IdAllocator, NodeId};
use crate::slots::Slots;

/// A graph vertex.
///
/// `attributes` belong to the caller (e.g. a layout component storing drawing
/// handles). `meta` is a free-form scratch map that can be wiped in one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    attributes: Slots,
    meta: Slots,
}

impl Node {
    pub fn new(ids: &IdAllocator) -> Self {
        Self::with_attributes(ids, Slots::new())
    }

    pub fn with_attributes(ids: &IdAllocator, attributes: impl Into<Slots>) -> Self {
        Self {
            id: ids.next_node(),
            attributes: attributes.into(),
            meta: Slots::new(),
        }
    }

    /// Bare node for an id the graph has seen only as an edge endpoint.
    pub(crate) fn placeholder(id: NodeId) -> Self {
        Self {
            id,
            attributes: Slots::new(),
            meta: Slots::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attr_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes.get_as(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        self.attributes.set(key, value)
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> &Slots {
        &self.attributes
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        self.meta.set(key, value)
    }

    pub fn remove_meta(&mut self, key: &str) -> Option<Value> {
        self.meta.remove(key)
    }

    pub fn reset_meta(&mut self) {
        self.meta.clear();
    }

    pub fn metadata(&self) -> &Slots {
        &self.meta
    }
}

impl From<&Node> for NodeId {
    fn from(node: &Node) -> Self {
        node.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Node({})>", self.id)
    }
}

/// A directed arc between two nodes.
///
/// Endpoints are held as ids and never change after construction. A freshly
/// built edge also carries copies of its endpoint nodes, which the first
/// graph it is added to uses for endpoints it does not know yet. Edges stored
/// in a graph no longer carry them.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    attributes: Slots,
    meta: Slots,
    endpoints: Option<Box<[Node; 2]>>,
}

impl Edge {
    pub fn new(ids: &IdAllocator, from: &Node, to: &Node) -> Self {
        Self::with_attributes(ids, from, to, Slots::new())
    }

    pub fn with_attributes(
        ids: &IdAllocator,
        from: &Node,
        to: &Node,
        attributes: impl Into<Slots>,
    ) -> Self {
        Self {
            id: ids.next_edge(),
            from: from.id(),
            to: to.id(),
            attributes: attributes.into(),
            meta: Slots::new(),
            endpoints: Some(Box::new([from.clone(), to.clone()])),
        }
    }

    /// Hand over the endpoint copies, leaving the edge without them.
    pub(crate) fn take_endpoints(&mut self) -> Option<[Node; 2]> {
        self.endpoints.take().map(|nodes| *nodes)
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint on the other side of `node`, or `None` if `node` is not
    /// an endpoint. A self-loop returns its single endpoint.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.from {
            Some(self.to)
        } else if node == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attr_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes.get_as(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        self.attributes.set(key, value)
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> &Slots {
        &self.attributes
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        self.meta.set(key, value)
    }

    pub fn remove_meta(&mut self, key: &str) -> Option<Value> {
        self.meta.remove(key)
    }

    pub fn reset_meta(&mut self) {
        self.meta.clear();
    }

    pub fn metadata(&self) -> &Slots {
        &self.meta
    }
}

// Endpoint copies are transport only; equality is over what the graph stores.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.from == other.from
            && self.to == other.to
            && self.attributes == other.attributes
            && self.meta == other.meta
    }
}

impl From<&Edge> for EdgeId {
    fn from(edge: &Edge) -> Self {
        edge.id
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Edge({}) from {} to {}>", self.id, self.from, self.to)
    }
}
