use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::entity::{Edge, Node};
use crate::error::{GraphError, Result};
use crate::id::{EdgeId, GraphId, IdAllocator, NodeId};
use crate::sorted::SortedIds;

/// Construction-time settings for a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Directed graphs index each edge under its `from` node only. Undirected
    /// graphs index it under both endpoints.
    pub directed: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::directed()
    }
}

/// In-memory graph: id-sorted node/edge sequences, id lookup maps and a
/// per-node adjacency index.
///
/// The graph owns its nodes and edges; edges refer to their endpoints by id.
/// `outgoing[n]` holds the ids of edges leaving `n`, sorted and deduplicated.
/// For undirected graphs every edge is also listed under its `to` node, so
/// "outgoing" means "incident". `placeholders` holds endpoints that arrived
/// as bare ids and can still be replaced by the real node.
#[derive(Debug, Clone)]
pub struct Graph {
    id: GraphId,
    options: GraphOptions,
    node_order: SortedIds<NodeId>,
    edge_order: SortedIds<EdgeId>,
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    outgoing: HashMap<NodeId, SortedIds<EdgeId>>,
    placeholders: HashSet<NodeId>,
}

impl Graph {
    /// Empty directed graph.
    pub fn new(ids: &IdAllocator) -> Self {
        Self::with_options(ids, GraphOptions::directed())
    }

    /// Empty undirected graph.
    pub fn undirected(ids: &IdAllocator) -> Self {
        Self::with_options(ids, GraphOptions::undirected())
    }

    pub fn with_options(ids: &IdAllocator, options: GraphOptions) -> Self {
        Self::with_capacity(ids, options, 0, 0)
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(
        ids: &IdAllocator,
        options: GraphOptions,
        node_count: usize,
        edge_count: usize,
    ) -> Self {
        Self {
            id: ids.next_graph(),
            options,
            node_order: SortedIds::with_capacity(node_count),
            edge_order: SortedIds::with_capacity(edge_count),
            nodes: HashMap::with_capacity(node_count),
            edges: HashMap::with_capacity(edge_count),
            outgoing: HashMap::with_capacity(node_count),
            placeholders: HashSet::new(),
        }
    }

    /// Build from initial nodes and edges. Nodes are added first, then edges,
    /// each in input order, exactly as repeated `add_node` / `add_edge` calls.
    pub fn from_parts<N, E>(ids: &IdAllocator, nodes: N, edges: E, options: GraphOptions) -> Self
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::with_options(ids, options);
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn has_node(&self, node: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(&node.into())
    }

    pub fn has_edge(&self, edge: impl Into<EdgeId>) -> bool {
        self.edges.contains_key(&edge.into())
    }

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(&id.into())
    }

    /// Mutable access for attribute/meta slots. Ids and endpoints stay fixed.
    pub fn node_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut Node> {
        self.nodes.get_mut(&id.into())
    }

    pub fn edge(&self, id: impl Into<EdgeId>) -> Option<&Edge> {
        self.edges.get(&id.into())
    }

    pub fn edge_mut(&mut self, id: impl Into<EdgeId>) -> Option<&mut Edge> {
        self.edges.get_mut(&id.into())
    }

    /// Snapshot of all nodes in ascending id order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.node_order.iter().map(|id| &self.nodes[id]).collect()
    }

    /// Snapshot of all edges in ascending id order.
    pub fn edges(&self) -> Vec<&Edge> {
        self.edge_order.iter().map(|id| &self.edges[id]).collect()
    }

    pub fn node_ids(&self) -> &[NodeId] {
        self.node_order.as_slice()
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        self.edge_order.as_slice()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a node. Returns false (and changes nothing) if a node with the
    /// same id is already present, unless that node is a bare placeholder
    /// left by `add_edge`: then `node` takes its place and keeps its edges.
    pub fn add_node(&mut self, node: Node) -> bool {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            if !self.placeholders.remove(&id) {
                return false;
            }
            self.nodes.insert(id, node);
            debug!(graph = %self.id, node = %id, "placeholder replaced");
            return true;
        }

        self.node_order.insert(id);
        self.outgoing.insert(id, SortedIds::new());
        self.nodes.insert(id, node);
        debug!(graph = %self.id, node = %id, "node added");
        true
    }

    /// Insert an edge and index it. Returns false if the edge is already
    /// present.
    ///
    /// Endpoints missing from the graph are added from the node copies the
    /// edge was built with. An edge that no longer carries them (one taken
    /// out of a graph) gets a bare placeholder per missing endpoint, which a
    /// later `add_node` fills in.
    pub fn add_edge(&mut self, mut edge: Edge) -> bool {
        let id = edge.id();
        if self.edges.contains_key(&id) {
            return false;
        }

        let (from, to) = (edge.from(), edge.to());
        let endpoints = edge.take_endpoints();
        for endpoint in [from, to] {
            if self.has_node(endpoint) {
                continue;
            }
            match endpoints.iter().flatten().find(|node| node.id() == endpoint) {
                Some(node) => {
                    debug!(graph = %self.id, node = %endpoint, edge = %id, "adding endpoint");
                    self.add_node(node.clone());
                }
                None => {
                    debug!(
                        graph = %self.id,
                        node = %endpoint,
                        edge = %id,
                        "adding placeholder endpoint"
                    );
                    self.add_node(Node::placeholder(endpoint));
                    self.placeholders.insert(endpoint);
                }
            }
        }

        self.edge_order.insert(id);
        self.edges.insert(id, edge);
        self.outgoing.entry(from).or_default().insert(id);
        if !self.options.directed {
            self.outgoing.entry(to).or_default().insert(id);
        }
        debug!(graph = %self.id, edge = %id, %from, %to, "edge added");
        true
    }

    /// Remove an edge from every index. Returns the edge, or `None` if it was
    /// not in the graph.
    pub fn remove_edge(&mut self, edge: impl Into<EdgeId>) -> Option<Edge> {
        let id = edge.into();
        let removed = self.edges.remove(&id)?;

        self.edge_order.remove(&id);
        if let Some(list) = self.outgoing.get_mut(&removed.from()) {
            list.remove(&id);
        }
        if !self.options.directed {
            if let Some(list) = self.outgoing.get_mut(&removed.to()) {
                list.remove(&id);
            }
        }
        debug!(graph = %self.id, edge = %id, "edge removed");
        Some(removed)
    }

    /// Remove a node and every edge that has it as an endpoint.
    ///
    /// Edges go first, then the node. Returns the removed edges in ascending
    /// id order; empty if the node was not in the graph.
    pub fn remove_node(&mut self, node: impl Into<NodeId>) -> Vec<Edge> {
        let id = node.into();
        if !self.has_node(id) {
            return Vec::new();
        }

        let mut incident: SortedIds<EdgeId> = self.outgoing.get(&id).cloned().unwrap_or_default();
        if self.options.directed {
            // No reverse index: incoming edges are only reachable by scan.
            for edge_id in self.scan_incoming(id) {
                incident.insert(edge_id);
            }
        }

        let removed: Vec<Edge> = incident
            .iter()
            .filter_map(|&edge_id| self.remove_edge(edge_id))
            .collect();

        self.node_order.remove(&id);
        self.outgoing.remove(&id);
        self.placeholders.remove(&id);
        self.nodes.remove(&id);
        debug!(graph = %self.id, node = %id, cascaded = removed.len(), "node removed");
        removed
    }

    /// Edges leaving `node` (all incident edges for undirected graphs), in
    /// ascending id order. Reads the adjacency index directly.
    pub fn outgoing_edges(&self, node: impl Into<NodeId>) -> Result<Vec<&Edge>> {
        let id = node.into();
        let list = self.outgoing.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        Ok(list.iter().map(|edge_id| &self.edges[edge_id]).collect())
    }

    /// Edges arriving at `node`, in ascending id order.
    ///
    /// Undirected graphs answer from the adjacency index. Directed graphs keep
    /// no reverse index and scan every edge: O(E).
    pub fn incoming_edges(&self, node: impl Into<NodeId>) -> Result<Vec<&Edge>> {
        let id = node.into();
        if !self.has_node(id) {
            return Err(GraphError::NodeNotFound(id));
        }
        if !self.options.directed {
            return self.outgoing_edges(id);
        }
        Ok(self.scan_incoming(id).map(|edge_id| &self.edges[&edge_id]).collect())
    }

    /// Traversable edges from `node`, each paired with the node on its far
    /// side: `to` for directed graphs, the opposite endpoint otherwise.
    pub fn neighbors(&self, node: impl Into<NodeId>) -> Result<Vec<(&Edge, NodeId)>> {
        let id = node.into();
        let directed = self.options.directed;
        Ok(self
            .outgoing_edges(id)?
            .into_iter()
            .map(|edge| {
                let far = if directed {
                    edge.to()
                } else {
                    edge.opposite(id).unwrap_or(edge.to())
                };
                (edge, far)
            })
            .collect())
    }

    fn scan_incoming(&self, id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_order
            .iter()
            .copied()
            .filter(move |edge_id| self.edges[edge_id].to() == id)
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let nodes_mem = self.nodes.len() * (size_of::<NodeId>() * 2 + size_of::<Node>() + 40);
        let edges_mem = self.edges.len() * (size_of::<EdgeId>() * 2 + size_of::<Edge>() + 40);
        let adjacency: usize = self
            .outgoing
            .values()
            .map(|list| list.len() * size_of::<EdgeId>() + size_of::<SortedIds<EdgeId>>())
            .sum();

        nodes_mem + edges_mem + adjacency
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(IdAllocator::global())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Graph({})>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::Slots;
    use serde_json::json;

    fn nodes(ids: &IdAllocator, n: usize) -> Vec<Node> {
        (0..n).map(|_| Node::new(ids)).collect()
    }

    /// A→B, B→C, A→C, C→D
    fn diamond(ids: &IdAllocator, options: GraphOptions) -> (Graph, Vec<NodeId>, Vec<EdgeId>) {
        let n = nodes(ids, 4);
        let e = vec![
            Edge::new(ids, &n[0], &n[1]),
            Edge::new(ids, &n[1], &n[2]),
            Edge::new(ids, &n[0], &n[2]),
            Edge::new(ids, &n[2], &n[3]),
        ];
        let node_ids = n.iter().map(Node::id).collect();
        let edge_ids = e.iter().map(Edge::id).collect();
        (Graph::from_parts(ids, n, e, options), node_ids, edge_ids)
    }

    // --- Construction ---

    #[test]
    fn test_default_is_directed() {
        let ids = IdAllocator::new();
        assert!(Graph::new(&ids).is_directed());
        assert!(GraphOptions::default().directed);
        assert!(!Graph::undirected(&ids).is_directed());
    }

    #[test]
    fn test_graph_ids_unique() {
        let ids = IdAllocator::new();
        let a = Graph::new(&ids);
        let b = Graph::new(&ids);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.to_string(), "<Graph(Graph_1)>");
    }

    #[test]
    fn test_from_parts_counts() {
        let ids = IdAllocator::new();
        let (g, _, _) = diamond(&ids, GraphOptions::directed());
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
    }

    // --- Nodes ---

    #[test]
    fn test_nodes_sorted_regardless_of_insert_order() {
        let ids = IdAllocator::new();
        let mut n = nodes(&ids, 12);
        n.reverse();
        let mut g = Graph::new(&ids);
        for node in n {
            g.add_node(node);
        }
        let order: Vec<u64> = g.nodes().iter().map(|n| n.id().seq()).collect();
        assert_eq!(order, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_add_node_idempotent() {
        let ids = IdAllocator::new();
        let node = Node::new(&ids);
        let mut g = Graph::new(&ids);
        assert!(g.add_node(node.clone()));
        assert!(!g.add_node(node.clone()));
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.nodes().len(), 1);
    }

    #[test]
    fn test_has_node_by_entity_id_and_string() {
        let ids = IdAllocator::new();
        let node = Node::new(&ids);
        let mut g = Graph::new(&ids);
        g.add_node(node.clone());
        assert!(g.has_node(&node));
        assert!(g.has_node(node.id()));
        let parsed: NodeId = node.id().to_string().parse().unwrap();
        assert!(g.has_node(parsed));
        assert!(!g.has_node(Node::new(&ids).id()));
    }

    #[test]
    fn test_get_node_absent() {
        let ids = IdAllocator::new();
        let g = Graph::new(&ids);
        assert!(g.node(Node::new(&ids).id()).is_none());
    }

    #[test]
    fn test_get_edge_absent() {
        let ids = IdAllocator::new();
        let (mut g, n, e) = diamond(&ids, GraphOptions::directed());
        let a = Node::new(&ids);
        let stranger = Edge::new(&ids, &a, &a);
        assert!(g.edge(&stranger).is_none());
        assert!(g.edge(stranger.id()).is_none());
        assert!(!g.has_edge(&stranger));
        // Removed edges read as absent too
        g.remove_node(n[0]);
        assert!(g.edge(e[0]).is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let ids = IdAllocator::new();
        let (g, _, _) = diamond(&ids, GraphOptions::directed());
        let mut snapshot = g.nodes();
        snapshot.clear();
        assert_eq!(g.nodes().len(), 4);
        let mut edges = g.edges();
        edges.pop();
        assert_eq!(g.edges().len(), 4);
    }

    #[test]
    fn test_node_mut_writes_attributes() {
        let ids = IdAllocator::new();
        let node = Node::new(&ids);
        let id = node.id();
        let mut g = Graph::new(&ids);
        g.add_node(node);
        g.node_mut(id).unwrap().set_attr("x", 12.5);
        assert_eq!(g.node(id).unwrap().attr("x"), Some(&json!(12.5)));
    }

    // --- Edges ---

    #[test]
    fn test_add_edge_adds_endpoints() {
        let ids = IdAllocator::new();
        let a = Node::new(&ids);
        let b = Node::new(&ids);
        let e = Edge::new(&ids, &a, &b);
        let mut g = Graph::new(&ids);
        assert!(g.add_edge(e.clone()));
        assert!(g.has_node(&a));
        assert!(g.has_node(&b));
        assert!(g.has_edge(&e));
        assert!(!g.add_edge(e));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_keeps_endpoint_attributes() {
        let ids = IdAllocator::new();
        let mut a = Node::new(&ids);
        a.set_attr("label", "A");
        let b = Node::with_attributes(&ids, [("label", "B")].into_iter().collect::<Slots>());
        let e = Edge::new(&ids, &a, &b);

        let mut g = Graph::new(&ids);
        assert!(g.add_edge(e.clone()));
        assert_eq!(g.node(&a).unwrap().attr("label"), Some(&json!("A")));
        assert_eq!(g.node(&b).unwrap().attr("label"), Some(&json!("B")));
        // The real nodes are already in, so adding them again is a no-op
        assert!(!g.add_node(a.clone()));
        assert_eq!(g.node_count(), 2);
        // Stored edges compare equal to the caller's copy
        assert_eq!(g.edge(&e), Some(&e));
    }

    #[test]
    fn test_add_node_fills_placeholder() {
        let ids = IdAllocator::new();
        let mut a = Node::new(&ids);
        a.set_attr("label", "A");
        let b = Node::new(&ids);
        let e = Edge::new(&ids, &a, &b);

        // An edge taken out of one graph no longer carries its endpoints
        let mut first = Graph::new(&ids);
        first.add_edge(e);
        let stored = first.remove_node(&b).pop().unwrap();

        let mut second = Graph::new(&ids);
        assert!(second.add_edge(stored.clone()));
        assert!(second.has_node(&a));
        assert_eq!(second.node(&a).unwrap().attr("label"), None);

        assert!(second.add_node(a.clone()));
        assert_eq!(second.node(&a).unwrap().attr("label"), Some(&json!("A")));
        assert!(!second.add_node(a.clone()));
        assert_eq!(second.node_count(), 2);
        let out: Vec<EdgeId> = second.outgoing_edges(&a).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(out, vec![stored.id()]);
    }

    #[test]
    fn test_edges_sorted() {
        let ids = IdAllocator::new();
        let n = nodes(&ids, 3);
        let mut e: Vec<Edge> = (0..11)
            .map(|i| Edge::new(&ids, &n[i % 3], &n[(i + 1) % 3]))
            .collect();
        e.reverse();
        let g = Graph::from_parts(&ids, n, e, GraphOptions::directed());
        let order: Vec<EdgeId> = g.edges().iter().map(|e| e.id()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(g.edge_ids(), sorted.as_slice());
    }

    #[test]
    fn test_remove_edge() {
        let ids = IdAllocator::new();
        let (mut g, n, e) = diamond(&ids, GraphOptions::directed());
        let removed = g.remove_edge(e[0]).unwrap();
        assert_eq!(removed.id(), e[0]);
        assert!(!g.has_edge(e[0]));
        assert!(g.outgoing_edges(n[0]).unwrap().iter().all(|edge| edge.id() != e[0]));
        // Nodes stay
        assert!(g.has_node(n[0]));
        assert!(g.has_node(n[1]));
        // Second removal is a no-op
        assert!(g.remove_edge(e[0]).is_none());
    }

    #[test]
    fn test_remove_edge_undirected_clears_both_lists() {
        let ids = IdAllocator::new();
        let (mut g, n, e) = diamond(&ids, GraphOptions::undirected());
        g.remove_edge(e[0]);
        assert!(g.outgoing_edges(n[0]).unwrap().iter().all(|edge| edge.id() != e[0]));
        assert!(g.outgoing_edges(n[1]).unwrap().iter().all(|edge| edge.id() != e[0]));
    }

    // --- Adjacency ---

    #[test]
    fn test_directed_adjacency() {
        let ids = IdAllocator::new();
        let (g, n, e) = diamond(&ids, GraphOptions::directed());
        let out_a: Vec<EdgeId> = g.outgoing_edges(n[0]).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(out_a, vec![e[0], e[2]]);

        let in_b: Vec<EdgeId> = g.incoming_edges(n[1]).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(in_b, vec![e[0]]);

        // A→B does not show up as outgoing from B
        assert!(g.outgoing_edges(n[1]).unwrap().iter().all(|edge| edge.id() != e[0]));

        let in_c: Vec<EdgeId> = g.incoming_edges(n[2]).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(in_c, vec![e[1], e[2]]);
    }

    #[test]
    fn test_undirected_incoming_equals_outgoing() {
        let ids = IdAllocator::new();
        let (g, n, _) = diamond(&ids, GraphOptions::undirected());
        for &id in &n {
            let out: Vec<EdgeId> = g.outgoing_edges(id).unwrap().iter().map(|e| e.id()).collect();
            let inc: Vec<EdgeId> = g.incoming_edges(id).unwrap().iter().map(|e| e.id()).collect();
            assert_eq!(out, inc);
        }
        // C touches B→C, A→C, C→D
        assert_eq!(g.outgoing_edges(n[2]).unwrap().len(), 3);
    }

    #[test]
    fn test_undirected_self_loop_listed_once() {
        let ids = IdAllocator::new();
        let a = Node::new(&ids);
        let lp = Edge::new(&ids, &a, &a);
        let mut g = Graph::undirected(&ids);
        g.add_edge(lp);
        assert_eq!(g.outgoing_edges(&a).unwrap().len(), 1);
        assert_eq!(g.remove_node(&a).len(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_adjacency_missing_node() {
        let ids = IdAllocator::new();
        let (g, _, _) = diamond(&ids, GraphOptions::directed());
        let stranger = Node::new(&ids).id();
        assert_eq!(g.outgoing_edges(stranger).unwrap_err(), GraphError::NodeNotFound(stranger));
        assert_eq!(g.incoming_edges(stranger).unwrap_err(), GraphError::NodeNotFound(stranger));
        assert!(g.neighbors(stranger).is_err());
    }

    #[test]
    fn test_neighbors_far_side() {
        let ids = IdAllocator::new();
        let (g, n, _) = diamond(&ids, GraphOptions::undirected());
        // From D, the only incident edge is C→D; the far side is C
        let far: Vec<NodeId> = g.neighbors(n[3]).unwrap().into_iter().map(|(_, f)| f).collect();
        assert_eq!(far, vec![n[2]]);

        let (g, n, _) = diamond(&ids, GraphOptions::directed());
        assert!(g.neighbors(n[3]).unwrap().is_empty());
    }

    // --- Node removal cascade ---

    #[test]
    fn test_remove_node_cascades_outgoing_and_incoming() {
        let ids = IdAllocator::new();
        let (mut g, n, e) = diamond(&ids, GraphOptions::directed());
        // C has incoming B→C, A→C and outgoing C→D
        let removed: Vec<EdgeId> = g.remove_node(n[2]).iter().map(|e| e.id()).collect();
        assert_eq!(removed, vec![e[1], e[2], e[3]]);
        for id in &removed {
            assert!(!g.has_edge(*id));
        }
        assert!(!g.has_node(n[2]));
        assert_eq!(g.edge_count(), 1);
        // Every remaining edge still has both endpoints
        for edge in g.edges() {
            assert!(g.has_node(edge.from()) && g.has_node(edge.to()));
        }
    }

    #[test]
    fn test_remove_node_undirected() {
        let ids = IdAllocator::new();
        let (mut g, n, _) = diamond(&ids, GraphOptions::undirected());
        let removed = g.remove_node(n[0]);
        assert_eq!(removed.len(), 2);
        assert_eq!(g.outgoing_edges(n[1]).unwrap().len(), 1);
        assert_eq!(g.outgoing_edges(n[2]).unwrap().len(), 2);
    }

    #[test]
    fn test_remove_absent_node_is_noop() {
        let ids = IdAllocator::new();
        let (mut g, _, _) = diamond(&ids, GraphOptions::directed());
        let removed = g.remove_node(Node::new(&ids).id());
        assert!(removed.is_empty());
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_readd_after_remove() {
        let ids = IdAllocator::new();
        let a = Node::new(&ids);
        let b = Node::new(&ids);
        let e = Edge::new(&ids, &a, &b);
        let mut g = Graph::new(&ids);
        g.add_edge(e.clone());
        g.remove_node(&a);
        assert!(g.add_node(a.clone()));
        assert!(g.add_edge(e));
        assert_eq!(g.outgoing_edges(&a).unwrap().len(), 1);
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let ids = IdAllocator::new();
        let (g, _, _) = diamond(&ids, GraphOptions::directed());
        assert!(g.memory_usage() > 0);
    }
}
