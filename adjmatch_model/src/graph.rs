use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::adjacency::AdjacencyStructure;

/// Minimum distance between node positions accepted by
/// [`GraphModel::is_position_free`].
pub const MIN_NODE_DISTANCE: f64 = 40.0;

/// Stable handle for a node within a [`GraphModel`].
///
/// Handles are never reused within a model's lifetime, so an id held
/// across removals either resolves to the same node or to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    /// The underlying raw integer index.
    inner: u32,
}

impl NodeId {
    /// Creates a node handle from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the handle as a usize.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }

    /// Returns the handle as the raw integer.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.inner
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.inner)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self { inner: id }
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.inner
    }
}

/// A labeled node with its canvas position.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    x: f64,
    y: f64,
}

impl Node {
    /// The node's handle within its model.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node's label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal position.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// An unordered pair of node handles, stored normalized (smaller first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v { Self { a: u, b: v } } else { Self { a: v, b: u } }
    }

    /// Both endpoints, smaller handle first.
    #[must_use]
    pub const fn endpoints(self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// True when `id` is one of the endpoints.
    #[must_use]
    pub fn touches(self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint.
    #[must_use]
    pub fn other(self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Simple undirected graph: labeled nodes, at most one edge per unordered
/// pair, no self-loops.
///
/// Labels are generated with sequential base-26 alphabetic numbering
/// (A, B, …, Z, AA, AB, …) from a counter that only ever grows, so
/// generated labels stay unique for the life of the model even across
/// removals. Caller-supplied labels are accepted verbatim; supplying a
/// duplicate leaves later adjacency reads undefined.
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeSet<Edge>,
    counter: u64,
    next_id: u32,
}

impl GraphModel {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at `(x, y)` and returns its handle.
    ///
    /// With `name == None` the next generated label is used. An explicit
    /// name is taken as-is; the label counter still advances so generated
    /// labels never collide with positions already burned through.
    pub fn add_node(&mut self, x: f64, y: f64, name: Option<String>) -> NodeId {
        let name = match name {
            Some(name) => {
                self.counter += 1;
                name
            }
            None => self.next_label(),
        };

        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node { id, name, x, y });
        id
    }

    fn next_label(&mut self) -> String {
        let label = base26_label(self.counter);
        self.counter += 1;
        label
    }

    /// Adds the undirected edge `u`–`v`. No-op (returning false) when the
    /// endpoints coincide, when either endpoint is unknown, or when the
    /// edge already exists in either direction.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v || !self.nodes.contains_key(&u) || !self.nodes.contains_key(&v) {
            return false;
        }
        self.edges.insert(Edge::new(u, v))
    }

    /// Removes a node, cascading to its incident edges first.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_none() {
            return false;
        }
        self.edges.retain(|edge| !edge.touches(id));
        true
    }

    /// Removes the undirected edge `u`–`v` if present.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        self.edges.remove(&Edge::new(u, v))
    }

    /// True when the undirected edge `u`–`v` exists.
    #[must_use]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges.contains(&Edge::new(u, v))
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// True when `id` resolves to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterates over nodes in handle order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterates over edges in normalized order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Moves a node to a new position.
    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.x = x;
                node.y = y;
                true
            }
            None => false,
        }
    }

    /// True when no existing node lies within [`MIN_NODE_DISTANCE`] of
    /// `(x, y)`.
    #[must_use]
    pub fn is_position_free(&self, x: f64, y: f64) -> bool {
        self.nodes
            .values()
            .all(|node| (node.x - x).hypot(node.y - y) >= MIN_NODE_DISTANCE)
    }

    /// Flattens the graph into its adjacency structure: every node label
    /// mapped to the labels one edge away. Pure and repeatable.
    #[must_use]
    pub fn adjacency_structure(&self) -> AdjacencyStructure {
        let mut structure = AdjacencyStructure::new();
        for node in self.nodes.values() {
            structure.insert_entity(&node.name);
        }
        for edge in &self.edges {
            let (u, v) = edge.endpoints();
            if let (Some(u), Some(v)) = (self.nodes.get(&u), self.nodes.get(&v)) {
                structure.link(&u.name, &v.name);
            }
        }
        structure
    }

    /// Clears all nodes and edges and reinitializes the label counter.
    pub fn reset(&mut self) {
        debug!("GraphModel::reset ({} nodes dropped)", self.nodes.len());
        self.nodes.clear();
        self.edges.clear();
        self.counter = 0;
        self.next_id = 0;
    }

    /// Current label-generation counter.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Overrides the label-generation counter. Only the persistence layer
    /// should need this, when restoring a saved exercise.
    pub fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }
}

/// Sequential base-26 alphabetic numbering: 0 → "A", 25 → "Z", 26 → "AA",
/// matching spreadsheet column naming.
fn base26_label(mut n: u64) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}
