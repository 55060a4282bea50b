use crate::constants::{CityId, Weight};
use rustc_hash::FxHashMap;
use std::fmt;

/// Default integer type for node and edge indices
pub type DefaultIdx = u32;

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// A city in the route graph
#[derive(Debug, Clone, PartialEq)]
pub struct CityNode {
    pub id: CityId,
    pub name: String,
}

impl CityNode {
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        CityNode {
            id,
            name: name.into(),
        }
    }
}

/// Undirected edge. `source` and `target` only reflect insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint opposite to `node`
    pub fn other(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// What to do when an edge between an already connected pair is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateEdgePolicy {
    KeepFirst,
    KeepLast,
    /// Keep whichever route is cheaper
    #[default]
    KeepMinimum,
}

#[derive(Debug, Clone)]
pub struct Graph {
    pub adjacency: Vec<Vec<EdgeIndex>>,
    pub nodes: Vec<CityNode>,
    pub edges: Vec<Edge>,
    names: FxHashMap<CityId, String>,
    node_ids: FxHashMap<CityId, NodeIndex>,
    pairs: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex>,
    duplicate_policy: DuplicateEdgePolicy,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            names: FxHashMap::default(),
            node_ids: FxHashMap::default(),
            pairs: FxHashMap::default(),
            duplicate_policy: DuplicateEdgePolicy::default(),
        }
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicateEdgePolicy) {
        self.duplicate_policy = policy;
    }

    /// Adds a new city to the graph.
    ///
    /// If a city with the same id already exists its name is replaced and
    /// the existing index is returned.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    pub fn add_node(&mut self, node: CityNode) -> NodeIndex {
        if let Some(&node_idx) = self.node_ids.get(&node.id) {
            self.names.insert(node.id, node.name.clone());
            self.nodes[node_idx.index()] = node;
            return node_idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency.push(Vec::new());
        self.node_ids.insert(node.id, node_idx);
        self.names.insert(node.id, node.name.clone());
        self.nodes.push(node);

        node_idx
    }

    /// Add an undirected `edge` to the graph.
    ///
    /// An edge between a pair that is already connected is resolved with the
    /// graph's [`DuplicateEdgePolicy`]. Self-loops are ignored.
    ///
    /// **Panics** if the source or target node does not exist
    ///
    /// Returns the index of the edge connecting the pair, or `None` for a self-loop.
    pub fn add_edge(&mut self, edge: Edge) -> Option<EdgeIndex> {
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );

        if edge.source == edge.target {
            return None;
        }

        let key = pair_key(edge.source, edge.target);
        if let Some(&edge_idx) = self.pairs.get(&key) {
            let old_edge = &mut self.edges[edge_idx.index()];
            match self.duplicate_policy {
                DuplicateEdgePolicy::KeepFirst => {}
                DuplicateEdgePolicy::KeepLast => old_edge.weight = edge.weight,
                DuplicateEdgePolicy::KeepMinimum => {
                    if edge.weight < old_edge.weight {
                        old_edge.weight = edge.weight;
                    }
                }
            }
            return Some(edge_idx);
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency[edge.source.index()].push(edge_idx);
        self.adjacency[edge.target.index()].push(edge_idx);
        self.pairs.insert(key, edge_idx);
        self.edges.push(edge);

        Some(edge_idx)
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&CityNode> {
        self.nodes.get(node_idx.index())
    }

    /// Looks up the index of the city with the given id
    pub fn node_index_of(&self, id: CityId) -> Option<NodeIndex> {
        self.node_ids.get(&id).copied()
    }

    /// Mapping from city id to display name
    pub fn names(&self) -> &FxHashMap<CityId, String> {
        &self.names
    }

    /// Returns the edge connecting `a` and `b`, in either direction
    pub fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.pairs
            .get(&pair_key(a, b))
            .map(|edge_idx| &self.edges[edge_idx.index()])
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &CityNode> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Iterates over `(neighbor, weight)` for all edges touching `node_idx`
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.other(node_idx), edge.weight)
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists every connection as `Origin -> Destination`, one per line
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(
                f,
                "{} -> {}",
                self.nodes[edge.source.index()].name,
                self.nodes[edge.target.index()].name
            )?;
        }
        Ok(())
    }
}

fn pair_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Macro to create an undirected edge between source and target with a weight
///
/// edge!(0, 1, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
}

/// Macro to create a city with a given id and name
/// city!(0, "Braga")
#[macro_export]
macro_rules! city {
    ($id:expr, $name:expr) => {
        $crate::graph::CityNode::new($id, $name)
    };
}
