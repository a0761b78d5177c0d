use crate::errors::GraphError;
use super::RouteGraph;

use std::fmt::Debug;
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Per-node flags read by the dynamic cost model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeAttributes {
    pub hostile: bool,
    pub speed_upgrade: bool,
}

impl NodeAttributes {

    pub fn hostile() -> Self {
        Self { hostile: true, speed_upgrade: false }
    }

    pub fn speed_upgrade() -> Self {
        Self { hostile: false, speed_upgrade: true }
    }
}


/// Undirected edge between two node indices
#[derive(Clone, Debug, PartialEq)]
struct Edge<L> {
    a: usize,
    b: usize,
    length: L,
}


/// In-memory undirected graph
/// Nodes are dense indices handed out by `add_node`, edges are indices into
/// the edge list, each node keeps the indices of its incident edges
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<L = u32> {
    nodes: Vec<NodeAttributes>,
    edges: Vec<Edge<L>>,
    adjacency: Vec<Vec<usize>>, // node -> incident edge indices
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<L> AdjacencyGraph<L>
where
    L: ToPrimitive + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index
    pub fn add_node(&mut self, attributes: NodeAttributes) -> usize {
        self.nodes.push(attributes);
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Add an undirected edge and return its index
    pub fn add_edge(&mut self, a: usize, b: usize, length: L) -> Result<usize, GraphError> {
        for node in [a, b] {
            if node >= self.nodes.len() {
                return Err(GraphError::UnknownNode(node));
            }
        }

        let real = length.to_f64().unwrap_or(f64::NAN);
        if !real.is_finite() || real < 0.0 {
            return Err(GraphError::InvalidLength(real));
        }

        let index = self.edges.len();
        self.edges.push(Edge { a, b, length });
        self.adjacency[a].push(index);
        if a != b {
            self.adjacency[b].push(index);
        }
        Ok(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn attributes(&self, node: usize) -> Option<&NodeAttributes> {
        self.nodes.get(node)
    }

    pub fn attributes_mut(&mut self, node: usize) -> Option<&mut NodeAttributes> {
        self.nodes.get_mut(node)
    }

    /// Endpoints of an edge
    pub fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        self.edges.get(edge).map(|e| (e.a, e.b))
    }
}

impl<L> RouteGraph for AdjacencyGraph<L>
where
    L: ToPrimitive + Copy + Debug,
{
    type Node = usize;
    type Edge = usize;
    type Length = L;

    fn edges(&self, node: usize) -> impl Iterator<Item = usize> {
        self.adjacency
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    fn other_endpoint(&self, edge: &usize, node: usize) -> usize {
        let e = &self.edges[*edge];
        if e.a == node { e.b } else { e.a }
    }

    fn length(&self, edge: &usize) -> L {
        self.edges[*edge].length
    }

    fn is_hostile(&self, node: usize) -> bool {
        self.nodes.get(node).is_some_and(|n| n.hostile)
    }

    fn has_speed_upgrade(&self, node: usize) -> bool {
        self.nodes.get(node).is_some_and(|n| n.speed_upgrade)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_undirected() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let a = graph.add_node(NodeAttributes::default());
        let b = graph.add_node(NodeAttributes::hostile());
        let edge = graph.add_edge(a, b, 4).unwrap();

        assert_eq!(graph.edges(a).collect::<Vec<_>>(), vec![edge]);
        assert_eq!(graph.edges(b).collect::<Vec<_>>(), vec![edge]);
        assert_eq!(graph.other_endpoint(&edge, a), b);
        assert_eq!(graph.other_endpoint(&edge, b), a);
        assert_eq!(graph.length(&edge), 4);
        assert_eq!(graph.edge_between(b, a), Some(edge));
        assert!(graph.is_hostile(b));
        assert!(!graph.has_speed_upgrade(b));
    }

    #[test]
    fn test_add_edge_rejects_unknown_node() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let a = graph.add_node(NodeAttributes::default());
        assert_eq!(graph.add_edge(a, 3, 1), Err(GraphError::UnknownNode(3)));
    }

    #[test]
    fn test_add_edge_rejects_negative_length() {
        let mut graph: AdjacencyGraph<f64> = AdjacencyGraph::new();
        let a = graph.add_node(NodeAttributes::default());
        let b = graph.add_node(NodeAttributes::default());
        assert_eq!(graph.add_edge(a, b, -1.5), Err(GraphError::InvalidLength(-1.5)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_no_edge_between_unconnected_nodes() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let a = graph.add_node(NodeAttributes::default());
        let b = graph.add_node(NodeAttributes::speed_upgrade());
        assert_eq!(graph.edge_between(a, b), None);
        assert_eq!(graph.edges(7).count(), 0);
    }

    #[test]
    fn test_attributes_can_be_changed_after_insertion() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let a = graph.add_node(NodeAttributes::default());
        let b = graph.add_node(NodeAttributes::default());
        let edge = graph.add_edge(a, b, 2).unwrap();

        assert_eq!(graph.attributes(b), Some(&NodeAttributes::default()));
        assert_eq!(graph.endpoints(edge), Some((a, b)));
        assert_eq!(graph.endpoints(edge + 1), None);

        if let Some(attributes) = graph.attributes_mut(b) {
            attributes.hostile = true;
        }
        assert!(graph.is_hostile(b));
        assert_eq!(graph.attributes(b), Some(&NodeAttributes::hostile()));
        assert!(graph.attributes_mut(5).is_none());
    }
}
