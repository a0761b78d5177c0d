pub mod adjacency;

pub use adjacency::{AdjacencyGraph, NodeAttributes};

use crate::errors::RouteError;

use std::{fmt::Debug, hash::Hash};
use num_traits::ToPrimitive;


/// Read-only view of a graph owned by the caller
///
/// Edges are undirected: `other_endpoint` returns the far end of an edge seen
/// from either of its nodes. Lengths may be any numeric type that converts to
/// `f64`; they must be non-negative.
pub trait RouteGraph {
    /// Node identity, used as the key of the search state
    type Node: Copy + Eq + Hash + Debug;
    type Edge;
    type Length: ToPrimitive + Copy + Debug;

    /// Edges incident to a node
    fn edges(&self, node: Self::Node) -> impl Iterator<Item = Self::Edge>;

    fn other_endpoint(&self, edge: &Self::Edge, node: Self::Node) -> Self::Node;

    fn length(&self, edge: &Self::Edge) -> Self::Length;

    fn is_hostile(&self, node: Self::Node) -> bool;

    fn has_speed_upgrade(&self, node: Self::Node) -> bool;

    /// Edge connecting two nodes, if any
    fn edge_between(&self, from: Self::Node, to: Self::Node) -> Option<Self::Edge> {
        self.edges(from).find(|edge| self.other_endpoint(edge, from) == to)
    }
}


/// Length of an edge as a real number
/// Negative or unrepresentable lengths are programmer errors and fail the search
pub(crate) fn edge_length<G: RouteGraph>(graph: &G, edge: &G::Edge) -> Result<f64, RouteError> {
    let length = graph.length(edge)
        .to_f64()
        .filter(|length| !length.is_nan())
        .ok_or(RouteError::InvalidEdgeLength)?;

    if length < 0.0 {
        return Err(RouteError::NegativeEdgeLength { length });
    }
    Ok(length)
}
