pub mod depth_first;

pub use depth_first::{ExploreMode, Explorer, ExplorerConfig, NeighborOrder, explore};

use std::{fmt::Debug, hash::Hash};


/// Handle on a position that lives outside the search
///
/// Only the current node and its direct neighbors are visible. Moving changes
/// what `current_id`, `neighbors` and `is_at_target` report, and there is no
/// way to jump back: returning to a node means moving there.
pub trait PositionCursor {
    type Id: Copy + Eq + Ord + Hash + Debug;
    type Error: std::error::Error + Send + Sync + 'static;

    fn current_id(&self) -> Self::Id;

    /// Neighbors of the current node with their signal toward the target
    fn neighbors(&self) -> Vec<Neighbor<Self::Id>>;

    /// Move to a neighbor of the current node
    fn move_to(&mut self, id: Self::Id) -> Result<(), Self::Error>;

    fn is_at_target(&self) -> bool;
}


/// Neighbor seen from the current position
/// A stronger signal means the target is closer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<I> {
    pub id: I,
    pub signal: f64,
}

impl<I> Neighbor<I> {

    pub fn new(id: I, signal: f64) -> Self {
        Self { id, signal }
    }
}


/// Walk from the start position, with the accumulated cost at every step
/// Cost of a step is 1 / signal of the node stepped into
#[derive(Clone, Debug, PartialEq)]
pub struct RescuePath<I> {
    nodes: Vec<I>,
    costs: Vec<f64>,
}

impl<I: Copy> RescuePath<I> {

    pub(crate) fn new(start: I) -> Self {
        Self {
            nodes: vec![start],
            costs: vec![0.0],
        }
    }

    pub(crate) fn push(&mut self, id: I, cost: f64) {
        self.nodes.push(id);
        self.costs.push(cost);
    }

    /// Drop the last step, the start is never removed
    pub(crate) fn pop(&mut self) -> Option<I> {
        if self.nodes.len() <= 1 {
            return None;
        }
        self.costs.pop();
        self.nodes.pop()
    }

    pub fn nodes(&self) -> &[I] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<I> {
        self.nodes
    }

    /// Accumulated cost up to the last node
    pub fn cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }

    pub fn last(&self) -> Option<I> {
        self.nodes.last().copied()
    }

    /// Number of moves from the start
    pub fn moves(&self) -> usize {
        self.nodes.len() - 1
    }
}
