pub mod dijkstra;
pub mod path_cost;
pub mod speed;
mod shortest_path;

use shortest_path::trace_path;

use crate::collections::FxIndexMap;
use crate::errors::RouteError;

use std::hash::Hash;

/// Parent index of the start node
pub const NO_PARENT: usize = usize::MAX;

/// Search state for one discovered node
/// - parent: index of the predecessor in the state map (NO_PARENT for the start)
/// - cost: best cost found so far from the start (distance or time)
/// - arrival_speed: speed carried in from the parent
/// - speed: speed when leaving this node, known once the node is settled
/// - hostile_count: hostile nodes on the path from the start up to and including this node
/// - settled: cost is final, the record is no longer updated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathState {
    pub parent: usize,
    pub cost: f64,
    pub arrival_speed: f64,
    pub speed: f64,
    pub hostile_count: u32,
    pub settled: bool,
}

impl PathState {

    pub(crate) fn start(speed: f64, hostile: bool) -> Self {
        Self {
            parent: NO_PARENT,
            cost: 0.0,
            arrival_speed: speed,
            speed,
            hostile_count: u32::from(hostile),
            settled: false,
        }
    }

    pub(crate) fn reached(parent: usize, cost: f64, arrival_speed: f64, hostile_count: u32) -> Self {
        Self {
            parent,
            cost,
            arrival_speed,
            speed: arrival_speed,
            hostile_count,
            settled: false,
        }
    }
}

/// Type alias for the state map used by the search
/// Insertion ordered, a node's position in the map is its arena index
pub type PathStates<N> = FxIndexMap<N, PathState>;


/// Outcome of a search: every discovered node plus the index of the goal if it was settled
#[derive(Clone, Debug)]
pub struct SearchResult<N> {
    states: PathStates<N>,
    goal_index: Option<usize>,
}

impl<N> SearchResult<N>
where
    N: Eq + Hash + Clone,
{

    pub(crate) fn new(states: PathStates<N>, goal_index: Option<usize>) -> Self {
        Self { states, goal_index }
    }

    pub fn is_reachable(&self) -> bool {
        self.goal_index.is_some()
    }

    /// Nodes from start to goal, empty when the goal was not reached
    pub fn path(&self) -> Result<Vec<N>, RouteError> {
        match self.goal_index {
            Some(goal_index) => trace_path(&self.states, goal_index),
            None => Ok(Vec::new()),
        }
    }

    /// Cost of reaching the goal
    pub fn cost(&self) -> Option<f64> {
        self.goal_index
            .and_then(|index| self.states.get_index(index))
            .map(|(_, state)| state.cost)
    }

    pub fn state(&self, node: &N) -> Option<&PathState> {
        self.states.get(node)
    }

    pub fn states(&self) -> &PathStates<N> {
        &self.states
    }
}
