use crate::errors::RouteError;
use crate::collections::{FxIndexMap, IndexedMinHeap};
use crate::graph::{RouteGraph, edge_length};
use super::{PathState, PathStates, SearchResult};
use super::speed::CostModel;

use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};




/// Identify the best path from start to end using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Returns the nodes from start to end, or an empty vector if end is unreachable
pub fn shortest_path<G>(graph: &G, start: G::Node, end: G::Node, model: &CostModel) -> Result<Vec<G::Node>, RouteError>
where
    G: RouteGraph,
{
    search(graph, start, end, model)?.path()
}


/// Search until end is settled
/// The result holds every node discovered on the way, with its cost and path state
pub fn search<G>(graph: &G, start: G::Node, end: G::Node, model: &CostModel) -> Result<SearchResult<G::Node>, RouteError>
where
    G: RouteGraph,
{
    model.validate()?;

    // Build the search tree - terminates when end is settled
    let (states, goal_index) = build_search_tree(graph, start, Some(end), model)?;

    debug!(?start, ?end, discovered = states.len(), reached = goal_index.is_some(), "route search finished");
    Ok(SearchResult::new(states, goal_index))
}


/// Returns the states of every node reachable from start
pub fn search_all<G>(graph: &G, start: G::Node, model: &CostModel) -> Result<PathStates<G::Node>, RouteError>
where
    G: RouteGraph,
{
    model.validate()?;

    let (states, _) = build_search_tree(graph, start, None, model)?;

    Ok(states)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the state map along with the index of the goal node
///
/// A node is settled the first time it leaves the queue and is never relaxed
/// again. With the speed/hostility model edge costs depend on the path taken,
/// so settle-once makes this a best-effort search rather than an exact one.
fn build_search_tree<G>(graph: &G, start: G::Node, goal: Option<G::Node>, model: &CostModel) -> Result<(PathStates<G::Node>, Option<usize>), RouteError>
where
    G: RouteGraph,
{

    // Nodes discovered but not settled, keyed by their index in the state map
    let mut frontier: IndexedMinHeap<usize, f64> = IndexedMinHeap::new();

    // Every discovered node, the tuple index is used as arena index by parents
    let mut states: PathStates<G::Node> = FxIndexMap::default();

    let start_index = states.insert_full(start, PathState::start(model.initial_speed(), graph.is_hostile(start))).0;
    frontier.insert(start_index, 0.0);

    while !frontier.is_empty() {
        let (index, _) = frontier.extract_min()?;

        // Settle the node and work out the speed it is left with
        let (&node, state) = states
            .get_index_mut(index)
            .ok_or(RouteError::MissingState { index })?;
        state.settled = true;
        state.speed = model.departure_speed(state.arrival_speed, graph.is_hostile(node), graph.has_speed_upgrade(node));
        let PathState { cost, speed, hostile_count, .. } = *state;

        // Check if we've reached the goal
        if goal == Some(node) {
            return Ok((states, Some(index)));
        }

        // loop over neighbors
        for edge in graph.edges(node) {
            let neighbor = graph.other_endpoint(&edge, node);
            let neighbor_hostile = graph.is_hostile(neighbor);

            if !model.admits(hostile_count, neighbor_hostile) {
                trace!(?node, ?neighbor, hostile_count, "hostile limit blocks traversal");
                continue;
            }

            // new cost to reach this node = node cost + cost of crossing the edge
            let new_cost = cost + model.edge_cost(edge_length(graph, &edge)?, speed);
            let candidate = PathState::reached(index, new_cost, speed, hostile_count + u32::from(neighbor_hostile));

            match states.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert(candidate);
                    frontier.insert(neighbor_index, new_cost);
                }
                Occupied(mut e) => {
                    let current = e.get();
                    if current.settled || current.cost <= new_cost {
                        // Settled, or the existing path is at least as good
                        continue;
                    }
                    trace!(?neighbor, from = current.cost, to = new_cost, "relaxed");
                    let neighbor_index = e.index();
                    e.insert(candidate);
                    frontier.decrease_priority(&neighbor_index, new_cost)?;
                }
            }
        }
    }

    Ok((states, None))
}
