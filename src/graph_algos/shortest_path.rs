use crate::errors::RouteError;
use super::{PathStates, NO_PARENT};

/// Construct the path from the start node to the goal node
/// Returns the ordered path as a vector of nodes from start to goal
/// states: PathStates<N> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the states map
pub(crate) fn trace_path<N>(states: &PathStates<N>, goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // A chain longer than the map must revisit a node
        if path.len() >= states.len() {
            return Err(RouteError::ParentCycle { index: current_index });
        }

        let (node, state) = states
            .get_index(current_index)
            .ok_or(RouteError::MissingState { index: current_index })?;
        path.push(node.clone());
        current_index = state.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
