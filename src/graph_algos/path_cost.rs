use crate::errors::RouteError;
use crate::graph::{RouteGraph, edge_length};
use super::speed::SpeedConfig;


/// Sum of the edge lengths along a path
/// An empty or single node path costs nothing
/// Fails with MalformedPath if two consecutive nodes are not connected
pub fn path_total_cost<G>(graph: &G, path: &[G::Node]) -> Result<f64, RouteError>
where
    G: RouteGraph,
{
    path.windows(2)
        .enumerate()
        .try_fold(0.0, |total, (position, pair)| {
            Ok(total + connecting_length(graph, pair[0], pair[1], position)?)
        })
}


/// Time needed to fly a path under the speed rules
/// Speed starts at `initial_speed` and changes as each node is left,
/// every edge is crossed at the speed of the node it leaves
pub fn path_travel_time<G>(graph: &G, path: &[G::Node], config: &SpeedConfig) -> Result<f64, RouteError>
where
    G: RouteGraph,
{
    config.validate()?;

    let mut speed = config.initial_speed;
    let mut time = 0.0;
    for (position, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        speed = config.departure_speed(speed, graph.is_hostile(from), graph.has_speed_upgrade(from));
        time += connecting_length(graph, from, to, position)? / speed;
    }
    Ok(time)
}


/// Number of hostile nodes on a path, endpoints included
pub fn path_hostile_count<G>(graph: &G, path: &[G::Node]) -> usize
where
    G: RouteGraph,
{
    path.iter().filter(|&&node| graph.is_hostile(node)).count()
}


/// Length of the shortest edge between two consecutive path nodes
fn connecting_length<G>(graph: &G, from: G::Node, to: G::Node, position: usize) -> Result<f64, RouteError>
where
    G: RouteGraph,
{
    let mut shortest: Option<f64> = None;
    for edge in graph.edges(from) {
        if graph.other_endpoint(&edge, from) != to {
            continue;
        }
        let length = edge_length(graph, &edge)?;
        shortest = Some(shortest.map_or(length, |s| s.min(length)));
    }
    shortest.ok_or(RouteError::MalformedPath { position })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, NodeAttributes};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn line_graph() -> AdjacencyGraph<u32> {
        // 0 - 1 - 2 - 3, node 1 hostile, node 2 with an upgrade
        let mut graph = AdjacencyGraph::new();
        graph.add_node(NodeAttributes::default());
        graph.add_node(NodeAttributes::hostile());
        graph.add_node(NodeAttributes::speed_upgrade());
        graph.add_node(NodeAttributes::default());
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 4).unwrap();
        graph.add_edge(2, 3, 6).unwrap();
        graph
    }

    #[test]
    fn test_total_cost_sums_edges() {
        let graph = line_graph();
        assert!(approx(path_total_cost(&graph, &[0, 1, 2, 3]).unwrap(), 12.0));
        assert!(approx(path_total_cost(&graph, &[3, 2]).unwrap(), 6.0));
    }

    #[test]
    fn test_total_cost_of_trivial_paths() {
        let graph = line_graph();
        assert!(approx(path_total_cost(&graph, &[]).unwrap(), 0.0));
        assert!(approx(path_total_cost(&graph, &[2]).unwrap(), 0.0));
    }

    #[test]
    fn test_total_cost_rejects_disconnected_nodes() {
        let graph = line_graph();
        let result = path_total_cost(&graph, &[0, 1, 3]);
        assert!(matches!(result, Err(RouteError::MalformedPath { position: 1 })));
    }

    #[test]
    fn test_parallel_edges_use_shortest() {
        let mut graph = line_graph();
        graph.add_edge(0, 1, 1).unwrap();
        assert!(approx(path_total_cost(&graph, &[1, 0]).unwrap(), 1.0));
    }

    #[test]
    fn test_travel_time_follows_speed_rules() {
        let graph = line_graph();
        // leave 0 at 1.0, leave 1 (hostile) still at 1.0, leave 2 at 1.2
        let time = path_travel_time(&graph, &[0, 1, 2, 3], &SpeedConfig::default()).unwrap();
        assert!(approx(time, 2.0 + 4.0 + 6.0 / 1.2));
    }

    #[test]
    fn test_hostile_count() {
        let graph = line_graph();
        assert_eq!(path_hostile_count(&graph, &[0, 1, 2, 3]), 1);
        assert_eq!(path_hostile_count(&graph, &[]), 0);
    }
}
