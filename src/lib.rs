//! Route planning on graphs whose traversal cost depends on the path taken.
//!
//! - [`shortest_path`] / [`search`]: Dijkstra over a [`RouteGraph`], either on
//!   plain edge lengths ([`CostModel::Static`]) or on travel time where hostile
//!   nodes slow the ship down, speed upgrades speed it up and no path may hold
//!   more than two hostile nodes ([`CostModel::SpeedHostility`]).
//! - [`path_total_cost`] / [`path_travel_time`]: evaluate an arbitrary path.
//! - [`explore`]: branch and bound depth-first search for a hidden target,
//!   driving a [`PositionCursor`] that only sees its direct neighbors.
//!
//! ```
//! use starpath::{AdjacencyGraph, CostModel, NodeAttributes, shortest_path};
//!
//! let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
//! let a = graph.add_node(NodeAttributes::default());
//! let b = graph.add_node(NodeAttributes::default());
//! let c = graph.add_node(NodeAttributes::default());
//! graph.add_edge(a, b, 1).unwrap();
//! graph.add_edge(b, c, 1).unwrap();
//! graph.add_edge(a, c, 5).unwrap();
//!
//! let path = shortest_path(&graph, a, c, &CostModel::Static).unwrap();
//! assert_eq!(path, vec![a, b, c]);
//! ```

pub mod collections;
pub mod errors;
pub mod exploration_algos;
pub mod graph;
pub mod graph_algos;

pub use collections::IndexedMinHeap;
pub use errors::{GraphError, QueueError, RouteError};
pub use exploration_algos::{
    ExploreMode, Explorer, ExplorerConfig, Neighbor, NeighborOrder, PositionCursor, RescuePath,
    explore,
};
pub use graph::{AdjacencyGraph, NodeAttributes, RouteGraph};
pub use graph_algos::dijkstra::{search, search_all, shortest_path};
pub use graph_algos::path_cost::{path_hostile_count, path_total_cost, path_travel_time};
pub use graph_algos::speed::{CostModel, SpeedConfig};
pub use graph_algos::{NO_PARENT, PathState, PathStates, SearchResult};
