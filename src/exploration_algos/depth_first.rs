use crate::errors::RouteError;
use super::{Neighbor, PositionCursor, RescuePath};

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// When the explorer stops
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExploreMode {
    /// Stop on the first target found, the cursor stays on it
    #[default]
    FirstFound,
    /// Search every branch that can still beat the best route, then fly the
    /// best route again from the start
    Exhaustive,
}

/// Order in which the neighbors of a node are tried
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NeighborOrder {
    #[default]
    AscendingId,
    /// Strongest signal first, ties by ascending id
    StrongestSignal,
}

impl NeighborOrder {

    fn sort<I: Ord>(&self, neighbors: &mut [Neighbor<I>]) {
        match self {
            NeighborOrder::AscendingId => neighbors.sort_by(|a, b| a.id.cmp(&b.id)),
            NeighborOrder::StrongestSignal => neighbors.sort_by(|a, b| {
                b.signal.total_cmp(&a.signal).then_with(|| a.id.cmp(&b.id))
            }),
        }
    }
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ExplorerConfig {
    pub mode: ExploreMode,
    pub order: NeighborOrder,
    /// Maximum number of moves away from the start
    pub max_depth: Option<usize>,
}

impl ExplorerConfig {

    pub fn with_mode(mut self, mode: ExploreMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_order(mut self, order: NeighborOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}


/// Depth-first search for a target that can only be sensed locally
/// https://en.wikipedia.org/wiki/Branch_and_bound
///
/// Each step into a neighbor costs 1 / signal. A node already on the current
/// walk is never entered again, and a step is only taken while the walk is
/// cheaper than the best route found so far. Branches that fail move the
/// cursor back to the parent.
///
/// In first-found mode without a depth limit a node is entered at most once
/// per run, so a dead-end region costs one visit per node instead of one per
/// simple path through it. Exhaustive and depth-limited runs forget a node on
/// backtrack, since a later walk may reach it cheaper or shallower.
#[derive(Clone, Debug, Default)]
pub struct Explorer {
    config: ExplorerConfig,
}

/// Explore with the default configuration
pub fn explore<C>(cursor: &mut C) -> Result<Option<RescuePath<C::Id>>, RouteError>
where
    C: PositionCursor,
{
    Explorer::default().explore(cursor)
}

impl Explorer {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Search from the cursor's current position
    /// Returns the best route found, or None once every branch is exhausted.
    /// When a route is returned the cursor is on the target, otherwise it is
    /// back where it started.
    pub fn explore<C>(&self, cursor: &mut C) -> Result<Option<RescuePath<C::Id>>, RouteError>
    where
        C: PositionCursor,
    {
        let start = cursor.current_id();
        let mut search = DepthFirst {
            cursor: &mut *cursor,
            config: &self.config,
            path: RescuePath::new(start),
            visited: FxHashSet::from_iter([start]),
            best: None,
        };
        search.descend()?;
        let best = search.best;

        if let (ExploreMode::Exhaustive, Some(best)) = (self.config.mode, &best) {
            // The walk is fully unwound, the cursor is back on the start
            for &id in &best.nodes()[1..] {
                move_cursor(cursor, id)?;
            }
        }

        match &best {
            Some(route) => debug!(?start, moves = route.moves(), cost = route.cost(), "target found"),
            None => debug!(?start, "exploration exhausted without reaching the target"),
        }
        Ok(best)
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Descent {
    Found,
    Exhausted,
}


/// State of one exploration run
struct DepthFirst<'a, C: PositionCursor> {
    cursor: &'a mut C,
    config: &'a ExplorerConfig,
    path: RescuePath<C::Id>, // current walk, its last node is the cursor position
    visited: FxHashSet<C::Id>, // current walk, plus exhausted nodes when they stay marked
    best: Option<RescuePath<C::Id>>,
}

impl<C: PositionCursor> DepthFirst<'_, C> {

    fn descend(&mut self) -> Result<Descent, RouteError> {
        if self.cursor.is_at_target() {
            if self.improves(self.path.cost()) {
                self.best = Some(self.path.clone());
            }
            return Ok(Descent::Found);
        }

        if self.config.max_depth.is_some_and(|max| self.path.moves() >= max) {
            return Ok(Descent::Exhausted);
        }

        let here = self.cursor.current_id();
        let mut neighbors = self.cursor.neighbors();
        self.config.order.sort(&mut neighbors);

        let mut found = false;
        for neighbor in neighbors {
            if self.visited.contains(&neighbor.id) {
                continue;
            }
            if neighbor.signal.is_nan() || neighbor.signal < 0.0 {
                return Err(RouteError::InvalidSignal { signal: neighbor.signal });
            }

            let cost = self.path.cost() + 1.0 / neighbor.signal;
            if !self.improves(cost) {
                trace!(?here, neighbor = ?neighbor.id, cost, "pruned");
                continue;
            }

            move_cursor(&mut *self.cursor, neighbor.id)?;
            self.path.push(neighbor.id, cost);
            self.visited.insert(neighbor.id);

            let outcome = self.descend()?;
            if outcome == Descent::Found && self.config.mode == ExploreMode::FirstFound {
                return Ok(Descent::Found);
            }
            found |= outcome == Descent::Found;

            // Back to the parent before trying the next neighbor
            self.path.pop();
            if !self.keeps_exhausted() {
                self.visited.remove(&neighbor.id);
            }
            move_cursor(&mut *self.cursor, here)?;
        }

        Ok(if found { Descent::Found } else { Descent::Exhausted })
    }

    /// Nodes left behind stay marked, nothing after them can do better
    fn keeps_exhausted(&self) -> bool {
        self.config.mode == ExploreMode::FirstFound && self.config.max_depth.is_none()
    }

    /// A walk of this cost can still beat the best route
    fn improves(&self, cost: f64) -> bool {
        self.best.as_ref().is_none_or(|best| cost < best.cost())
    }
}


fn move_cursor<C: PositionCursor>(cursor: &mut C, id: C::Id) -> Result<(), RouteError> {
    trace!(from = ?cursor.current_id(), to = ?id, "move");
    cursor.move_to(id).map_err(|e| RouteError::Cursor(Box::new(e)))
}
