use crate::errors::RouteError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Constants of the speed/hostility cost model
///
/// Speed changes once per node, when the node is left:
/// 1. a hostile node costs `hostile_penalty`, but speed never drops below `speed_floor`
/// 2. a speed upgrade adds `hostile_upgrade_bonus` on a hostile node, `upgrade_bonus` otherwise
///
/// A path may contain at most `max_hostile_nodes` hostile nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SpeedConfig {
    pub initial_speed: f64,
    pub speed_floor: f64,
    pub hostile_penalty: f64,
    pub upgrade_bonus: f64,
    pub hostile_upgrade_bonus: f64,
    pub max_hostile_nodes: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial_speed: 1.0,
            speed_floor: 1.0,
            hostile_penalty: 0.2,
            upgrade_bonus: 0.2,
            hostile_upgrade_bonus: 1.2,
            max_hostile_nodes: 2,
        }
    }
}

impl SpeedConfig {

    pub fn with_initial_speed(mut self, speed: f64) -> Self {
        self.initial_speed = speed;
        self
    }

    pub fn with_speed_floor(mut self, floor: f64) -> Self {
        self.speed_floor = floor;
        self
    }

    pub fn with_hostile_penalty(mut self, penalty: f64) -> Self {
        self.hostile_penalty = penalty;
        self
    }

    pub fn with_upgrade_bonus(mut self, bonus: f64, hostile_bonus: f64) -> Self {
        self.upgrade_bonus = bonus;
        self.hostile_upgrade_bonus = hostile_bonus;
        self
    }

    pub fn with_max_hostile_nodes(mut self, max: u32) -> Self {
        self.max_hostile_nodes = max;
        self
    }

    /// Check the constants can drive a search
    /// Speeds divide edge lengths, so the floor must be strictly positive
    pub fn validate(&self) -> Result<(), RouteError> {
        let values = [
            ("initial_speed", self.initial_speed),
            ("speed_floor", self.speed_floor),
            ("hostile_penalty", self.hostile_penalty),
            ("upgrade_bonus", self.upgrade_bonus),
            ("hostile_upgrade_bonus", self.hostile_upgrade_bonus),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::InvalidConfig(format!("{name} must be finite and non-negative, got {value}")));
            }
        }
        if self.speed_floor <= 0.0 {
            return Err(RouteError::InvalidConfig("speed_floor must be positive".to_string()));
        }
        if self.initial_speed < self.speed_floor {
            return Err(RouteError::InvalidConfig(format!(
                "initial_speed {} is below speed_floor {}", self.initial_speed, self.speed_floor
            )));
        }
        Ok(())
    }

    /// Speed when leaving a node, given the speed the ship arrived with
    pub fn departure_speed(&self, arrival: f64, hostile: bool, speed_upgrade: bool) -> f64 {
        let mut speed = arrival;
        if hostile {
            speed = (speed - self.hostile_penalty).max(self.speed_floor.min(arrival));
        }
        if speed_upgrade {
            speed += if hostile { self.hostile_upgrade_bonus } else { self.upgrade_bonus };
        }
        speed
    }

    /// A hostile node may follow a path that already holds `hostile_count` hostile nodes
    pub fn admits_hostile(&self, hostile_count: u32) -> bool {
        hostile_count < self.max_hostile_nodes
    }
}


/// How the cost of traversing an edge is computed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CostModel {
    /// Cost is the edge length
    #[default]
    Static,
    /// Cost is the time to cross the edge at the speed carried by the path,
    /// with a hard limit on hostile nodes
    SpeedHostility(SpeedConfig),
}

impl CostModel {

    /// Speed/hostility model with the default constants
    pub fn speed_hostility() -> Self {
        CostModel::SpeedHostility(SpeedConfig::default())
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        match self {
            CostModel::Static => Ok(()),
            CostModel::SpeedHostility(config) => config.validate(),
        }
    }

    pub(crate) fn initial_speed(&self) -> f64 {
        match self {
            CostModel::Static => 1.0,
            CostModel::SpeedHostility(config) => config.initial_speed,
        }
    }

    pub(crate) fn departure_speed(&self, arrival: f64, hostile: bool, speed_upgrade: bool) -> f64 {
        match self {
            CostModel::Static => arrival,
            CostModel::SpeedHostility(config) => config.departure_speed(arrival, hostile, speed_upgrade),
        }
    }

    pub(crate) fn edge_cost(&self, length: f64, speed: f64) -> f64 {
        match self {
            CostModel::Static => length,
            CostModel::SpeedHostility(_) => length / speed,
        }
    }

    /// Whether a node may be entered from a path holding `hostile_count` hostile nodes
    pub(crate) fn admits(&self, hostile_count: u32, next_is_hostile: bool) -> bool {
        match self {
            CostModel::Static => true,
            CostModel::SpeedHostility(config) => !next_is_hostile || config.admits_hostile(hostile_count),
        }
    }
}
