use crate::error::ConfigError;
use crate::net::{Cost, NodeId, Topology, TransitDelay};
use crate::topo;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::time::SimTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub topology: TopologySpec,
    /// Seed for transit-delay jitter and random topologies.
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub enable_link_changes: bool,
    /// Ignored unless `enable_link_changes` is set. An empty list means the
    /// default single change from [`LinkChangeSpec::default_schedule`].
    #[serde(default)]
    pub link_changes: Vec<LinkChangeSpec>,
    #[serde(default)]
    pub delay: DelaySpec,
    /// Upper bound on processed events; `None` disables the bound.
    #[serde(default = "default_max_events")]
    pub max_events: Option<u64>,
    /// Distances above this are treated as unreachable. Derived from the
    /// topology when absent.
    #[serde(default)]
    pub max_metric: Option<u64>,
}

fn default_max_events() -> Option<u64> {
    Some(1_000_000)
}

impl SimConfig {
    pub fn new(topology: TopologySpec) -> Self {
        Self {
            topology,
            seed: 0,
            enable_link_changes: false,
            link_changes: Vec::new(),
            delay: DelaySpec::default(),
            max_events: default_max_events(),
            max_metric: None,
        }
    }

    pub fn from_matrix(cost: Vec<Vec<Cost>>) -> Self {
        Self::new(TopologySpec::Matrix { cost })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn build_topology(&self) -> Result<Topology, ConfigError> {
        let cost = match &self.topology {
            TopologySpec::Reference => topo::reference::cost_matrix(),
            TopologySpec::Matrix { cost } => cost.clone(),
            TopologySpec::Random { nodes } => topo::random::cost_matrix(*nodes, self.seed),
        };
        Topology::from_matrix(cost)
    }

    /// The link-change schedule actually used by the run.
    pub fn effective_link_changes(&self) -> Vec<LinkChangeSpec> {
        if !self.enable_link_changes {
            Vec::new()
        } else if self.link_changes.is_empty() {
            LinkChangeSpec::default_schedule()
        } else {
            self.link_changes.clone()
        }
    }

    pub fn transit_delay(&self) -> Result<TransitDelay, ConfigError> {
        let DelaySpec { min, max } = self.delay;
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || max < min {
            return Err(ConfigError::DelayRange { min, max });
        }
        Ok(TransitDelay {
            min: SimTime::from_units_f64(min),
            max: SimTime::from_units_f64(max),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    /// The three-node example network.
    Reference,
    Matrix { cost: Vec<Vec<Cost>> },
    Random { nodes: usize },
}

/// Transit delay interval `[min, max)` in simulated time units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DelaySpec {
    pub min: f64,
    pub max: f64,
}

impl Default for DelaySpec {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}

/// At `time`, the cost of link `a`-`b` becomes `cost` (`null` severs it).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LinkChangeSpec {
    pub time: f64,
    pub a: usize,
    pub b: usize,
    pub cost: Cost,
}

impl LinkChangeSpec {
    pub fn new(time: f64, a: usize, b: usize, cost: Cost) -> Self {
        Self { time, a, b, cost }
    }

    pub fn default_schedule() -> Vec<LinkChangeSpec> {
        vec![LinkChangeSpec::new(10_000.0, 0, 1, Cost::new(2))]
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (NodeId(self.a), NodeId(self.b))
    }

    pub fn at(&self) -> SimTime {
        SimTime::from_units_f64(self.time)
    }

    pub(crate) fn validate(&self, nodes: usize) -> Result<(), ConfigError> {
        let err = |reason| ConfigError::LinkChange {
            a: self.a,
            b: self.b,
            reason,
        };
        if self.a >= nodes || self.b >= nodes {
            return Err(err("node id out of range"));
        }
        if self.a == self.b {
            return Err(err("endpoints must differ"));
        }
        if !self.time.is_finite() || self.time < 0.0 {
            return Err(err("time must be finite and non-negative"));
        }
        if self.cost == Cost::ZERO {
            return Err(err("cost must be positive"));
        }
        Ok(())
    }
}
