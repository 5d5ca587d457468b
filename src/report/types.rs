use crate::error::SimError;
use crate::net::{Cost, NodeId};
use crate::sim::{Path, RunOutcome, RunStats, Simulator};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub converged: bool,
    pub stats: RunStats,
    pub nodes: Vec<NodeReport>,
    /// Every pair `from < to`.
    pub paths: Vec<PathReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub id: NodeId,
    pub neighbors: Vec<NodeId>,
    pub dist_vector: Vec<Cost>,
    pub predecessors: Vec<Option<NodeId>>,
    pub dist_table: Vec<Vec<Cost>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: Cost,
    /// `None` while a run that did not converge still has a looping next-hop chain.
    pub path: Option<Path>,
}

impl Report {
    pub fn collect(sim: &Simulator, outcome: &RunOutcome) -> Result<Self, SimError> {
        let nodes = sim
            .nodes()
            .iter()
            .map(|node| NodeReport {
                id: node.id(),
                neighbors: node.neighbors().to_vec(),
                dist_vector: node.dist_vector().to_vec(),
                predecessors: node.predecessors().to_vec(),
                dist_table: node.dist_table().rows().to_vec(),
            })
            .collect();

        let n = sim.nodes().len();
        let mut paths = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (from, to) = (NodeId(i), NodeId(j));
                let path = match sim.shortest_path(from, to) {
                    Ok(p) => Some(p),
                    Err(SimError::InconsistentRoute { .. }) if !outcome.converged() => None,
                    Err(e) => return Err(e),
                };
                paths.push(PathReport {
                    from,
                    to,
                    cost: sim.nodes()[i].dist_vector()[j],
                    path,
                });
            }
        }

        Ok(Self {
            converged: outcome.converged(),
            stats: *outcome.stats(),
            nodes,
            paths,
        })
    }
}
