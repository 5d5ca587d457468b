use crate::net::{Cost, NodeId};
use crate::sim::Simulator;
use crate::topo::floyd_warshall;

/// A node whose converged distance disagrees with the centralized answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub node: NodeId,
    pub dest: NodeId,
    pub got: Cost,
    pub expected: Cost,
}

/// Compare every node's vector with Floyd-Warshall on the current topology.
///
/// Only meaningful after the run converged.
pub fn verify_against_floyd_warshall(sim: &Simulator) -> Vec<Mismatch> {
    let expected = floyd_warshall::all_pairs(sim.topology());
    let mut out = Vec::new();
    for node in sim.nodes() {
        let row = &expected[node.id().0];
        for (d, (&got, &want)) in node.dist_vector().iter().zip(row).enumerate() {
            if got != want {
                out.push(Mismatch {
                    node: node.id(),
                    dest: NodeId(d),
                    got,
                    expected: want,
                });
            }
        }
    }
    out
}
