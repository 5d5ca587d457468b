//! 集中式全源最短路（Floyd-Warshall），作为分布式结果的参照。

use crate::net::{Cost, Topology};

/// 返回 `dist[i][j]`；不可达为无穷。
pub fn all_pairs(topology: &Topology) -> Vec<Vec<Cost>> {
    let n = topology.len();
    let mut dist: Vec<Vec<Cost>> = topology.matrix().to_vec();
    for k in 0..n {
        for i in 0..n {
            let dik = dist[i][k];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let cand = dik + dist[k][j];
                if cand < dist[i][j] {
                    dist[i][j] = cand;
                }
            }
        }
    }
    dist
}
