//! 随机拓扑生成

use crate::net::Cost;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 与时延抖动使用的随机流分开，避免改变拓扑大小时影响抖动序列。
const TOPOLOGY_SALT: u64 = 0x746f_706f_6c6f_6779;

/// 每条边的候选代价；两个 `None` 表示约 1/5 的点对不直接相连。
const CHOICES: [Option<u64>; 10] = [
    Some(1),
    Some(2),
    Some(3),
    Some(5),
    Some(7),
    Some(10),
    Some(15),
    Some(20),
    None,
    None,
];

/// 生成 `nodes` 个节点的对称随机代价矩阵（整个图不保证连通）。
pub fn cost_matrix(nodes: usize, seed: u64) -> Vec<Vec<Cost>> {
    let mut rng = StdRng::seed_from_u64(seed ^ TOPOLOGY_SALT);
    let mut cost = vec![vec![Cost::ZERO; nodes]; nodes];
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            let c = CHOICES
                .choose(&mut rng)
                .copied()
                .flatten()
                .map_or(Cost::INFINITY, Cost::new);
            cost[i][j] = c;
            cost[j][i] = c;
        }
    }
    cost
}
