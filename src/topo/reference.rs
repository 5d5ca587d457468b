//! 三节点示例拓扑

use crate::net::Cost;

/// 拓扑结构：
///
/// ```text
///   0 --4-- 1 --1-- 2
///    \_____50______/
/// ```
pub fn cost_matrix() -> Vec<Vec<Cost>> {
    [[0, 4, 50], [4, 0, 1], [50, 1, 0]]
        .iter()
        .map(|row| row.iter().map(|&c| Cost::new(c)).collect())
        .collect()
}
