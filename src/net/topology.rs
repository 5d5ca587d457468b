//! 网络拓扑（代价矩阵）
//!
//! N×N 对称矩阵，对角线为 0，无穷表示两点不直接相连。只有仿真器能修改它。

use super::cost::Cost;
use super::id::NodeId;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    cost: Vec<Vec<Cost>>,
}

impl Topology {
    /// 校验并构建拓扑：必须是非空方阵、对角线为 0 且对称。
    pub fn from_matrix(cost: Vec<Vec<Cost>>) -> Result<Self, ConfigError> {
        let n = cost.len();
        if n == 0 {
            return Err(ConfigError::Empty);
        }
        for (i, row) in cost.iter().enumerate() {
            if row.len() != n {
                return Err(ConfigError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            if row[i] != Cost::ZERO {
                return Err(ConfigError::NonZeroDiagonal(i));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if cost[i][j] != cost[j][i] {
                    return Err(ConfigError::Asymmetric(i, j));
                }
                if cost[i][j] == Cost::ZERO {
                    return Err(ConfigError::ZeroCost(i, j));
                }
            }
        }
        Ok(Self { cost })
    }

    /// 节点数
    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.cost.len()
    }

    /// 越界时返回无穷
    pub fn cost(&self, a: NodeId, b: NodeId) -> Cost {
        self.cost
            .get(a.0)
            .and_then(|row| row.get(b.0))
            .copied()
            .unwrap_or(Cost::INFINITY)
    }

    pub fn row(&self, a: NodeId) -> &[Cost] {
        &self.cost[a.0]
    }

    pub fn matrix(&self) -> &[Vec<Cost>] {
        &self.cost
    }

    /// 对称地设置一条链路的代价
    pub(crate) fn set_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.cost[a.0][b.0] = cost;
        self.cost[b.0][a.0] = cost;
    }

    /// 所有无向链路 `(a, b)`（`a < b`）及其代价，仅包含有限代价的链路。
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, Cost)> + '_ {
        let n = self.len();
        (0..n).flat_map(move |a| {
            ((a + 1)..n).filter_map(move |b| {
                let c = self.cost[a][b];
                c.is_finite().then_some((NodeId(a), NodeId(b), c))
            })
        })
    }
}
