//! 距离表
//!
//! 第 `r` 行是节点 `r` 最近一次通告给本节点的距离向量（`r == self` 时是本节点
//! 自己算出的向量）。每一行的 `[r][r]` 恒为 0。

use super::cost::Cost;
use super::id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: Vec<Vec<Cost>>,
}

impl DistanceTable {
    pub fn new(n: usize) -> Self {
        let rows = (0..n).map(|r| Self::default_row(n, r)).collect();
        Self { rows }
    }

    fn default_row(n: usize, r: usize) -> Vec<Cost> {
        let mut row = vec![Cost::INFINITY; n];
        row[r] = Cost::ZERO;
        row
    }

    /// 节点数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: NodeId, col: NodeId) -> Cost {
        self.rows[row.0][col.0]
    }

    pub fn row(&self, row: NodeId) -> &[Cost] {
        &self.rows[row.0]
    }

    pub(crate) fn row_mut(&mut self, row: NodeId) -> &mut [Cost] {
        &mut self.rows[row.0]
    }

    /// 用通告的向量覆盖一整行；长度不一致时截断或以无穷补齐。
    pub(crate) fn set_row(&mut self, row: NodeId, vector: &[Cost]) {
        let dst = &mut self.rows[row.0];
        for (i, slot) in dst.iter_mut().enumerate() {
            *slot = vector.get(i).copied().unwrap_or(Cost::INFINITY);
        }
        dst[row.0] = Cost::ZERO;
    }

    pub(crate) fn reset_row(&mut self, row: NodeId) {
        let n = self.len();
        self.rows[row.0] = Self::default_row(n, row.0);
    }

    pub fn rows(&self) -> &[Vec<Cost>] {
        &self.rows
    }
}
