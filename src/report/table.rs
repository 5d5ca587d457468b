//! 文本渲染

use crate::net::{DistanceTable, NodeId};
use crate::sim::Path;
use std::fmt;

/// 以网格形式打印某个节点的距离表
pub struct DistanceTableView<'a> {
    pub owner: NodeId,
    pub table: &'a DistanceTable,
}

impl fmt::Display for DistanceTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.table.len();
        write!(f, "{:>5}", format!(" D{}|", self.owner))?;
        for i in 0..n {
            write!(f, "    {i}")?;
        }
        writeln!(f)?;
        writeln!(f, "----+{}", "-----".repeat(n))?;
        for (i, row) in self.table.rows().iter().enumerate() {
            write!(f, "{i:4}|")?;
            for c in row {
                write!(f, "{c:>5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 一行最短路径描述
pub struct PathLine<'a> {
    pub from: NodeId,
    pub to: NodeId,
    pub path: &'a Path,
}

impl fmt::Display for PathLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path {
            Path::Unreachable => {
                write!(f, "Path does not exist from Node {} to {}", self.from, self.to)
            }
            Path::Found(hops) => {
                write!(f, "Path from Node {} to {}: ", self.from, self.to)?;
                for (i, hop) in hops.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{hop}")?;
                }
                Ok(())
            }
        }
    }
}
