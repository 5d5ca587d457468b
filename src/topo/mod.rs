//! 拓扑构建
//!
//! 固定示例拓扑、随机拓扑生成，以及用于校验的集中式最短路计算。

pub mod floyd_warshall;
pub mod random;
pub mod reference;
