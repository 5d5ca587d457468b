//! 结果报告
//!
//! 只读地消费仿真的最终状态：距离表、最短路径列表、JSON 报告和集中式校验。

mod table;
mod types;
mod verify;

pub use table::{DistanceTableView, PathLine};
pub use types::{NodeReport, PathReport, Report};
pub use verify::{Mismatch, verify_against_floyd_warshall};
