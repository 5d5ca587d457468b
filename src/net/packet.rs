//! 数据包类型
//!
//! 距离向量通告。载荷是发送时刻的独立快照，之后发送方修改自身向量
//! 不会影响已经发出的包。

use super::cost::Cost;
use super::id::NodeId;
use serde::Serialize;

/// 距离向量数据包
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Packet {
    src: NodeId,
    dest: NodeId,
    dist_vector: Box<[Cost]>,
}

impl Packet {
    /// 创建数据包，同时拷贝 `dist_vector`
    pub fn new(src: NodeId, dest: NodeId, dist_vector: &[Cost]) -> Self {
        Self {
            src,
            dest,
            dist_vector: dist_vector.into(),
        }
    }

    /// 获取源节点
    pub fn src(&self) -> NodeId {
        self.src
    }

    /// 获取目标节点
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    pub fn dist_vector(&self) -> &[Cost] {
        &self.dist_vector
    }
}
