//! 网络模块
//!
//! 此模块包含距离向量协议的组成部分：节点、代价矩阵、数据包和链路层。

// 子模块声明
mod api;
mod cost;
mod id;
mod link_layer;
mod node;
mod packet;
mod routing;
mod topology;

// 重新导出公共接口
pub use api::{BoundPort, LinkPort};
pub use cost::Cost;
pub use id::NodeId;
pub use link_layer::{LinkLayer, TransitDelay};
pub use node::DvNode;
pub use packet::Packet;
pub use routing::DistanceTable;
pub use topology::Topology;
