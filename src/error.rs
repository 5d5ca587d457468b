//! 错误类型
//!
//! 仿真中的致命错误分为三类：拓扑违规（协议层发错了包）、内部调度错误
//! （事件本身不合法）以及配置错误。不可达目的地不是错误。

use crate::net::NodeId;
use thiserror::Error;

/// 拓扑违规：节点试图越过不存在的链路发送数据包。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("to_link_layer(): illegal {role} id {node:?} (network has {nodes} nodes)")]
    NodeOutOfRange {
        role: &'static str,
        node: NodeId,
        nodes: usize,
    },
    #[error("to_link_layer(): src same as dest ({0:?})")]
    SelfSend(NodeId),
    #[error("to_link_layer(): {src:?} and {dest:?} are not connected")]
    NotConnected { src: NodeId, dest: NodeId },
    #[error("to_link_layer(): port of {owner:?} cannot send as {src:?}")]
    ForeignSource { owner: NodeId, src: NodeId },
}

/// 调度错误：事件队列里出现了违反仿真不变量的事件。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("event targets unknown node {node:?} (network has {nodes} nodes)")]
    UnknownNode { node: NodeId, nodes: usize },
    #[error("packet for {dest:?} was scheduled on node {target:?}")]
    Misaddressed { target: NodeId, dest: NodeId },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("topology must have at least one node")]
    Empty,
    #[error("cost matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cost[{0}][{0}] must be 0")]
    NonZeroDiagonal(usize),
    #[error("cost[{0}][{1}] must be positive or null")]
    ZeroCost(usize, usize),
    #[error("cost matrix is not symmetric at ({0}, {1})")]
    Asymmetric(usize, usize),
    #[error("invalid link change {a}-{b}: {reason}")]
    LinkChange {
        a: usize,
        b: usize,
        reason: &'static str,
    },
    #[error("invalid delay range [{min}, {max})")]
    DelayRange { min: f64, max: f64 },
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// 仿真运行的统一错误类型
#[derive(Debug, Error)]
pub enum SimError {
    #[error("topology violation: {0}")]
    Topology(#[from] TopologyError),
    #[error("internal scheduling error: {0}")]
    Scheduling(#[from] SchedulingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("predecessor chain from {from:?} to {to:?} does not reach the destination")]
    InconsistentRoute { from: NodeId, to: NodeId },
}
