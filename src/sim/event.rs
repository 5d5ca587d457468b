//! 仿真事件
//!
//! 只有两类事件：数据包到达某节点的链路层，以及某条链路的代价变化。

use super::time::SimTime;
use crate::net::{Cost, NodeId, Packet};

/// 事件种类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// 数据包到达 `Event::node` 的链路层
    PacketArrival(Packet),
    /// `Event::node` 与 `peer` 之间的链路代价变为 `cost`
    LinkChange { peer: NodeId, cost: Cost },
}

/// 带时间戳的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub at: SimTime,
    pub node: NodeId,
    pub kind: EventKind,
}

impl Event {
    pub fn packet_arrival(at: SimTime, pkt: Packet) -> Self {
        Self {
            at,
            node: pkt.dest(),
            kind: EventKind::PacketArrival(pkt),
        }
    }

    pub fn link_change(at: SimTime, a: NodeId, b: NodeId, cost: Cost) -> Self {
        Self {
            at,
            node: a,
            kind: EventKind::LinkChange { peer: b, cost },
        }
    }

    pub fn packet(&self) -> Option<&Packet> {
        match &self.kind {
            EventKind::PacketArrival(pkt) => Some(pkt),
            EventKind::LinkChange { .. } => None,
        }
    }
}
