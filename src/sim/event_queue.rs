//! 事件队列
//!
//! 按时间排序的待处理事件集合。同一时间的事件按插入顺序出队，保证固定种子下
//! 的运行可复现。

use super::event::{Event, EventKind};
use super::time::SimTime;
use crate::net::NodeId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// 堆中的一项；`seq` 在同一时刻内保持插入顺序
#[derive(Debug)]
struct Slot {
    at: SimTime,
    seq: u64,
    ev: Event,
}

// 最早、最先插入的排在堆顶
impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.at, other.seq).cmp(&(self.at, self.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        (self.at, self.seq) == (other.at, other.seq)
    }
}

impl Eq for Slot {}

#[derive(Debug, Default)]
pub struct EventQueue {
    next_seq: u64,
    q: BinaryHeap<Slot>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ev: Event) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        trace!(at = %ev.at, seq, node = %ev.node, "事件入队");
        self.q.push(Slot { at: ev.at, seq, ev });
    }

    /// 取出时间最小的事件
    pub fn extract_min(&mut self) -> Option<Event> {
        self.q.pop().map(|item| item.ev)
    }

    pub(crate) fn peek_time(&self) -> Option<SimTime> {
        self.q.peek().map(|item| item.at)
    }

    /// 队列中从 `from` 发往 `to` 的数据包里最晚的到达时间。
    ///
    /// 用于保持单条链路上的 FIFO 投递顺序。没有在途数据包时返回 `None`。
    pub fn latest_arrival_time(&self, from: NodeId, to: NodeId) -> Option<SimTime> {
        self.q
            .iter()
            .filter(|item| match &item.ev.kind {
                EventKind::PacketArrival(pkt) => item.ev.node == to && pkt.src() == from,
                EventKind::LinkChange { .. } => false,
            })
            .map(|item| item.at)
            .max()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}
