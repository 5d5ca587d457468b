//! 链路层
//!
//! 持有代价矩阵、事件队列、逻辑时钟和时延抖动 RNG。节点发出的每个数据包都经由
//! `to_link_layer` 变成一个到达事件。

use super::api::BoundPort;
use super::cost::Cost;
use super::id::NodeId;
use super::packet::Packet;
use super::topology::Topology;
use crate::error::TopologyError;
use crate::sim::{Event, EventQueue, SimTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// 单跳传输时延区间 `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitDelay {
    pub min: SimTime,
    pub max: SimTime,
}

impl Default for TransitDelay {
    fn default() -> Self {
        Self {
            min: SimTime::from_units(1),
            max: SimTime::from_units(10),
        }
    }
}

impl TransitDelay {
    fn sample(&self, rng: &mut StdRng) -> SimTime {
        if self.max <= self.min {
            return self.min;
        }
        SimTime(rng.gen_range(self.min.0..self.max.0))
    }
}

#[derive(Debug)]
pub struct LinkLayer {
    topology: Topology,
    queue: EventQueue,
    now: SimTime,
    rng: StdRng,
    delay: TransitDelay,
    total_msgs: u64,
}

impl LinkLayer {
    pub fn new(topology: Topology, delay: TransitDelay, seed: u64) -> Self {
        Self {
            topology,
            queue: EventQueue::new(),
            now: SimTime::ZERO,
            rng: StdRng::seed_from_u64(seed),
            delay,
            total_msgs: 0,
        }
    }

    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub(crate) fn advance_to(&mut self, t: SimTime) {
        self.now = self.now.max(t);
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub(crate) fn set_link_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.topology.set_cost(a, b, cost);
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub(crate) fn queue_mut(&mut self) -> &mut EventQueue {
        &mut self.queue
    }

    /// 迄今为止交给链路层的数据包总数
    pub fn total_msgs(&self) -> u64 {
        self.total_msgs
    }

    /// 绑定到某个节点的窄接口
    pub fn port(&mut self, owner: NodeId) -> BoundPort<'_> {
        BoundPort::new(owner, self)
    }

    /// 把数据包交给链路层。
    ///
    /// 到达时间 = max(同一链路上最晚的在途到达时间, 当前时间) + 随机时延，
    /// 因此同一 (src, dest) 上的投递严格按发送顺序。
    #[tracing::instrument(skip(self, pkt), fields(src = %pkt.src(), dest = %pkt.dest()))]
    pub fn to_link_layer(&mut self, pkt: Packet) -> Result<(), TopologyError> {
        let nodes = self.topology.len();
        let (src, dest) = (pkt.src(), pkt.dest());
        if !self.topology.contains(src) {
            return Err(TopologyError::NodeOutOfRange {
                role: "src",
                node: src,
                nodes,
            });
        }
        if !self.topology.contains(dest) {
            return Err(TopologyError::NodeOutOfRange {
                role: "dest",
                node: dest,
                nodes,
            });
        }
        if src == dest {
            return Err(TopologyError::SelfSend(src));
        }
        if self.topology.cost(src, dest).is_infinite() {
            return Err(TopologyError::NotConnected { src, dest });
        }

        let last = self.queue.latest_arrival_time(src, dest);
        let start = last.unwrap_or(SimTime::ZERO).max(self.now);
        let delay = self.delay.sample(&mut self.rng);
        let arrive = start.saturating_add(delay);
        trace!(now = %self.now, last = ?last, delay = %delay, arrive = %arrive, "计算到达时间");
        debug!(vector = ?pkt.dist_vector(), arrive = %arrive, "📤 调度数据包到达事件");

        self.queue.insert(Event::packet_arrival(arrive, pkt));
        self.total_msgs += 1;
        Ok(())
    }
}
