//! 仿真器
//!
//! 持有全部节点与链路层，逐个事件推进逻辑时间，并且是唯一可以修改链路代价的地方。

use super::config::{LinkChangeSpec, SimConfig};
use super::event::{Event, EventKind};
use super::event_queue::EventQueue;
use super::time::SimTime;
use crate::error::{ConfigError, SchedulingError, SimError, TopologyError};
use crate::net::{Cost, DvNode, LinkLayer, NodeId, Topology};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// 一次运行的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub events: u64,
    pub total_msgs: u64,
    pub final_time: SimTime,
}

/// 运行结果：队列耗尽（已收敛）或事件预算用完（未收敛）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Converged(RunStats),
    BudgetExhausted(RunStats),
}

impl RunOutcome {
    pub fn stats(&self) -> &RunStats {
        match self {
            RunOutcome::Converged(s) | RunOutcome::BudgetExhausted(s) => s,
        }
    }

    pub fn converged(&self) -> bool {
        matches!(self, RunOutcome::Converged(_))
    }
}

/// 沿下一跳链得到的最短路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "hops", rename_all = "snake_case")]
pub enum Path {
    Found(Vec<NodeId>),
    Unreachable,
}

#[derive(Debug)]
pub struct Simulator {
    nodes: Vec<DvNode>,
    link: LinkLayer,
    max_events: Option<u64>,
    bound: MetricBound,
    events: u64,
}

/// 有界无穷的上界
#[derive(Debug)]
enum MetricBound {
    /// 配置文件给定，运行期间不变
    Configured(Cost),
    /// 每条链路出现过的最大有限代价
    Derived(BTreeMap<(usize, usize), u64>),
}

impl MetricBound {
    fn derive(topology: &Topology) -> Self {
        let worst = topology
            .links()
            .filter_map(|(a, b, c)| c.finite().map(|v| ((a.0, b.0), v)))
            .collect();
        MetricBound::Derived(worst)
    }

    /// 当前上界：配置值，或各链路最大有限代价之和（任何简单路径代价的上界）
    fn value(&self) -> Cost {
        match self {
            MetricBound::Configured(bound) => *bound,
            MetricBound::Derived(worst) => worst
                .values()
                .fold(Cost::ZERO, |acc, &v| acc + Cost::new(v)),
        }
    }

    /// 接纳一次链路变化。返回上界是否变大。
    fn admit(&mut self, change: &LinkChangeSpec) -> Result<bool, ConfigError> {
        let Some(v) = change.cost.finite() else {
            return Ok(false);
        };
        match self {
            MetricBound::Configured(bound) if Cost::new(v) > *bound => {
                Err(ConfigError::LinkChange {
                    a: change.a,
                    b: change.b,
                    reason: "cost exceeds max_metric",
                })
            }
            MetricBound::Configured(_) => Ok(false),
            MetricBound::Derived(worst) => {
                let key = (change.a.min(change.b), change.a.max(change.b));
                let slot = worst.entry(key).or_insert(0);
                if v > *slot {
                    *slot = v;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
        }
    }
}

impl Simulator {
    /// 构建拓扑与节点（每个节点构造时向邻居通告一次），并调度链路变化事件。
    pub fn new(cfg: &SimConfig) -> Result<Self, SimError> {
        let topology = cfg.build_topology()?;
        let changes = cfg.effective_link_changes();
        let mut bound = match cfg.max_metric {
            Some(v) => MetricBound::Configured(Cost::new(v)),
            None => MetricBound::derive(&topology),
        };
        for change in &changes {
            change.validate(topology.len())?;
            bound.admit(change)?;
        }
        let max_metric = bound.value();

        let n = topology.len();
        let mut link = LinkLayer::new(topology, cfg.transit_delay()?, cfg.seed);
        let mut nodes = Vec::with_capacity(n);
        for id in (0..n).map(NodeId) {
            nodes.push(DvNode::new(id, n, max_metric, &mut link.port(id))?);
        }
        info!(
            nodes = n,
            max_metric = %max_metric,
            initial_msgs = link.total_msgs(),
            "构建仿真"
        );

        let mut sim = Self {
            nodes,
            link,
            max_events: cfg.max_events,
            bound,
            events: 0,
        };
        for change in changes {
            sim.push_link_change(&change);
        }
        Ok(sim)
    }

    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.link.now()
    }

    pub fn total_msgs(&self) -> u64 {
        self.link.total_msgs()
    }

    pub fn events_processed(&self) -> u64 {
        self.events
    }

    pub fn max_metric(&self) -> Cost {
        self.bound.value()
    }

    pub fn nodes(&self) -> &[DvNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&DvNode> {
        self.nodes.get(id.0)
    }

    pub fn topology(&self) -> &Topology {
        self.link.topology()
    }

    pub fn pending(&self) -> &EventQueue {
        self.link.queue()
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            events: self.events,
            total_msgs: self.total_msgs(),
            final_time: self.now(),
        }
    }

    /// 追加一个链路变化事件
    ///
    /// 推导出的上界会随新代价增大并下发给所有节点；代价超过配置上界时拒绝。
    pub fn schedule_link_change(&mut self, change: LinkChangeSpec) -> Result<(), SimError> {
        change.validate(self.nodes.len())?;
        if self.bound.admit(&change)? {
            let max_metric = self.bound.value();
            info!(max_metric = %max_metric, "提高 max_metric");
            for node in &mut self.nodes {
                node.set_max_metric(max_metric);
            }
        }
        self.push_link_change(&change);
        Ok(())
    }

    fn push_link_change(&mut self, change: &LinkChangeSpec) {
        let (a, b) = change.endpoints();
        debug!(at = %change.at(), a = %a, b = %b, cost = %change.cost, "调度链路变化");
        self.link
            .queue_mut()
            .insert(Event::link_change(change.at(), a, b, change.cost));
    }

    /// 处理一个事件；队列为空时返回 `false`。
    pub fn step(&mut self) -> Result<bool, SimError> {
        let Some(ev) = self.link.queue_mut().extract_min() else {
            return Ok(false);
        };
        self.events += 1;
        self.link.advance_to(ev.at);

        let nodes = self.nodes.len();
        if ev.node.0 >= nodes {
            return Err(SchedulingError::UnknownNode {
                node: ev.node,
                nodes,
            }
            .into());
        }

        debug!(
            event_num = self.events,
            now = %self.now(),
            node = %ev.node,
            remaining_queue = self.link.queue().len(),
            "执行事件"
        );

        match ev.kind {
            EventKind::PacketArrival(pkt) => {
                if pkt.dest() != ev.node {
                    return Err(SchedulingError::Misaddressed {
                        target: ev.node,
                        dest: pkt.dest(),
                    }
                    .into());
                }
                let node = &mut self.nodes[ev.node.0];
                node.update(&pkt, &mut self.link.port(ev.node))?;
            }
            EventKind::LinkChange { peer, cost } => self.apply_link_change(ev.node, peer, cost)?,
        }
        Ok(true)
    }

    /// 运行直到队列为空或事件预算用完。
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        info!(
            nodes = self.nodes.len(),
            queue_size = self.link.queue().len(),
            "▶️  开始运行仿真"
        );

        loop {
            if let Some(max) = self.max_events {
                if self.events >= max && !self.link.queue().is_empty() {
                    let stats = self.stats();
                    warn!(
                        max_events = max,
                        remaining_queue = self.link.queue().len(),
                        "事件预算用完，未收敛"
                    );
                    return Ok(RunOutcome::BudgetExhausted(stats));
                }
            }
            if !self.step()? {
                break;
            }
        }

        let stats = self.stats();
        info!(
            total_events = stats.events,
            total_msgs = stats.total_msgs,
            final_time = %stats.final_time,
            "✅ 仿真完成，链路上已无数据包"
        );
        Ok(RunOutcome::Converged(stats))
    }

    /// 从 `from` 开始沿各节点的下一跳走到 `to`。
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<Path, SimError> {
        let n = self.nodes.len();
        for (role, id) in [("from", from), ("to", to)] {
            if id.0 >= n {
                return Err(TopologyError::NodeOutOfRange {
                    role,
                    node: id,
                    nodes: n,
                }
                .into());
            }
        }
        if self.nodes[from.0].dist_vector()[to.0].is_infinite() {
            return Ok(Path::Unreachable);
        }

        let mut path = vec![from];
        let mut curr = from;
        while curr != to {
            let next = self.nodes[curr.0]
                .predecessor(to)
                .filter(|_| path.len() < n)
                .ok_or(SimError::InconsistentRoute { from, to })?;
            path.push(next);
            curr = next;
        }
        Ok(Path::Found(path))
    }

    fn apply_link_change(&mut self, a: NodeId, b: NodeId, cost: Cost) -> Result<(), SimError> {
        let nodes = self.nodes.len();
        if b.0 >= nodes {
            return Err(SchedulingError::UnknownNode { node: b, nodes }.into());
        }
        info!(now = %self.now(), a = %a, b = %b, cost = %cost, "🔧 链路代价变化");

        self.link.set_link_cost(a, b, cost);
        self.nodes[a.0].link_cost_change_handler(b, cost, &mut self.link.port(a))?;
        self.nodes[b.0].link_cost_change_handler(a, cost, &mut self.link.port(b))?;
        Ok(())
    }
}
