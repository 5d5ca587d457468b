//! 距离向量节点
//!
//! 每个节点只知道自己的链路代价，通过与邻居交换距离向量收敛到最短路径
//! （分布式 Bellman-Ford）。

use super::api::LinkPort;
use super::cost::Cost;
use super::id::NodeId;
use super::packet::Packet;
use super::routing::DistanceTable;
use crate::error::TopologyError;
use tracing::{debug, info, trace};

/// 协议中的一个节点
#[derive(Debug, Clone)]
pub struct DvNode {
    id: NodeId,
    dist_table: DistanceTable,
    /// `predecessors[d]`：去往 d 的下一跳邻居；自身与不可达目的地为 `None`
    predecessors: Vec<Option<NodeId>>,
    /// 升序排列的直连邻居
    neighbors: Vec<NodeId>,
    max_metric: Cost,
}

impl DvNode {
    /// 创建节点并立刻向所有邻居通告自己的初始向量。
    ///
    /// `max_metric` 之上的距离视为无穷。
    pub fn new(
        id: NodeId,
        n: usize,
        max_metric: Cost,
        port: &mut dyn LinkPort,
    ) -> Result<Self, TopologyError> {
        let mut dist_table = DistanceTable::new(n);
        let mut predecessors = vec![None; n];
        let mut neighbors = Vec::new();

        let own = dist_table.row_mut(id);
        for (j, slot) in own.iter_mut().enumerate() {
            let other = NodeId(j);
            if other == id {
                continue;
            }
            let c = port.link_cost(other).cap(max_metric);
            *slot = c;
            if c.is_finite() {
                neighbors.push(other);
                predecessors[j] = Some(other);
            }
        }

        let node = Self {
            id,
            dist_table,
            predecessors,
            neighbors,
            max_metric,
        };
        debug!(node = %id, neighbors = ?node.neighbors, "节点初始化");
        node.broadcast(port)?;
        Ok(node)
    }

    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 本节点自己的距离向量
    pub fn dist_vector(&self) -> &[Cost] {
        self.dist_table.row(self.id)
    }

    pub fn dist_table(&self) -> &DistanceTable {
        &self.dist_table
    }

    /// 去往 `other` 的下一跳
    pub fn predecessor(&self, other: NodeId) -> Option<NodeId> {
        self.predecessors.get(other.0).copied().flatten()
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn max_metric(&self) -> Cost {
        self.max_metric
    }

    /// 提高有界无穷的上界。已有距离都不超过旧上界，因此无需重算。
    pub(crate) fn set_max_metric(&mut self, max_metric: Cost) {
        debug_assert!(max_metric >= self.max_metric);
        self.max_metric = max_metric;
    }

    /// 处理邻居发来的距离向量。向量有变化时返回 `true`（此时已向邻居广播）。
    #[tracing::instrument(skip(self, pkt, port), fields(node = %self.id, src = %pkt.src()))]
    pub fn update(&mut self, pkt: &Packet, port: &mut dyn LinkPort) -> Result<bool, TopologyError> {
        self.dist_table.set_row(pkt.src(), pkt.dist_vector());
        let changed = self.recompute(port);
        if changed {
            debug!(vector = ?self.dist_vector(), "🔁 距离向量变化，触发更新");
            self.broadcast(port)?;
        } else {
            trace!("距离向量未变化，保持静默");
        }
        Ok(changed)
    }

    /// 与 `peer` 之间的链路代价变为 `new_cost`。无论向量是否变化都会广播。
    #[tracing::instrument(skip(self, port), fields(node = %self.id))]
    pub fn link_cost_change_handler(
        &mut self,
        peer: NodeId,
        new_cost: Cost,
        port: &mut dyn LinkPort,
    ) -> Result<(), TopologyError> {
        if peer == self.id {
            return Err(TopologyError::SelfSend(peer));
        }
        if peer.0 >= self.predecessors.len() {
            return Err(TopologyError::NodeOutOfRange {
                role: "peer",
                node: peer,
                nodes: self.predecessors.len(),
            });
        }

        if new_cost.cap(self.max_metric).is_infinite() {
            if let Ok(pos) = self.neighbors.binary_search(&peer) {
                self.neighbors.remove(pos);
                self.dist_table.reset_row(peer);
                info!(peer = %peer, "✂️  链路断开，移除邻居");
            }
        } else if let Err(pos) = self.neighbors.binary_search(&peer) {
            self.neighbors.insert(pos, peer);
            info!(peer = %peer, cost = %new_cost, "新增邻居");
        }

        let changed = self.recompute(port);
        debug!(peer = %peer, cost = %new_cost, changed, "链路代价变化");
        self.broadcast(port)
    }

    /// 按 Bellman-Ford 规则重算自身向量，返回是否有任何条目变化。
    ///
    /// 并列时优先保留当前下一跳，否则选 id 最小的邻居。
    fn recompute(&mut self, port: &dyn LinkPort) -> bool {
        let n = self.dist_table.len();
        let old = self.dist_vector().to_vec();

        let link: Vec<(NodeId, Cost)> = self
            .neighbors
            .iter()
            .map(|&nb| (nb, port.link_cost(nb)))
            .collect();

        for d in (0..n).map(NodeId) {
            if d == self.id {
                continue;
            }
            let via = |nb: NodeId, c: Cost| (c + self.dist_table.get(nb, d)).cap(self.max_metric);

            let mut best = Cost::INFINITY;
            let mut hop = None;
            for &(nb, c) in &link {
                let cand = via(nb, c);
                if cand < best {
                    best = cand;
                    hop = Some(nb);
                }
            }
            if best.is_finite() {
                if let Some(&(cur, c)) = self
                    .predecessors[d.0]
                    .and_then(|cur| link.iter().find(|(nb, _)| *nb == cur))
                {
                    if via(cur, c) == best {
                        hop = Some(cur);
                    }
                }
            }

            self.dist_table.row_mut(self.id)[d.0] = best;
            self.predecessors[d.0] = hop;
        }

        self.dist_vector() != old.as_slice()
    }

    fn broadcast(&self, port: &mut dyn LinkPort) -> Result<(), TopologyError> {
        for &nb in &self.neighbors {
            port.to_link_layer(Packet::new(self.id, nb, self.dist_vector()))?;
        }
        Ok(())
    }
}
