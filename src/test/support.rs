use crate::error::TopologyError;
use crate::net::{Cost, LinkPort, NodeId, Packet};

/// 用显式矩阵表示一个拓扑，`None` 表示不相连
pub fn matrix(rows: &[&[Option<u64>]]) -> Vec<Vec<Cost>> {
    rows.iter()
        .map(|row| row.iter().map(|&c| Cost::from(c)).collect())
        .collect()
}

pub fn costs(v: &[Option<u64>]) -> Vec<Cost> {
    v.iter().map(|&c| Cost::from(c)).collect()
}

/// 记录发出的数据包，链路代价取自给定的一行
pub struct MockPort {
    pub owner: NodeId,
    pub row: Vec<Cost>,
    pub sent: Vec<Packet>,
}

impl MockPort {
    pub fn new(owner: usize, row: Vec<Cost>) -> Self {
        Self {
            owner: NodeId(owner),
            row,
            sent: Vec::new(),
        }
    }

    pub fn take_sent(&mut self) -> Vec<Packet> {
        std::mem::take(&mut self.sent)
    }
}

impl LinkPort for MockPort {
    fn owner(&self) -> NodeId {
        self.owner
    }

    fn link_cost(&self, other: NodeId) -> Cost {
        self.row[other.0]
    }

    fn to_link_layer(&mut self, pkt: Packet) -> Result<(), TopologyError> {
        if pkt.src() != self.owner {
            return Err(TopologyError::ForeignSource {
                owner: self.owner,
                src: pkt.src(),
            });
        }
        if pkt.dest() == self.owner {
            return Err(TopologyError::SelfSend(self.owner));
        }
        if self.row[pkt.dest().0].is_infinite() {
            return Err(TopologyError::NotConnected {
                src: pkt.src(),
                dest: pkt.dest(),
            });
        }
        self.sent.push(pkt);
        Ok(())
    }
}
