//! Narrow capability handed to a node.
//!
//! A node may ask for the cost of its own links, one at a time, and hand packets
//! to the link layer. It never sees the whole cost matrix.

use super::cost::Cost;
use super::id::NodeId;
use super::link_layer::LinkLayer;
use super::packet::Packet;
use crate::error::TopologyError;

pub trait LinkPort {
    /// The node this port is bound to.
    fn owner(&self) -> NodeId;

    /// Cost of the link between the owner and `other`.
    fn link_cost(&self, other: NodeId) -> Cost;

    /// Schedule `pkt` for delivery.
    fn to_link_layer(&mut self, pkt: Packet) -> Result<(), TopologyError>;
}

/// A [`LinkPort`] backed by the simulator's link layer.
pub struct BoundPort<'a> {
    owner: NodeId,
    link: &'a mut LinkLayer,
}

impl<'a> BoundPort<'a> {
    pub(crate) fn new(owner: NodeId, link: &'a mut LinkLayer) -> Self {
        Self { owner, link }
    }
}

impl LinkPort for BoundPort<'_> {
    fn owner(&self) -> NodeId {
        self.owner
    }

    fn link_cost(&self, other: NodeId) -> Cost {
        self.link.topology().cost(self.owner, other)
    }

    fn to_link_layer(&mut self, pkt: Packet) -> Result<(), TopologyError> {
        if pkt.src() != self.owner {
            return Err(TopologyError::ForeignSource {
                owner: self.owner,
                src: pkt.src(),
            });
        }
        self.link.to_link_layer(pkt)
    }
}
