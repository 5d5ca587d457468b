use crate::net::{Cost, NodeId, Packet};
use crate::sim::{Event, EventKind, EventQueue, SimTime};

fn arrival(at: u64, src: usize, dest: usize, tag: u64) -> Event {
    Event::packet_arrival(
        SimTime(at),
        Packet::new(NodeId(src), NodeId(dest), &[Cost::new(tag)]),
    )
}

fn tag(ev: &Event) -> u64 {
    ev.packet().expect("packet event").dist_vector()[0]
        .finite()
        .expect("finite tag")
}

#[test]
fn extract_min_orders_by_time_then_insertion() {
    let mut q = EventQueue::new();
    q.insert(arrival(10, 0, 1, 1));
    q.insert(arrival(5, 0, 1, 2));
    q.insert(arrival(10, 1, 0, 3));
    q.insert(arrival(7, 2, 1, 4));

    let mut order = Vec::new();
    while let Some(ev) = q.extract_min() {
        order.push(tag(&ev));
    }
    assert_eq!(order, vec![2, 4, 1, 3]);
    assert!(q.is_empty());
    assert!(q.extract_min().is_none());
}

#[test]
fn latest_arrival_time_only_considers_matching_link() {
    let mut q = EventQueue::new();
    assert_eq!(q.latest_arrival_time(NodeId(0), NodeId(1)), None);

    q.insert(arrival(10, 0, 1, 0));
    q.insert(arrival(30, 0, 1, 0));
    q.insert(arrival(50, 1, 0, 0));
    q.insert(arrival(70, 2, 1, 0));
    q.insert(Event::link_change(SimTime(90), NodeId(0), NodeId(1), Cost::new(1)));

    assert_eq!(q.latest_arrival_time(NodeId(0), NodeId(1)), Some(SimTime(30)));
    assert_eq!(q.latest_arrival_time(NodeId(1), NodeId(0)), Some(SimTime(50)));
    assert_eq!(q.latest_arrival_time(NodeId(2), NodeId(1)), Some(SimTime(70)));
    assert_eq!(q.latest_arrival_time(NodeId(1), NodeId(2)), None);
}

#[test]
fn link_change_events_carry_no_packet() {
    let ev = Event::link_change(SimTime(1), NodeId(3), NodeId(4), Cost::INFINITY);
    assert!(ev.packet().is_none());
    assert_eq!(ev.node, NodeId(3));
    assert_eq!(
        ev.kind,
        EventKind::LinkChange {
            peer: NodeId(4),
            cost: Cost::INFINITY
        }
    );
}

#[test]
fn packet_arrival_targets_packet_destination() {
    let ev = arrival(3, 2, 5, 9);
    assert_eq!(ev.node, NodeId(5));
    assert_eq!(ev.packet().map(|p| p.src()), Some(NodeId(2)));
}
