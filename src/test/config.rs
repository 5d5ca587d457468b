use crate::error::ConfigError;
use crate::net::{Cost, NodeId};
use crate::sim::{DelaySpec, LinkChangeSpec, SimConfig, SimTime, TopologySpec};

#[test]
fn config_parses_minimal_json_with_defaults() {
    let raw = r#"{ "topology": { "kind": "reference" } }"#;
    let cfg: SimConfig = serde_json::from_str(raw).expect("parse config");
    assert!(matches!(cfg.topology, TopologySpec::Reference));
    assert_eq!(cfg.seed, 0);
    assert!(!cfg.enable_link_changes);
    assert!(cfg.link_changes.is_empty());
    assert_eq!(cfg.delay, DelaySpec { min: 1.0, max: 10.0 });
    assert_eq!(cfg.max_events, Some(1_000_000));
    assert_eq!(cfg.max_metric, None);
    assert!(cfg.effective_link_changes().is_empty());
}

#[test]
fn config_parses_matrix_with_null_as_unconnected() {
    let raw = r#"
    {
        "topology": { "kind": "matrix", "cost": [[0, 1, null], [1, 0, 2], [null, 2, 0]] },
        "seed": 9,
        "enable_link_changes": true,
        "link_changes": [ { "time": 5.5, "a": 0, "b": 1, "cost": null } ],
        "max_events": null
    }
    "#;
    let cfg: SimConfig = serde_json::from_str(raw).expect("parse config");
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.max_events, None);

    let topo = cfg.build_topology().expect("topology");
    assert_eq!(topo.len(), 3);
    assert_eq!(topo.cost(NodeId(0), NodeId(2)), Cost::INFINITY);
    assert_eq!(topo.cost(NodeId(2), NodeId(1)), Cost::new(2));

    let changes = cfg.effective_link_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].cost, Cost::INFINITY);
    assert_eq!(changes[0].at(), SimTime::from_units_f64(5.5));
}

#[test]
fn enabled_link_changes_without_schedule_use_default() {
    let mut cfg = SimConfig::new(TopologySpec::Reference);
    cfg.enable_link_changes = true;
    assert_eq!(
        cfg.effective_link_changes(),
        vec![LinkChangeSpec::new(10_000.0, 0, 1, Cost::new(2))]
    );
}

#[test]
fn random_topology_is_symmetric_and_seeded() {
    let a = SimConfig {
        seed: 4,
        ..SimConfig::new(TopologySpec::Random { nodes: 8 })
    };
    let b = SimConfig {
        seed: 4,
        ..SimConfig::new(TopologySpec::Random { nodes: 8 })
    };
    let ta = a.build_topology().expect("topology a");
    let tb = b.build_topology().expect("topology b");
    assert_eq!(ta, tb);
    for i in 0..8 {
        assert_eq!(ta.cost(NodeId(i), NodeId(i)), Cost::ZERO);
        for j in 0..8 {
            assert_eq!(ta.cost(NodeId(i), NodeId(j)), ta.cost(NodeId(j), NodeId(i)));
        }
    }
}

#[test]
fn bad_delay_range_is_rejected() {
    let mut cfg = SimConfig::new(TopologySpec::Reference);
    cfg.delay = DelaySpec { min: 5.0, max: 1.0 };
    assert!(matches!(
        cfg.transit_delay(),
        Err(ConfigError::DelayRange { .. })
    ));
}

#[test]
fn non_square_matrix_is_rejected() {
    let raw = r#"{ "topology": { "kind": "matrix", "cost": [[0, 1], [1]] } }"#;
    let cfg: SimConfig = serde_json::from_str(raw).expect("parse config");
    assert!(matches!(
        cfg.build_topology(),
        Err(ConfigError::NotSquare { row: 1, len: 1, expected: 2 })
    ));
}
