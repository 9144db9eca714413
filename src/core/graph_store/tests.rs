use super::*;
use glam::Vec2;

fn store_with_nodes(positions: &[(f32, f32)]) -> GraphStore {
    let mut store = GraphStore::new(26, 64);
    for &(x, y) in positions {
        store.add_node(Vec2::new(x, y)).expect("Kapazität reicht");
    }
    store
}

fn assert_consistent(store: &GraphStore) {
    for (i, node) in store.nodes().iter().enumerate() {
        assert_eq!(node.index, i);
        assert_eq!(node.label, crate::core::label_for_index(i));
    }
    for edge in store.edges() {
        assert!(edge.src < store.node_count());
        assert!(edge.dest < store.node_count());
    }
}

#[test]
fn test_add_node_until_capacity() {
    let mut store = GraphStore::new(3, 8);

    for expected in 0..3 {
        let index = store
            .add_node(Vec2::new(expected as f32 * 0.2, 0.0))
            .expect("Unter der Kapazität");
        assert_eq!(index, expected);
    }

    let rejected = store.add_node(Vec2::new(0.9, 0.9));
    assert_eq!(
        rejected,
        Err(GraphError::CapacityExceeded {
            kind: CapacityKind::Nodes,
            capacity: 3
        })
    );
    assert_eq!(store.node_count(), 3);
}

#[test]
fn test_add_edge_rejects_over_capacity_without_mutation() {
    let mut store = GraphStore::new(4, 1);
    store.add_node(Vec2::ZERO).unwrap();
    store.add_node(Vec2::ONE).unwrap();

    assert_eq!(store.add_edge(0, 1, 1.0), Ok(0));
    assert!(matches!(
        store.add_edge(1, 0, 2.0),
        Err(GraphError::CapacityExceeded {
            kind: CapacityKind::Edges,
            ..
        })
    ));
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_add_edge_allows_duplicates_and_self_loops() {
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.5, 0.0)]);

    store.add_edge(0, 1, 1.0).unwrap();
    store.add_edge(1, 0, 3.0).unwrap();
    store.add_edge(1, 1, 2.0).unwrap();

    assert_eq!(store.edge_count(), 3);
    // Endpunkte bleiben wörtlich gespeichert
    assert_eq!(store.edges()[1].src, 1);
    assert_eq!(store.edges()[1].dest, 0);
}

#[test]
fn test_add_edge_rejects_dangling_endpoint() {
    let mut store = store_with_nodes(&[(0.0, 0.0)]);

    let result = store.add_edge(0, 5, 1.0);

    assert_eq!(
        result,
        Err(GraphError::NodeOutOfRange {
            index: 5,
            node_count: 1
        })
    );
    assert_eq!(store.edge_count(), 0);
}

#[test]
fn test_delete_node_cascades_and_renumbers() {
    // A-B, B-C, C-D, A-D
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.3, 0.0), (0.6, 0.0), (0.9, 0.0)]);
    store.add_edge(0, 1, 1.0).unwrap();
    store.add_edge(1, 2, 2.0).unwrap();
    store.add_edge(2, 3, 3.0).unwrap();
    store.add_edge(0, 3, 4.0).unwrap();

    let removed = store.delete_node(1).expect("B existiert");

    assert_eq!(removed.label, 'B');
    assert_eq!(store.node_count(), 3);
    assert_eq!(store.edge_count(), 2);
    assert_consistent(&store);

    // Ehemals C-D (2-3) ist jetzt 1-2, A-D (0-3) jetzt 0-2
    assert_eq!(store.edges()[0], Edge::new(1, 2, 3.0));
    assert_eq!(store.edges()[1], Edge::new(0, 2, 4.0));
    // Ehemals C trägt jetzt Label B
    assert_eq!(store.nodes()[1].label, 'B');
    assert_eq!(store.nodes()[1].position, Vec2::new(0.6, 0.0));
}

#[test]
fn test_delete_every_position_keeps_invariants() {
    for victim in 0..5 {
        let mut store = store_with_nodes(&[
            (0.0, 0.0),
            (0.2, 0.0),
            (0.4, 0.0),
            (0.6, 0.0),
            (0.8, 0.0),
        ]);
        for i in 0..5 {
            store.add_edge(i, (i + 1) % 5, 1.0 + i as f32).unwrap();
            store.add_edge(i, (i + 2) % 5, 10.0 + i as f32).unwrap();
        }

        store.delete_node(victim).unwrap();

        assert_eq!(store.node_count(), 4);
        // Jeder Node hat 4 inzidente Kanten; 10 - 4 = 6
        assert_eq!(store.edge_count(), 6);
        assert_consistent(&store);
    }
}

#[test]
fn test_delete_node_out_of_range_is_rejected() {
    let mut store = store_with_nodes(&[(0.0, 0.0)]);

    assert!(store.delete_node(1).is_err());
    assert_eq!(store.node_count(), 1);
}

#[test]
fn test_set_edge_weight_returns_previous() {
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.5, 0.0)]);
    store.add_edge(0, 1, 1.5).unwrap();

    assert_eq!(store.set_edge_weight(0, 7.0), Ok(1.5));
    assert_eq!(store.edges()[0].weight, 7.0);
    assert!(store.set_edge_weight(3, 1.0).is_err());
}

#[test]
fn test_find_node_near_first_match_by_index() {
    let store = store_with_nodes(&[(0.0, 0.0), (0.05, 0.0), (0.9, 0.9)]);

    // Beide ersten Nodes liegen im Radius; Index 0 gewinnt, obwohl 1 näher ist
    assert_eq!(store.find_node_near(Vec2::new(0.04, 0.0), 0.08), Some(0));
    assert_eq!(store.find_node_near(Vec2::new(0.9, 0.85), 0.08), Some(2));
    assert_eq!(store.find_node_near(Vec2::new(-0.5, -0.5), 0.08), None);
}

#[test]
fn test_find_edge_near_first_under_threshold_not_nearest() {
    let mut store = store_with_nodes(&[(-0.5, 0.0), (0.5, 0.0), (-0.5, 0.04), (0.5, 0.04)]);
    // Kante 0 bei y=0, Kante 1 bei y=0.04
    store.add_edge(0, 1, 1.0).unwrap();
    store.add_edge(2, 3, 1.0).unwrap();

    // Punkt liegt 0.025 von Kante 0 und 0.015 von Kante 1 entfernt
    let hit = store.find_edge_near(Vec2::new(0.0, 0.025), 0.03);

    assert_eq!(hit, Some(0));
    assert_eq!(store.find_edge_near(Vec2::new(0.0, 0.5), 0.03), None);
}

#[test]
fn test_find_edge_near_uses_node_centers() {
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.4, 0.0)]);
    store.add_edge(0, 1, 1.0).unwrap();

    // Knapp neben dem Mittelpunkt von Node 0 liegt noch auf dem Segment-Ende
    assert_eq!(store.find_edge_near(Vec2::new(0.0, 0.01), 0.03), Some(0));
    // Jenseits des Endpunkts greift die Klemmung
    assert_eq!(store.find_edge_near(Vec2::new(0.5, 0.0), 0.03), None);
}

#[test]
fn test_connected_components_are_independent_calls() {
    let mut store = store_with_nodes(&[
        (0.0, 0.0),
        (0.1, 0.0),
        (0.2, 0.0),
        (0.5, 0.5),
        (0.6, 0.5),
        (-0.5, -0.5),
    ]);
    store.add_edge(0, 1, 1.0).unwrap();
    store.add_edge(2, 1, 1.0).unwrap();
    store.add_edge(3, 4, 1.0).unwrap();

    assert_eq!(store.connected_component(2), vec![0, 1, 2]);
    assert_eq!(store.connected_component(4), vec![3, 4]);
    assert_eq!(store.connected_component(5), vec![5]);
    assert!(store.connected_component(9).is_empty());
    // Wiederholte Aufrufe teilen keinen Zustand
    assert_eq!(store.connected_component(0), vec![0, 1, 2]);
    assert_eq!(store.component_count(), 3);
}

#[test]
fn test_neighbors_are_undirected() {
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.1, 0.0), (0.2, 0.0)]);
    store.add_edge(0, 1, 1.0).unwrap();
    store.add_edge(2, 0, 1.0).unwrap();

    let neighbors: Vec<(usize, usize)> = store.neighbors(0).collect();

    assert_eq!(neighbors, vec![(1, 0), (2, 1)]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut store = store_with_nodes(&[(0.0, 0.0), (0.1, 0.0)]);
    store.add_edge(0, 1, 1.0).unwrap();

    store.clear();

    assert_eq!(store.node_count(), 0);
    assert_eq!(store.edge_count(), 0);
    assert_eq!(store.max_nodes(), 26);
}

#[test]
fn test_huge_capacity_limits_do_not_allocate() {
    let mut store = GraphStore::new(usize::MAX, usize::MAX);

    let a = store.add_node(Vec2::new(0.0, 0.0)).unwrap();
    let b = store.add_node(Vec2::new(0.5, 0.0)).unwrap();
    store.add_edge(a, b, 2.0).unwrap();

    assert_eq!(store.max_nodes(), usize::MAX);
    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_component_count_agrees_with_connected_component() {
    let mut store = store_with_nodes(&[
        (0.0, 0.0),
        (0.1, 0.0),
        (0.2, 0.0),
        (0.3, 0.0),
        (0.4, 0.0),
    ]);
    store.add_edge(4, 0, 1.0).unwrap();
    store.add_edge(1, 3, 1.0).unwrap();
    store.add_edge(3, 3, 1.0).unwrap();

    let mut distinct: Vec<Vec<usize>> = (0..store.node_count())
        .map(|start| store.connected_component(start))
        .collect();
    distinct.sort();
    distinct.dedup();

    assert_eq!(distinct, vec![vec![0, 4], vec![1, 3], vec![2]]);
    assert_eq!(store.component_count(), distinct.len());
}
