use itertools::Itertools;
use lgraphs::{algo::*, prelude::*};

#[test]
fn forest_of_three_paths() {
    let forest = Forest::from_edges([(0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)]).unwrap();

    assert_eq!(forest.vertex_count(), 9);
    assert_eq!(forest.edge_count(), 6);
    assert!(forest.is_bipartite());
    assert_eq!(forest.connected_components().len(), 3);
    assert_eq!(forest.number_of_trees(), 3);
}

#[test]
fn directed_triangle() {
    let g = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]).unwrap();

    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.is_cyclic());
    assert_eq!(g.strongly_connected_components().len(), 1);
}

#[test]
fn cycle_with_tail() {
    let g = DirectedGraph::from_edges([(1, 0), (0, 2), (2, 1), (0, 3), (3, 4)]).unwrap();

    assert!(g.is_cyclic());
    assert_eq!(g.strongly_connected_components().len(), 3);
    assert_eq!(g.shortest_path(&0, &4), Ok(Some(2)));
}

#[test]
fn dag_ordering() {
    let g = DirectedGraph::from_edges([(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]).unwrap();

    let order = g.topological_sort().unwrap();
    assert_eq!(order.len(), 6);
    for Edge(u, v) in g.edges() {
        let pu = order.iter().position(|x| x == u).unwrap();
        let pv = order.iter().position(|x| x == v).unwrap();
        assert!(pu < pv);
    }
    assert_eq!(g.strongly_connected_components().len(), 6);
}

#[test]
fn classic_weighted_network() {
    let net = UnNetwork::from_weighted_edges([
        (0, 1, 4),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 8, 2),
        (2, 5, 4),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ]);

    assert_eq!(net.edge_count(), 14);
    assert_eq!(net.edge_sum(), 93);
    assert_eq!(net.spanning_tree().unwrap().edge_sum(), 37);

    assert_eq!(net.shortest_path(&0, &2), Ok(Some(12)));
    assert_eq!(net.shortest_path(&0, &4), Ok(Some(21)));
    assert_eq!(net.shortest_path(&0, &5), Ok(Some(11)));
    assert_eq!(net.shortest_path(&0, &7), Ok(Some(8)));
}

#[test]
fn classic_flow_network() {
    let net = DiNetwork::from_weighted_edges([
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 10),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ]);

    assert_eq!(net.max_flow(&0, &5), Ok(Some(23)));
}

#[test]
fn star_center_removal() {
    let mut net = UnNetwork::new();
    net.add_weighted_edges([(0, 1, 10), (0, 2, 10)]);

    net.remove_vertex(&0).unwrap();
    assert_eq!(net.vertex_count(), 2);
    assert_eq!(net.edge_sum(), 0);
    assert!(net.edges().is_empty());
    assert_eq!(net.vertices().copied().sorted().collect_vec(), vec![1, 2]);
}

#[test]
fn rejected_operations_do_not_mutate() {
    let mut forest = Forest::from_edges([("a", "b"), ("b", "c")]).unwrap();
    let before = forest.clone();

    assert_eq!(forest.add_edge("c", "a"), Err(GraphError::CycleViolation));
    assert_eq!(forest.add_edge("d", "d"), Err(GraphError::CycleViolation));
    assert_eq!(forest.remove_vertex(&"z"), Err(GraphError::VertexNotFound));
    assert_eq!(forest, before);
    assert!(!forest.contains(&"d"));
}

#[test]
fn traversal_exhaustion() {
    let g = DirectedGraph::from_edges([(0, 1)]).unwrap();

    let mut bfs = g.breadth_first_iterator(&0).unwrap();
    assert_eq!(bfs.try_next(), Ok(0));
    assert_eq!(bfs.try_next(), Ok(1));
    assert_eq!(bfs.try_next(), Err(GraphError::IteratorExhausted));

    assert!(g.depth_first_iterator(&7).is_err());
}
