use mincostflow::{
    shortest_path, spfa, successive_shortest_paths, ArcSpec, Error, FlowPath, MinCostFlow,
    NodeId, ResidualGraph, SuccessiveShortestPaths, TopologyBuilder,
};
use petgraph::algo::bellman_ford;
use petgraph::graph::Graph;

fn build(arcs: &[(&str, &str, i32, i32)], cancellable: bool) -> ResidualGraph<i32> {
    arcs.iter()
        .fold(
            TopologyBuilder::new().cancellable(cancellable),
            |builder, &(source, target, capacity, cost)| {
                builder.arc(ArcSpec::new(source, target, capacity, cost).unwrap())
            },
        )
        .build()
        .unwrap()
}

fn terminals(graph: &ResidualGraph<i32>, source: &str, sink: &str) -> (NodeId, NodeId) {
    (graph.require(source).unwrap(), graph.require(sink).unwrap())
}

fn diamond() -> ResidualGraph<i32> {
    build(
        &[
            ("S", "A", 10, 1),
            ("S", "B", 5, 2),
            ("A", "B", 4, 1),
            ("A", "T", 7, 3),
            ("B", "T", 10, 1),
        ],
        false,
    )
}

fn negative_loop() -> ResidualGraph<i32> {
    build(
        &[
            ("S", "A", 1, 0),
            ("A", "B", 5, -1),
            ("B", "A", 5, -1),
            ("B", "T", 1, 0),
        ],
        false,
    )
}

/// Reference negative-cycle check over the positive-capacity arcs.
fn bellman_ford_finds_cycle(graph: &ResidualGraph<i32>, source: NodeId) -> bool {
    let mut g = Graph::<(), f64>::new();
    for _ in graph.nodes() {
        g.add_node(());
    }
    for arc in graph.flat_arcs() {
        if arc.weight.has_capacity() {
            g.add_edge(arc.source, arc.target, f64::from(arc.weight.cost));
        }
    }
    bellman_ford(&g, source).is_err()
}

#[test]
fn diamond_reaches_max_flow_at_min_cost() {
    let mut graph = diamond();
    let (s, t) = terminals(&graph, "S", "T");

    let summary = SuccessiveShortestPaths::new()
        .min_cost_flow(&mut graph, s, t)
        .unwrap();
    assert_eq!(summary.flow, 15);
    assert_eq!(summary.cost, 51);

    let steps: Vec<_> = summary
        .augmentations
        .iter()
        .map(|a| (a.path.labels(&graph), a.flow(), a.unit_cost))
        .collect();
    assert_eq!(
        steps,
        vec![
            (vec!["S", "B", "T"], 5, 3),
            (vec!["S", "A", "B", "T"], 4, 3),
            (vec!["S", "A", "T"], 6, 4),
        ]
    );
}

#[test]
fn insertion_order_breaks_ties() {
    let graph = diamond();
    let (s, t) = terminals(&graph, "S", "T");

    let path = shortest_path(&graph, s, t).unwrap();
    assert_eq!(path.labels(&graph), ["S", "B", "T"]);
    assert_eq!(graph.path_cost(&path), Ok(3));

    let b = graph.require("B").unwrap();
    let paths = spfa(&graph, s).unwrap();
    assert_eq!(paths.distance(t), Some(3));
    assert_eq!(paths.predecessor(b), Some(s));
}

#[test]
fn negative_cycle_is_reported() {
    let graph = negative_loop();
    let (s, t) = terminals(&graph, "S", "T");

    assert_eq!(shortest_path(&graph, s, t), Err(Error::NegativeCycle));
    // nothing leaks into the next query
    assert_eq!(spfa(&graph, s), Err(Error::NegativeCycle));
    assert!(bellman_ford_finds_cycle(&graph, s));
}

#[test]
fn driver_stops_on_negative_cycle() {
    let mut graph = negative_loop();
    let (s, t) = terminals(&graph, "S", "T");

    assert_eq!(
        successive_shortest_paths(&mut graph, s, t),
        Err(Error::NegativeCycle)
    );
    assert!(graph.arcs().all(|arc| arc.weight.flow == 0));
}

#[test]
fn exhausted_network_has_no_path() {
    let mut graph = diamond();
    let (s, t) = terminals(&graph, "S", "T");
    successive_shortest_paths(&mut graph, s, t).unwrap();

    assert!(shortest_path(&graph, s, t).unwrap().is_empty());
    assert_eq!(spfa(&graph, s).unwrap().distance(t), None);
    assert!(!bellman_ford_finds_cycle(&graph, s));
}

#[test]
fn repeated_queries_are_identical() {
    let graph = diamond();
    let (s, t) = terminals(&graph, "S", "T");

    let first = spfa(&graph, s).unwrap();
    for _ in 0..5 {
        assert_eq!(spfa(&graph, s).unwrap(), first);
        assert_eq!(shortest_path(&graph, s, t), first.path_to(t));
    }
}

#[test]
fn min_cut_matches_max_flow() {
    let mut graph = diamond();
    let (s, t) = terminals(&graph, "S", "T");
    let summary = successive_shortest_paths(&mut graph, s, t).unwrap();

    let (side, cut) = graph.min_cut(s);
    assert_eq!(side.len(), 1);
    assert!(side.contains(&s));
    let cut_flow: i32 = cut.iter().map(|arc| arc.weight.flow).sum();
    assert_eq!(cut_flow, summary.flow);
    assert!(cut.iter().all(|arc| arc.weight.is_saturated()));
    assert_eq!(
        cut.iter().map(ToString::to_string).collect::<Vec<_>>(),
        [
            "S -> A | cost: 1 | capacity: 0 | flow: 10",
            "S -> B | cost: 2 | capacity: 0 | flow: 5",
        ]
    );
}

#[test]
fn cancellation_needs_reverse_arcs() {
    let arcs = [
        ("S", "A", 1, 1),
        ("A", "B", 1, 1),
        ("B", "T", 1, 1),
        ("S", "B", 1, 5),
        ("A", "T", 1, 5),
    ];

    let mut graph = build(&arcs, false);
    let (s, t) = terminals(&graph, "S", "T");
    let summary = successive_shortest_paths(&mut graph, s, t).unwrap();
    assert_eq!((summary.flow, summary.cost), (1, 3));

    let mut graph = build(&arcs, true);
    let (s, t) = terminals(&graph, "S", "T");
    let summary = successive_shortest_paths(&mut graph, s, t).unwrap();
    assert_eq!((summary.flow, summary.cost), (2, 12));
    assert_eq!(summary.path_costs(), [3, 9]);
    assert_eq!(
        summary.augmentations[1].path.labels(&graph),
        ["S", "B", "A", "T"]
    );
}

#[test]
fn assignment_with_and_without_cancellation() {
    let costs = vec![vec![1, 2], vec![2, 100]];
    for (cancellable, cost) in [(false, 101), (true, 4)] {
        let mut graph = TopologyBuilder::assignment(&costs, 1)
            .unwrap()
            .cancellable(cancellable)
            .build()
            .unwrap();
        let (s, t) = terminals(&graph, "s", "t");
        let summary = successive_shortest_paths(&mut graph, s, t).unwrap();
        assert_eq!((summary.flow, summary.cost), (2, cost));
    }
}

#[test]
fn assignment_prefers_cheapest_tasks() {
    let mut graph = TopologyBuilder::assignment(&[vec![4, 1], vec![2, 3]], 1)
        .unwrap()
        .build()
        .unwrap();
    let (s, t) = terminals(&graph, "s", "t");
    let summary = successive_shortest_paths(&mut graph, s, t).unwrap();
    assert_eq!((summary.flow, summary.cost), (2, 3));

    let p0 = graph.require("p0").unwrap();
    let task1 = graph.require("task1").unwrap();
    let taken = graph.arc(graph.find_arc(p0, task1).unwrap()).unwrap();
    assert_eq!((taken.flow, taken.capacity), (1, 0));
}

#[test]
fn mincost_flow_tables() {
    // arcs 0..4 plus a super source `s` and a sink `t`
    let sources = ["0", "0", "1", "1", "1", "2", "2", "3", "4", "s", "3", "4"];
    let targets = ["1", "2", "2", "3", "4", "3", "4", "4", "2", "0", "t", "t"];
    let capacities = [15, 8, 20, 4, 10, 15, 4, 20, 5, 20, 5, 15];
    let costs = [4, 4, 2, 2, 6, 1, 3, 2, 3, 0, 0, 0];

    let mut graph = TopologyBuilder::from_tables(&sources, &targets, &capacities, &costs)
        .unwrap()
        .cancellable(true)
        .build()
        .unwrap();
    let (s, t) = terminals(&graph, "s", "t");
    let summary = successive_shortest_paths(&mut graph, s, t).unwrap();

    assert_eq!(summary.flow, 20);
    assert_eq!(summary.cost, 150);
    assert!(summary.path_costs().windows(2).all(|w| w[0] <= w[1]));
}

#[cfg(feature = "lemon-cpp")]
mod network_simplex {
    use mincostflow::NetworkSimplex;

    use super::*;

    #[test]
    fn agrees_with_successive_shortest_paths() {
        let mut graph = diamond();
        let (s, t) = terminals(&graph, "S", "T");

        let summary = NetworkSimplex.min_cost_flow(&mut graph, s, t).unwrap();
        assert_eq!((summary.flow, summary.cost), (15, 51));
        let priced: i32 = summary
            .augmentations
            .iter()
            .map(|a| a.flow * a.unit_cost)
            .sum();
        assert_eq!(priced, 51);
        assert!(graph.arcs().all(|arc| arc.weight.flow == 0));

        let ssp = successive_shortest_paths(&mut graph, s, t).unwrap();
        assert_eq!((ssp.flow, ssp.cost), (summary.flow, summary.cost));
    }

    #[test]
    fn prices_parallel_arcs_by_the_arc_used() {
        let mut graph = build(&[("S", "T", 1, 1), ("S", "T", 1, 5)], false);
        let (s, t) = terminals(&graph, "S", "T");

        let summary = NetworkSimplex.min_cost_flow(&mut graph, s, t).unwrap();
        assert_eq!((summary.flow, summary.cost), (2, 6));
        let mut costs = summary.path_costs();
        costs.sort_unstable();
        assert_eq!(costs, [1, 5]);
    }
}
