use hypograph_core::{Hypothesis, HypothesisType};
use hypograph_graph::{build_graph, HypothesisLink, TraversalConfig};

fn hypothesis(title: &str) -> Hypothesis {
    Hypothesis::new(title.into(), HypothesisType::Problem)
}

// Two nodes linked A->B and B->A: no node is without a parent, so there are
// no roots, and a forced traversal from either node reports a cycle.
#[test]
fn mutual_links_leave_no_roots_and_mark_cycles() {
    let a = hypothesis("a");
    let b = hypothesis("b");
    let (a_id, b_id) = (a.id, b.id);
    let links = vec![
        HypothesisLink::new(a_id, b_id),
        HypothesisLink::new(b_id, a_id),
    ];
    let graph = build_graph(vec![a, b], &links);

    assert!(graph.roots().is_empty());

    for entry_point in [a_id, b_id] {
        let entries: Vec<_> = graph.traverse(entry_point).unwrap().collect();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].cyclic);
        assert_eq!(entries[2].node.hypothesis.id, entry_point);
    }
}

#[test]
fn unlinked_nodes_are_all_roots() {
    let nodes: Vec<_> = (0..4).map(|i| hypothesis(&format!("h{}", i))).collect();
    let graph = build_graph(nodes, &[]);

    assert_eq!(graph.roots().len(), 4);
    for node in graph.root_nodes() {
        assert!(node.children.is_empty());
        assert!(node.parents.is_empty());
    }
}

#[test]
fn max_nodes_caps_the_walk() {
    let a = hypothesis("a");
    let b = hypothesis("b");
    let c = hypothesis("c");
    let links = vec![
        HypothesisLink::new(a.id, b.id),
        HypothesisLink::new(b.id, c.id),
    ];
    let root = a.id;
    let graph = build_graph(vec![a, b, c], &links);

    let config = TraversalConfig {
        max_nodes: Some(2),
        ..Default::default()
    };
    let entries: Vec<_> = graph.traverse_with_config(root, config).unwrap().collect();
    assert_eq!(entries.len(), 2);
}
