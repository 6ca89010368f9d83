//! Branching step integration tests
//!
//! Drives a [`ChooseStep`] over a small social graph: six people/projects,
//! `knows` and `created` edges. Sub-traversals are neighbor hops computed
//! with petgraph; the branch keys come from scripted and native key
//! functions.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use pretty_assertions::assert_eq;
use rhai::Dynamic;
use rhai_lambda::{ChooseStep, InvocationResult, RhaiLambda};
use std::collections::HashMap;
use std::sync::Arc;

struct SocialGraph {
    graph: DiGraph<&'static str, &'static str>,
    by_name: HashMap<&'static str, NodeIndex>,
    ages: HashMap<&'static str, i64>,
}

/// The classic six-vertex fixture: four people with ages, two projects
/// without, `knows` edges between people and `created` edges to projects.
fn social_graph() -> SocialGraph {
    let mut graph = DiGraph::new();
    let marko = graph.add_node("marko");
    let vadas = graph.add_node("vadas");
    let lop = graph.add_node("lop");
    let josh = graph.add_node("josh");
    let ripple = graph.add_node("ripple");
    let peter = graph.add_node("peter");

    graph.add_edge(marko, vadas, "knows");
    graph.add_edge(marko, josh, "knows");
    graph.add_edge(marko, lop, "created");
    graph.add_edge(josh, ripple, "created");
    graph.add_edge(josh, lop, "created");
    graph.add_edge(peter, lop, "created");

    let by_name = graph
        .node_indices()
        .map(|idx| (graph[idx], idx))
        .collect();
    let ages = HashMap::from([("marko", 29), ("vadas", 27), ("josh", 32), ("peter", 35)]);

    SocialGraph {
        graph,
        by_name,
        ages,
    }
}

impl SocialGraph {
    fn vertices(&self) -> Vec<Dynamic> {
        self.graph
            .node_indices()
            .map(|idx| Dynamic::from(self.graph[idx].to_string()))
            .collect()
    }

    fn vertices_with_age(&self) -> Vec<Dynamic> {
        self.graph
            .node_indices()
            .filter(|idx| self.ages.contains_key(self.graph[*idx]))
            .map(|idx| Dynamic::from(self.graph[idx].to_string()))
            .collect()
    }
}

/// Neighbor hop as a sub-traversal over vertex names
fn hop(fixture: Arc<SocialGraph>, direction: Direction) -> impl Fn(Dynamic) -> Vec<Dynamic> {
    move |input: Dynamic| {
        let name = input.into_string().expect("vertex name");
        let idx = fixture.by_name[name.as_str()];
        fixture
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| Dynamic::from(fixture.graph[n].to_string()))
            .collect()
    }
}

fn both_hop(fixture: Arc<SocialGraph>) -> impl Fn(Dynamic) -> Vec<Dynamic> {
    let incoming = hop(Arc::clone(&fixture), Direction::Incoming);
    let outgoing = hop(fixture, Direction::Outgoing);
    move |input: Dynamic| {
        let mut out = outgoing(input.clone());
        out.extend(incoming(input));
        out
    }
}

fn count_names(results: &[Dynamic]) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for value in results {
        *counts.entry(value.clone().into_string().unwrap()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn trivial_choose_predicate_works() {
    let fixture = Arc::new(social_graph());

    // Constant-false native predicate: every traverser takes the false branch
    let step = ChooseStep::new(|_: Dynamic| -> InvocationResult<Dynamic> {
        Ok(Dynamic::from(false))
    })
    .option(true, |_| vec![Dynamic::from("foo")])
    .option(false, |_| vec![Dynamic::from("bar")]);

    let results = step.apply_all(fixture.vertices()).unwrap();

    assert_eq!(results.len(), 6);
    assert!(results
        .iter()
        .all(|v| v.clone().into_string().unwrap() == "bar"));
}

#[test]
fn simple_choose_predicate_works() {
    let fixture = Arc::new(social_graph());

    // Five-letter names hop outward, everyone else hops inward
    let step = ChooseStep::new(RhaiLambda::new("|name| name.len() == 5").unwrap())
        .option(true, hop(Arc::clone(&fixture), Direction::Outgoing))
        .option(false, hop(Arc::clone(&fixture), Direction::Incoming));

    let results = step.apply_all(fixture.vertices()).unwrap();
    let counts = count_names(&results);

    assert_eq!(results.len(), 9);
    assert_eq!(
        counts,
        HashMap::from([
            ("vadas".to_string(), 1),
            ("josh".to_string(), 3),
            ("lop".to_string(), 2),
            ("marko".to_string(), 2),
            ("peter".to_string(), 1),
        ])
    );
}

#[test]
fn simple_choose_function_works() {
    let fixture = Arc::new(social_graph());

    // Native key function: name length selects the hop direction
    let step = ChooseStep::new(|name: Dynamic| -> InvocationResult<Dynamic> {
        Ok(Dynamic::from(name.into_string().unwrap().len() as i64))
    })
    .option(5_i64, hop(Arc::clone(&fixture), Direction::Incoming))
    .option(4_i64, hop(Arc::clone(&fixture), Direction::Outgoing))
    .option(3_i64, both_hop(Arc::clone(&fixture)));

    let results = step.apply_all(fixture.vertices_with_age()).unwrap();
    let counts = count_names(&results);

    assert_eq!(results.len(), 3);
    assert_eq!(
        counts,
        HashMap::from([
            ("marko".to_string(), 1),
            ("lop".to_string(), 1),
            ("ripple".to_string(), 1),
        ])
    );
}

#[test]
fn scripted_choose_function_works() {
    let fixture = Arc::new(social_graph());

    // Same dispatch as above, but the key function is a scripted closure
    let lambda = RhaiLambda::new("|name| name.len()").unwrap();

    let step = ChooseStep::new(lambda)
        .option(5_i64, hop(Arc::clone(&fixture), Direction::Incoming))
        .option(4_i64, hop(Arc::clone(&fixture), Direction::Outgoing))
        .option(3_i64, both_hop(Arc::clone(&fixture)));

    let results = step.apply_all(fixture.vertices_with_age()).unwrap();
    let counts = count_names(&results);

    assert_eq!(results.len(), 3);
    assert_eq!(
        counts,
        HashMap::from([
            ("marko".to_string(), 1),
            ("lop".to_string(), 1),
            ("ripple".to_string(), 1),
        ])
    );
}
