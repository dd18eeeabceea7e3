//!
//! utils
//!
//! Conversion of a `CostModel` into a petgraph `DiGraph` for drawing.
//!
use super::cost::{AffineCost, Cost, CostModel, LinkCost};
use super::flow::Flow;
use super::flow_rate::FlowRateLike;
use super::link::LinkId;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// node name used for links without endpoints
pub const ORIGIN: &str = "o";
pub const DESTINATION: &str = "d";

/// Edge label of the drawn network
#[derive(Debug, Clone, PartialEq)]
pub struct DrawEdge {
    pub id: LinkId,
    pub cost: AffineCost,
    pub flow: Option<f64>,
    pub time: Option<Cost>,
}

impl std::fmt::Display for DrawEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.flow, self.time) {
            (Some(flow), Some(time)) => write!(f, "{} f={} t={}", self.id, flow, time),
            _ => write!(f, "{} t={}", self.id, self.cost),
        }
    }
}

pub type LinkGraph = DiGraph<String, DrawEdge>;

///
/// Build the network graph of `model`, labelling each edge with the flow and
/// travel time of `flow` when given.
///
/// Nodes are created in order of first appearance.
///
pub fn to_link_graph<F: FlowRateLike>(model: &CostModel, flow: Option<&Flow<F>>) -> LinkGraph {
    let mut graph = LinkGraph::new();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();
    let mut node = |graph: &mut LinkGraph, name: &str| -> NodeIndex {
        *nodes
            .entry(name.to_string())
            .or_insert_with(|| graph.add_node(name.to_string()))
    };

    for edge in model.edges() {
        let (v, w) = match &edge.endpoints {
            Some((from, to)) => (node(&mut graph, from.as_str()), node(&mut graph, to.as_str())),
            None => (node(&mut graph, ORIGIN), node(&mut graph, DESTINATION)),
        };
        let f = flow.and_then(|flow| flow.get(&edge.id));
        graph.add_edge(
            v,
            w,
            DrawEdge {
                id: edge.id.clone(),
                cost: edge.cost,
                flow: f.map(|f| f.to_f64()),
                time: f.map(|f| edge.cost.travel_time(f)),
            },
        );
    }
    graph
}

/// Graphviz DOT of the network
pub fn draw(model: &CostModel) -> String {
    let graph = to_link_graph::<f64>(model, None);
    format!("{}", Dot::with_config(&graph, &[]))
}

/// Graphviz DOT of the network with flow and travel time on every edge
pub fn draw_with_flow<F: FlowRateLike>(model: &CostModel, flow: &Flow<F>) -> String {
    let graph = to_link_graph(model, Some(flow));
    format!("{}", Dot::with_config(&graph, &[]))
}

#[cfg(test)]
mod tests {
    use super::super::mocks::{mock_parallel_links, mock_reference_network};
    use super::*;

    #[test]
    fn reference_network_shape() {
        let m = mock_reference_network();
        let g = to_link_graph::<f64>(&m, None);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 5);
        let names: Vec<&str> = g.node_weights().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D", "C", "E"]);
    }

    #[test]
    fn links_without_endpoints_are_parallel() {
        let m = mock_parallel_links();
        let g = to_link_graph::<f64>(&m, None);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
        for e in g.edge_indices() {
            let (v, w) = g.edge_endpoints(e).unwrap();
            assert_eq!(g[v], ORIGIN);
            assert_eq!(g[w], DESTINATION);
        }
    }

    #[test]
    fn flow_labels() {
        let m = mock_parallel_links();
        let f = Flow::from_vec(&[("A", 10.0), ("B", 0.0)]);
        let g = to_link_graph(&m, Some(&f));
        let labels: Vec<String> = g.edge_weights().map(|e| e.to_string()).collect();
        assert_eq!(labels, vec!["A f=10 t=10", "B f=0 t=5"]);

        let dot = draw_with_flow(&m, &f);
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("A f=10 t=10"));
        assert!(draw(&m).contains("B t=5 + 1f"));
    }
}
