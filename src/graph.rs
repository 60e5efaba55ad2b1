//! Weighted directed graphs read from a line-oriented text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! start Arad
//! goal Bucharest
//! edge Arad Sibiu 140            # one direction, action "Arad->Sibiu"
//! edge Sibiu Fagaras 99 north    # one direction, action "north"
//! link Pitesti Bucharest 101     # both directions
//! heuristic Arad 366             # estimate used by A*, default 0
//! ```

use std::collections::{HashMap, HashSet};
use std::io::{self, Read};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use searcher::{SearchProblem, Successor};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Line {0}: unrecognized directive {1:?}")]
    UnknownDirective(usize, String),

    #[error("Line {0}: malformed {1} directive")]
    Malformed(usize, &'static str),

    #[error("Line {0}: invalid number {1:?}")]
    InvalidNumber(usize, String),

    #[error("Line {0}: start node given a second time")]
    DuplicateStart(usize),

    #[error("Line {0}: {1} already has an edge labelled {2:?}")]
    DuplicateAction(usize, String, String),

    #[error("Graph has no start node")]
    MissingStart,

    #[error("Graph has no goal nodes")]
    MissingGoal,

    #[error("Unable to read graph")]
    Io(#[from] io::Error),
}

pub type Result<T> = ::std::result::Result<T, GraphError>;

/// Index of a node within a [RoutingGraph].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Edge {
    to: NodeId,
    cost: f64,
    action: String,
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    edges: Vec<Edge>,
    estimate: f64,
}

#[derive(Debug, Clone)]
pub struct RoutingGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    start: Option<NodeId>,
    goals: HashSet<NodeId>,
}

impl RoutingGraph {
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    fn empty() -> Self {
        RoutingGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            start: None,
            goals: HashSet::new(),
        }
    }

    fn node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            edges: Vec::new(),
            estimate: 0.0,
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add a directed edge. Labels must be unique among the edges leaving
    /// a node, so that a list of actions names exactly one path.
    fn connect(
        &mut self,
        line: usize,
        from: &str,
        to: &str,
        cost: f64,
        action: Option<&str>,
    ) -> Result<()> {
        let action = action
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}->{}", from, to));
        let source = self.node(from);
        let to = self.node(to);

        let edges = &mut self.nodes[source].edges;
        if edges.iter().any(|e| e.action == action) {
            return Err(GraphError::DuplicateAction(line, from.to_string(), action));
        }
        edges.push(Edge { to, cost, action });
        Ok(())
    }

    fn edges(&self, node: NodeId) -> &[Edge] {
        self.nodes.get(node).map(|n| n.edges.as_slice()).unwrap_or(&[])
    }

    /// Number of distinct nodes mentioned by the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node].name
    }

    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// The heuristic value given for this node, or zero.
    pub fn estimate(&self, node: NodeId) -> f64 {
        self.nodes.get(node).map_or(0.0, |n| n.estimate)
    }
}

/// Heuristic which reads the per-node estimates given in the graph file.
pub fn tabulated(state: &NodeId, graph: &RoutingGraph) -> f64 {
    graph.estimate(*state)
}

fn number(line: usize, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(GraphError::InvalidNumber(line, text.to_string())),
    }
}

impl FromStr for RoutingGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        lazy_static! {
            static ref DIRECTIVE: Regex = Regex::new(r"^(?P<directive>[a-z]+)\b").unwrap();
            static ref NODE: Regex = Regex::new(r"^(?:start|goal)\s+(?P<node>\S+)$").unwrap();
            static ref EDGE: Regex = Regex::new(
                r"^(?:edge|link)\s+(?P<from>\S+)\s+(?P<to>\S+)\s+(?P<cost>\S+)(?:\s+(?P<action>\S+))?$"
            )
            .unwrap();
            static ref ESTIMATE: Regex =
                Regex::new(r"^heuristic\s+(?P<node>\S+)\s+(?P<value>\S+)$").unwrap();
        }

        let mut graph = RoutingGraph::empty();

        for (n, raw) in s.lines().enumerate() {
            let lineno = n + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let directive = DIRECTIVE
                .captures(line)
                .map(|c| c["directive"].to_string())
                .ok_or_else(|| GraphError::UnknownDirective(lineno, line.to_string()))?;

            match directive.as_str() {
                "start" | "goal" => {
                    let caps = NODE
                        .captures(line)
                        .ok_or(GraphError::Malformed(lineno, "start/goal"))?;
                    let node = graph.node(&caps["node"]);
                    if directive == "goal" {
                        graph.goals.insert(node);
                    } else if graph.start.replace(node).is_some() {
                        return Err(GraphError::DuplicateStart(lineno));
                    }
                }
                "edge" | "link" => {
                    let caps = EDGE
                        .captures(line)
                        .ok_or(GraphError::Malformed(lineno, "edge"))?;
                    let cost = number(lineno, &caps["cost"])?;
                    let action = caps.name("action").map(|m| m.as_str());
                    graph.connect(lineno, &caps["from"], &caps["to"], cost, action)?;
                    if directive == "link" {
                        graph.connect(lineno, &caps["to"], &caps["from"], cost, None)?;
                    }
                }
                "heuristic" => {
                    let caps = ESTIMATE
                        .captures(line)
                        .ok_or(GraphError::Malformed(lineno, "heuristic"))?;
                    let value = number(lineno, &caps["value"])?;
                    let node = graph.node(&caps["node"]);
                    graph.nodes[node].estimate = value;
                }
                other => return Err(GraphError::UnknownDirective(lineno, other.to_string())),
            }
        }

        if graph.start.is_none() {
            return Err(GraphError::MissingStart);
        }
        if graph.goals.is_empty() {
            return Err(GraphError::MissingGoal);
        }
        Ok(graph)
    }
}

impl SearchProblem for RoutingGraph {
    type State = NodeId;
    type Action = String;
    type Cost = f64;

    fn start(&self) -> NodeId {
        // Parsing guarantees a start node.
        self.start.unwrap_or_default()
    }

    fn is_goal(&self, state: &NodeId) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &NodeId) -> Vec<Successor<NodeId, String, f64>> {
        self.edges(*state)
            .iter()
            .map(|e| Successor::new(e.to, e.action.clone(), e.cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[String]) -> Option<f64> {
        let mut here = self.start();
        let mut total = 0.0;
        for action in actions {
            let edge = self.edges(here).iter().find(|e| &e.action == action)?;
            total += edge.cost;
            here = edge.to;
        }
        Some(total)
    }
}
