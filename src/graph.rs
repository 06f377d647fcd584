//! Labelled undirected graphs and the adapter trait the walk/solver code reads.

use crate::{Error, Result};
use std::collections::HashMap;

/// A graph view that can return **borrowed** neighbor slices.
///
/// The sampler only ever needs this: it avoids allocating a new `Vec`
/// on every step of a random walk.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
    /// Number of undirected edges (each counted once).
    fn edge_count(&self) -> usize {
        (0..self.node_count()).map(|u| self.degree(u)).sum::<usize>() / 2
    }
}

/// Simple, unweighted, undirected graph with string labels.
///
/// Node ids are assigned in first-seen order while reading the edge list.
/// Neighbor lists are sorted ascending.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(a, b)` label pairs.
    ///
    /// Rejects self-loops and duplicate edges (in either orientation).
    pub fn from_edges<S: AsRef<str>>(edges: &[(S, S)]) -> Result<Self> {
        let mut g = Self::new();
        for (a, b) in edges {
            g.add_edge(a.as_ref(), b.as_ref())?;
        }
        Ok(g)
    }

    /// Add a node if missing; returns its id.
    pub fn add_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adj.push(Vec::new());
        id
    }

    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(Error::InvalidEdge(format!("self-loop on {a}")));
        }
        let u = self.add_node(a);
        let v = self.add_node(b);
        let pos = match self.adj[u].binary_search(&v) {
            Ok(_) => return Err(Error::InvalidEdge(format!("duplicate edge {a}-{b}"))),
            Err(pos) => pos,
        };
        self.adj[u].insert(pos, v);
        let pos = self.adj[v].binary_search(&u).unwrap_or_else(|p| p);
        self.adj[v].insert(pos, u);
        self.edges += 1;
        Ok(())
    }

    pub fn node_id(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    pub fn label(&self, node: usize) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj
            .get(u)
            .is_some_and(|nbrs| nbrs.binary_search(&v).is_ok())
    }
}

impl GraphRef for UndirectedGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}

/// Edge list of the graph the `commute` binary reports on.
pub const REFERENCE_EDGES: [(&str, &str); 10] = [
    ("U", "A"),
    ("U", "E"),
    ("A", "B"),
    ("A", "F"),
    ("B", "D"),
    ("D", "K"),
    ("D", "V"),
    ("E", "F"),
    ("E", "V"),
    ("F", "V"),
];

/// The fixed 8-node, 10-edge example graph (`U` and `V` are the designated pair).
pub fn reference_graph() -> UndirectedGraph {
    let mut g = UndirectedGraph::new();
    for (a, b) in REFERENCE_EDGES {
        // The literal list has no loops or repeats.
        let _ = g.add_edge(a, b);
    }
    g
}

/// Mark every node reachable from `start` (including `start`).
///
/// Plain BFS over a `Vec` used as a queue with a moving head.
pub fn reachable_from<G: GraphRef>(graph: &G, start: usize) -> Result<Vec<bool>> {
    let n = graph.node_count();
    if start >= n {
        return Err(Error::IndexOutOfBounds(start));
    }
    let mut seen = vec![false; n];
    let mut q: Vec<usize> = Vec::with_capacity(n);
    seen[start] = true;
    q.push(start);
    let mut head = 0usize;
    while head < q.len() {
        let cur = q[head];
        head += 1;
        for &nx in graph.neighbors_ref(cur) {
            if nx < n && !seen[nx] {
                seen[nx] = true;
                q.push(nx);
            }
        }
    }
    Ok(seen)
}

/// `true` for the empty graph and for graphs with a single component.
pub fn is_connected<G: GraphRef>(graph: &G) -> bool {
    if graph.node_count() == 0 {
        return true;
    }
    reachable_from(graph, 0).is_ok_and(|seen| seen.iter().all(|&s| s))
}
