//! `commute`: random-walk commute times vs. effective resistance.
//!
//! Two estimates of the commute time between nodes `u` and `v` of a connected,
//! undirected graph:
//! - **Monte Carlo**: average many simple random walks `u -> v` and `v -> u`
//!   ([`sample_commute`]).
//! - **Electrical**: `2 · |E| · R(u, v)`, where `R` is the effective resistance
//!   with a unit resistor on every edge ([`commute_time`]).
//!
//! Public invariants:
//! - **Node order**: node ids are `0..n` in first-seen label order.
//! - **Determinism**: samplers are deterministic given the same graph and config seed.
//! - **No silent non-termination**: unreachable targets and dead ends are errors,
//!   not infinite loops.

pub mod graph;
pub mod hitting;
pub mod report;
pub mod resistance;
pub mod stats;

pub use graph::{is_connected, reachable_from, reference_graph, GraphRef, UndirectedGraph, REFERENCE_EDGES};
pub use hitting::{
    hitting_path, hitting_time, sample_commute, sample_hitting_times, sample_hitting_times_streaming,
    CommuteSamples, SamplerConfig,
};
pub use report::{render_histogram, Report};
pub use resistance::{commute_time, effective_resistance, expected_hitting_time, grounded_index, laplacian};
pub use stats::{mean, Histogram, HistogramConfig};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
    #[error("random walk stuck at node {0} with no neighbors")]
    DeadEnd(usize),
    #[error("node {target} is not reachable from node {start}")]
    Unreachable { start: usize, target: usize },
    #[error("random walk exceeded {0} steps")]
    StepLimit(usize),
    #[error("graph is disconnected")]
    Disconnected,
    #[error("grounded Laplacian is not positive definite")]
    Singular,
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
