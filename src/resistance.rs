//! Effective resistance and exact hitting times from the graph Laplacian.
//!
//! Every edge is a unit resistor. Grounding a node `v` (deleting its row and
//! column from the Laplacian) leaves a symmetric positive-definite system for a
//! connected graph, which we factor with Cholesky.
//!
//! Identities used:
//! - `R(u, v) = x[u]` where `L_v · x = e_u` (unit current in at `u`, out at `v`)
//! - `C(u, v) = 2 · |E| · R(u, v)` (commute time)
//! - `h(·, v)` solves `L_v · h = d_v` (first-step equations, `d` = degrees)

use crate::graph::{is_connected, GraphRef};
use crate::{Error, Result};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Dense Laplacian `D - A`.
pub fn laplacian<G: GraphRef>(graph: &G) -> DMatrix<f64> {
    let n = graph.node_count();
    let mut l = DMatrix::<f64>::zeros(n, n);
    for u in 0..n {
        let nbrs = graph.neighbors_ref(u);
        l[(u, u)] = nbrs.len() as f64;
        for &v in nbrs {
            l[(u, v)] = -1.0;
        }
    }
    l
}

/// Index of `node` once row/column `ground` has been removed.
///
/// `node` must differ from `ground`.
pub fn grounded_index(node: usize, ground: usize) -> usize {
    if node > ground {
        node - 1
    } else {
        node
    }
}

/// Effective resistance between `u` and `v` with unit resistors on every edge.
pub fn effective_resistance<G: GraphRef>(graph: &G, u: usize, v: usize) -> Result<f64> {
    check_pair(graph, u, v)?;
    if u == v {
        return Ok(0.0);
    }
    let n = graph.node_count();
    let mut b = DVector::<f64>::zeros(n - 1);
    let iu = grounded_index(u, v);
    b[iu] = 1.0;
    let x = solve_grounded(graph, v, b)?;
    debug!(u, v, resistance = x[iu], "solved grounded Laplacian");
    Ok(x[iu])
}

/// Expected commute time `2 · |E| · R(u, v)`.
pub fn commute_time<G: GraphRef>(graph: &G, u: usize, v: usize) -> Result<f64> {
    let r = effective_resistance(graph, u, v)?;
    Ok(2.0 * graph.edge_count() as f64 * r)
}

/// Exact expected hitting time from `start` to `target`.
pub fn expected_hitting_time<G: GraphRef>(graph: &G, start: usize, target: usize) -> Result<f64> {
    check_pair(graph, start, target)?;
    if start == target {
        return Ok(0.0);
    }
    let degrees: Vec<f64> = (0..graph.node_count())
        .filter(|&x| x != target)
        .map(|x| graph.degree(x) as f64)
        .collect();
    let h = solve_grounded(graph, target, DVector::from_vec(degrees))?;
    Ok(h[grounded_index(start, target)])
}

/// Solve `L_ground · x = rhs` where `L_ground` is the Laplacian without row/column `ground`.
fn solve_grounded<G: GraphRef>(graph: &G, ground: usize, rhs: DVector<f64>) -> Result<DVector<f64>> {
    if !is_connected(graph) {
        return Err(Error::Disconnected);
    }
    let reduced = laplacian(graph).remove_row(ground).remove_column(ground);
    let chol = reduced.cholesky().ok_or(Error::Singular)?;
    Ok(chol.solve(&rhs))
}

fn check_pair<G: GraphRef>(graph: &G, u: usize, v: usize) -> Result<()> {
    let n = graph.node_count();
    for node in [u, v] {
        if node >= n {
            return Err(Error::IndexOutOfBounds(node));
        }
    }
    Ok(())
}
