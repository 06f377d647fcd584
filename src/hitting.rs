//! Monte Carlo hitting times.
//!
//! A simple random walk moves to a uniformly chosen neighbor at every step.
//! The hitting time `H(s, t)` is the number of steps until the walk started at
//! `s` first visits `t`; the commute time is `H(u, v) + H(v, u)`.

use crate::graph::{reachable_from, GraphRef};
use crate::{Error, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Independent walks per direction.
    pub trials: usize,
    /// Abort a single walk after this many steps. `None` means uncapped.
    pub max_steps: Option<usize>,
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { trials: 10_000, max_steps: None, seed: 42 }
    }
}

/// Steps taken by one walk from `start` until it first reaches `target`.
///
/// Returns `0` when `start == target`. The caller is responsible for
/// reachability; an uncapped walk towards an unreachable target never returns.
pub fn hitting_time<G: GraphRef, R: Rng + ?Sized>(
    graph: &G,
    start: usize,
    target: usize,
    max_steps: Option<usize>,
    rng: &mut R,
) -> Result<usize> {
    check_node(graph, start)?;
    check_node(graph, target)?;
    let mut curr = start;
    let mut steps = 0usize;
    while curr != target {
        if max_steps.is_some_and(|cap| steps >= cap) {
            return Err(Error::StepLimit(steps));
        }
        curr = *graph.neighbors_ref(curr).choose(rng).ok_or(Error::DeadEnd(curr))?;
        steps += 1;
    }
    Ok(steps)
}

/// Like [`hitting_time`], but records the visited nodes (`start` first, `target` last).
pub fn hitting_path<G: GraphRef, R: Rng + ?Sized>(
    graph: &G,
    start: usize,
    target: usize,
    max_steps: Option<usize>,
    rng: &mut R,
) -> Result<Vec<usize>> {
    check_node(graph, start)?;
    check_node(graph, target)?;
    let mut path = vec![start];
    let mut curr = start;
    while curr != target {
        if max_steps.is_some_and(|cap| path.len() > cap) {
            return Err(Error::StepLimit(path.len() - 1));
        }
        curr = *graph.neighbors_ref(curr).choose(rng).ok_or(Error::DeadEnd(curr))?;
        path.push(curr);
    }
    Ok(path)
}

/// `config.trials` hitting times `start -> target` from a generator seeded with `config.seed`.
pub fn sample_hitting_times<G: GraphRef>(
    graph: &G,
    start: usize,
    target: usize,
    config: SamplerConfig,
) -> Result<Vec<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut out = Vec::with_capacity(config.trials);
    sample_hitting_times_streaming(graph, start, target, config, &mut rng, |h| out.push(h))?;
    Ok(out)
}

/// Streaming variant: runs `config.trials` walks with the caller's generator
/// and hands each hitting time to `f`. Does not allocate per trial.
///
/// `config.seed` is ignored here; the caller owns the generator.
pub fn sample_hitting_times_streaming<G, R, F>(
    graph: &G,
    start: usize,
    target: usize,
    config: SamplerConfig,
    rng: &mut R,
    mut f: F,
) -> Result<()>
where
    G: GraphRef,
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    ensure_reachable(graph, start, target)?;
    for _ in 0..config.trials {
        f(hitting_time(graph, start, target, config.max_steps, rng)?);
    }
    Ok(())
}

/// Hitting-time samples in both directions between two nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommuteSamples {
    /// `u -> v`
    pub forward: Vec<usize>,
    /// `v -> u`
    pub backward: Vec<usize>,
}

impl CommuteSamples {
    pub fn mean_forward(&self) -> f64 {
        crate::stats::mean(&self.forward)
    }

    pub fn mean_backward(&self) -> f64 {
        crate::stats::mean(&self.backward)
    }

    /// Empirical commute time: the sum of the two one-way means.
    pub fn commute_time(&self) -> f64 {
        self.mean_forward() + self.mean_backward()
    }
}

/// For each trial, one walk `u -> v` followed by one walk `v -> u`, all drawn
/// from a single generator seeded with `config.seed`.
pub fn sample_commute<G: GraphRef>(
    graph: &G,
    u: usize,
    v: usize,
    config: SamplerConfig,
) -> Result<CommuteSamples> {
    ensure_reachable(graph, u, v)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut samples = CommuteSamples {
        forward: Vec::with_capacity(config.trials),
        backward: Vec::with_capacity(config.trials),
    };
    for _ in 0..config.trials {
        samples.forward.push(hitting_time(graph, u, v, config.max_steps, &mut rng)?);
        samples.backward.push(hitting_time(graph, v, u, config.max_steps, &mut rng)?);
    }
    debug!(
        trials = config.trials,
        mean_forward = samples.mean_forward(),
        mean_backward = samples.mean_backward(),
        "sampled commute walks"
    );
    Ok(samples)
}

fn check_node<G: GraphRef>(graph: &G, node: usize) -> Result<()> {
    if node >= graph.node_count() {
        return Err(Error::IndexOutOfBounds(node));
    }
    Ok(())
}

// In an undirected graph reachability is symmetric, so one BFS covers both directions.
fn ensure_reachable<G: GraphRef>(graph: &G, start: usize, target: usize) -> Result<()> {
    check_node(graph, target)?;
    let seen = reachable_from(graph, start)?;
    if !seen[target] {
        return Err(Error::Unreachable { start, target });
    }
    Ok(())
}
