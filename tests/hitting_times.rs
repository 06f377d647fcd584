use commute::{
    commute_time, effective_resistance, expected_hitting_time, hitting_path, reference_graph,
    sample_commute, sample_hitting_times, GraphRef, SamplerConfig, UndirectedGraph,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Connected graph on `n` labelled nodes: a spanning path plus the extra pairs given.
fn connected_graph(n: usize, extra: &[(usize, usize)]) -> UndirectedGraph {
    let mut g = UndirectedGraph::new();
    for i in 0..n {
        g.add_node(&i.to_string());
    }
    for i in 1..n {
        g.add_edge(&(i - 1).to_string(), &i.to_string()).unwrap();
    }
    for &(a, b) in extra {
        let (a, b) = (a % n, b % n);
        if a != b && !g.has_edge(a, b) {
            g.add_edge(&a.to_string(), &b.to_string()).unwrap();
        }
    }
    g
}

fn assert_path_follows_edges(g: &UndirectedGraph, path: &[usize]) {
    for win in path.windows(2) {
        let (u, v) = (win[0], win[1]);
        assert!(g.has_edge(u, v), "walk step {u} -> {v} is not an edge");
    }
}

#[test]
fn reproducible_given_seed() {
    let g = reference_graph();
    let cfg = SamplerConfig { trials: 500, max_steps: None, seed: 123 };
    let a = sample_commute(&g, 0, 7, cfg).unwrap();
    let b = sample_commute(&g, 0, 7, cfg).unwrap();
    assert_eq!(a, b, "same seed should yield identical samples");

    let c = sample_commute(&g, 0, 7, SamplerConfig { seed: 124, ..cfg }).unwrap();
    assert_ne!(a, c);
}

#[test]
fn one_direction_sampler_is_seeded_too() {
    let g = reference_graph();
    let cfg = SamplerConfig { trials: 300, max_steps: None, seed: 5 };
    let a = sample_hitting_times(&g, 0, 7, cfg).unwrap();
    assert_eq!(a.len(), 300);
    assert_eq!(a, sample_hitting_times(&g, 0, 7, cfg).unwrap());
    assert!(a.iter().all(|&h| h >= 1));
}

#[test]
fn reference_graph_end_to_end() {
    let g = reference_graph();
    let u = g.node_id("U").unwrap();
    let v = g.node_id("V").unwrap();

    let r = effective_resistance(&g, u, v).unwrap();
    assert!((r - 47.0 / 46.0).abs() < 1e-12);
    let theoretical = commute_time(&g, u, v).unwrap();
    assert!((theoretical - 470.0 / 23.0).abs() < 1e-10);

    let samples = sample_commute(&g, u, v, SamplerConfig::default()).unwrap();
    assert_eq!(samples.forward.len(), 10_000);
    let simulated = samples.commute_time();
    let rel = (simulated - theoretical).abs() / theoretical;
    assert!(rel < 0.10, "simulated {simulated} vs theoretical {theoretical}");

    // One-way means track the exact first-step solutions as well.
    let huv = expected_hitting_time(&g, u, v).unwrap();
    let hvu = expected_hitting_time(&g, v, u).unwrap();
    assert!((samples.mean_forward() - huv).abs() / huv < 0.10);
    assert!((samples.mean_backward() - hvu).abs() / hvu < 0.10);
}

#[test]
fn monte_carlo_error_shrinks_with_more_trials() {
    // Averaged over several seeds so a single lucky small run cannot flip the ordering.
    let g = reference_graph();
    let theoretical = commute_time(&g, 0, 7).unwrap();
    let avg_err = |trials: usize| {
        let seeds = 0..8u64;
        let n = seeds.clone().count() as f64;
        seeds
            .map(|seed| {
                let s = sample_commute(&g, 0, 7, SamplerConfig { trials, max_steps: None, seed }).unwrap();
                (s.commute_time() - theoretical).abs() / theoretical
            })
            .sum::<f64>()
            / n
    };
    let small = avg_err(100);
    let large = avg_err(10_000);
    assert!(large < small, "error at 10k ({large}) should be below error at 100 ({small})");
    assert!(large < 0.05);
}

#[test]
fn single_edge_commute_is_two() {
    let g = UndirectedGraph::from_edges(&[("u", "v")]).unwrap();
    let s = sample_commute(&g, 0, 1, SamplerConfig { trials: 50, ..SamplerConfig::default() }).unwrap();
    assert_eq!(s.commute_time(), 2.0);
    assert_eq!(commute_time(&g, 0, 1).unwrap(), 2.0);
}

proptest! {
    // Property: walks between distinct nodes of a connected graph take at least one
    // step, every step follows an edge, and the walk ends exactly at the target.
    #[test]
    fn prop_walks_follow_edges_and_end_at_target(
        n in 2usize..9,
        extra in prop::collection::vec((0usize..9, 0usize..9), 0..12),
        seed in any::<u64>(),
    ) {
        let g = connected_graph(n, &extra);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = 0;
        let target = n - 1;
        let path = hitting_path(&g, start, target, None, &mut rng).unwrap();
        prop_assert!(path.len() >= 2);
        prop_assert_eq!(path[0], start);
        prop_assert_eq!(*path.last().unwrap(), target);
        prop_assert!(path[..path.len() - 1].iter().all(|&x| x != target));
        assert_path_follows_edges(&g, &path);
    }

    // Property: effective resistance is symmetric and the commute identity holds.
    #[test]
    fn prop_resistance_symmetric_and_commute_identity(
        n in 2usize..9,
        extra in prop::collection::vec((0usize..9, 0usize..9), 0..12),
        a in 0usize..9,
        b in 0usize..9,
    ) {
        let g = connected_graph(n, &extra);
        let (u, v) = (a % n, b % n);
        let ruv = effective_resistance(&g, u, v).unwrap();
        let rvu = effective_resistance(&g, v, u).unwrap();
        prop_assert!((ruv - rvu).abs() < 1e-9);
        // Rayleigh: adding edges never raises resistance above the path distance.
        prop_assert!(ruv <= (u as f64 - v as f64).abs() + 1e-9);

        let c = commute_time(&g, u, v).unwrap();
        let h = expected_hitting_time(&g, u, v).unwrap() + expected_hitting_time(&g, v, u).unwrap();
        prop_assert!((c - h).abs() < 1e-6 * c.max(1.0));
        prop_assert!((c - 2.0 * g.edge_count() as f64 * ruv).abs() < 1e-9 * c.max(1.0));
    }
}
