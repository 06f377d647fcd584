//! Compare simulated and theoretical commute times on the reference graph.
//!
//! Set `RUST_LOG=debug` to see per-stage diagnostics on stderr.

use anyhow::{Context, Result};
use commute::{
    commute_time, effective_resistance, expected_hitting_time, reference_graph, render_histogram,
    sample_commute, GraphRef, Histogram, HistogramConfig, Report, SamplerConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SOURCE: &str = "U";
const TARGET: &str = "V";
const BAR_WIDTH: usize = 60;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let graph = reference_graph();
    let u = graph.node_id(SOURCE)?;
    let v = graph.node_id(TARGET)?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "built reference graph");

    let config = SamplerConfig::default();
    let samples = sample_commute(&graph, u, v, config).context("simulating random walks")?;

    let resistance = effective_resistance(&graph, u, v).context("solving for effective resistance")?;
    let theoretical = commute_time(&graph, u, v)?;
    info!(
        exact_uv = expected_hitting_time(&graph, u, v)?,
        exact_vu = expected_hitting_time(&graph, v, u)?,
        "exact one-way hitting times"
    );

    let report = Report {
        u: SOURCE.to_string(),
        v: TARGET.to_string(),
        mean_uv: samples.mean_forward(),
        mean_vu: samples.mean_backward(),
        simulated_commute: samples.commute_time(),
        resistance,
        theoretical_commute: theoretical,
    };
    println!("{report}");
    info!(relative_error = report.relative_error(), "simulated vs. theoretical");

    let bins = HistogramConfig::default();
    let forward = Histogram::new(&samples.forward, bins)?;
    let backward = Histogram::new(&samples.backward, bins)?;
    let fwd_label = format!("{SOURCE} → {TARGET}");
    let bwd_label = format!("{TARGET} → {SOURCE}");
    let plot = render_histogram(
        "Distribution of Random Walk Hitting Times",
        &[(fwd_label.as_str(), &forward), (bwd_label.as_str(), &backward)],
        BAR_WIDTH,
    )?;
    println!();
    print!("{plot}");
    Ok(())
}
