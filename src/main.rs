use anyhow::Context;
use routegraph::{format_report, PlannerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PlannerConfig::from_yaml_file(&path)
            .with_context(|| format!("loading planner config from {}", path))?,
        None => PlannerConfig::default(),
    };

    let graph = config.load_graph().context("building route graph")?;
    println!("Routegraph v{}", routegraph::version());
    for edge in graph.edges() {
        println!("  {}", edge);
    }
    println!();

    let planner = config.planner(&graph);
    let outcomes = routegraph::run_battery(&planner, &config.queries, config.parallel);
    print!("{}", format_report(&outcomes));

    Ok(())
}
