//! Routegraph CLI: command-line interface for route planning queries
//!
//! Builds the graph from compact edge-list notation and answers one query per invocation.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use routegraph::algo::{parse_route, route_distance};
use routegraph::{load_graph, run_battery, PlannerConfig, RouteGraph, CANONICAL_GRAPH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routegraph", version, about = "Routegraph route planning CLI")]
struct Cli {
    /// Graph as an edge list, e.g. "AB5, BC4, CD8"
    #[arg(long, default_value = CANONICAL_GRAPH, global = true, env = "ROUTEGRAPH_GRAPH")]
    graph: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance along a route such as A-B-C
    Distance {
        /// Stops separated by '-'
        route: String,
    },
    /// Count trips between two vertices by number of stops
    Trips {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Count trips with at most this many stops
        #[arg(long, conflicts_with = "exact_stops", required_unless_present = "exact_stops")]
        max_stops: Option<usize>,
        /// Count trips with exactly this many stops
        #[arg(long)]
        exact_stops: Option<usize>,
    },
    /// Length of the shortest route between two vertices
    Shortest {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Count trips with a total distance below a bound
    Routes {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Exclusive distance bound
        #[arg(long)]
        below: f64,
    },
    /// Run a query battery (the classic ten queries by default)
    Battery {
        /// YAML planner config; its graph overrides --graph
        #[arg(long)]
        config: Option<String>,
    },
    /// Show graph statistics and edges
    Info,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let graph = || load_graph(&cli.graph);

    match &cli.command {
        Commands::Distance { route } => {
            let graph = graph()?;
            let distance = route_distance(&graph, &parse_route(route));
            print_value(&cli.format, "distance", &distance.to_string(), serde_json::json!({
                "route": route,
                "distance": distance.as_distance(),
            }))
        }
        Commands::Trips {
            from,
            to,
            max_stops,
            exact_stops,
        } => {
            let graph = graph()?;
            let (policy, stops, count) = match (max_stops, exact_stops) {
                (_, Some(exact)) => (
                    "exact_stops",
                    *exact,
                    routegraph::count_with_exact_edges(&graph, from, to, *exact),
                ),
                (Some(max), None) => (
                    "max_stops",
                    *max,
                    routegraph::count_with_max_edges(&graph, from, to, *max),
                ),
                (None, None) => anyhow::bail!("either --max-stops or --exact-stops is required"),
            };
            print_value(&cli.format, "trips", &count.to_string(), serde_json::json!({
                "from": from,
                "to": to,
                "policy": policy,
                "stops": stops,
                "trips": count,
            }))
        }
        Commands::Shortest { from, to } => {
            let graph = graph()?;
            let path = routegraph::shortest_path(&graph, from, to)?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&path)?),
                OutputFormat::Table => {
                    let stops: Vec<&str> = path.stops.iter().map(|s| s.as_str()).collect();
                    let mut table = Table::new();
                    table.set_content_arrangement(ContentArrangement::Dynamic);
                    table.set_header(vec!["route", "distance"]);
                    table.add_row(vec![stops.join("-"), routegraph::algo::format_weight(path.cost)]);
                    println!("{}", table);
                }
            }
            Ok(())
        }
        Commands::Routes { from, to, below } => {
            let graph = graph()?;
            let count = routegraph::count_under_weight(&graph, from, to, *below)?;
            print_value(&cli.format, "trips", &count.to_string(), serde_json::json!({
                "from": from,
                "to": to,
                "below": below,
                "trips": count,
            }))
        }
        Commands::Battery { config } => run_battery_command(cli, config.as_deref()),
        Commands::Info => run_info(&graph()?, &cli.format),
    }
}

fn run_battery_command(cli: &Cli, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => PlannerConfig::from_yaml_file(path)?,
        None => PlannerConfig {
            graph: cli.graph.clone(),
            ..PlannerConfig::default()
        },
    };
    let graph = config.load_graph()?;
    let planner = config.planner(&graph);
    let outcomes = run_battery(&planner, &config.queries, config.parallel);

    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = config
                .queries
                .iter()
                .zip(&outcomes)
                .map(|(query, outcome)| serde_json::json!({ "query": query, "outcome": outcome }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "query", "result"]);
            for (i, (query, outcome)) in config.queries.iter().zip(&outcomes).enumerate() {
                table.add_row(vec![(i + 1).to_string(), query.to_string(), outcome.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_info(graph: &RouteGraph, format: &OutputFormat) -> anyhow::Result<()> {
    let stats = graph.statistics();
    let edges: Vec<_> = graph.edges().collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "statistics": stats,
                    "edges": edges,
                }))?
            );
        }
        OutputFormat::Table => {
            println!("Vertices: {}", stats.vertex_count);
            println!("Edges:    {}", stats.edge_count);

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["from", "to", "weight"]);
            for edge in &edges {
                table.add_row(vec![
                    edge.source.to_string(),
                    edge.target.to_string(),
                    routegraph::algo::format_weight(edge.weight),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_value(
    format: &OutputFormat,
    name: &str,
    text: &str,
    json: serde_json::Value,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json)?),
        OutputFormat::Table => println!("{}: {}", name, text),
    }
    Ok(())
}
