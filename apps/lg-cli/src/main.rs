use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod error;
mod loader;

use error::{AppError, AppResult};
use lg_geom::Crs;
use lg_graph::{Graph, graph_from_lines};

#[derive(Parser)]
#[command(name = "lg-cli")]
#[command(about = "linegraph CLI - convert line features into a routable graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GeoJSON file into a graph and export it as JSON
    Convert {
        /// Path to the input GeoJSON file
        input: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Coordinate reference of the input: wgs84, planar, or epsg:<code>
        #[arg(long, default_value = "wgs84")]
        crs: String,
    },
    /// Convert a GeoJSON file and print summary statistics
    Info {
        /// Path to the input GeoJSON file
        input: PathBuf,
        /// Coordinate reference of the input: wgs84, planar, or epsg:<code>
        #[arg(long, default_value = "wgs84")]
        crs: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output, crs } => {
            cmd_convert(&input, output.as_deref(), &crs)
        }
        Commands::Info { input, crs } => cmd_info(&input, &crs),
    }
}

fn convert(input: &Path, crs: &str) -> AppResult<Graph> {
    let crs: Crs = crs.parse().map_err(AppError::from)?;
    let collection = loader::load_lines(input, crs)?;
    let graph = graph_from_lines(&collection)?;
    Ok(graph)
}

fn cmd_convert(input: &Path, output: Option<&Path>, crs: &str) -> AppResult<()> {
    let graph = convert(input, crs)?;

    let doc = serde_json::json!({
        "crs": graph.crs(),
        "nodes": graph.nodes(),
        "edges": graph.edges(),
    });
    let content =
        serde_json::to_string_pretty(&doc).map_err(|e| AppError::Export(e.to_string()))?;

    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!(
                "✓ Wrote graph ({} nodes, {} edges) to {}",
                graph.nodes().len(),
                graph.edges().len(),
                path.display()
            );
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn cmd_info(input: &Path, crs: &str) -> AppResult<()> {
    let graph = convert(input, crs)?;

    println!("Graph summary for {}:", input.display());
    println!("  CRS:          {}", graph.crs());
    println!("  Nodes:        {}", graph.nodes().len());
    println!("  Edges:        {}", graph.edges().len());
    println!("  Total length: {:.3}", graph.total_length());
    Ok(())
}
