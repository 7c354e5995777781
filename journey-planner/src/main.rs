use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use journey_planner::parse::parse_routes;
use journey_planner::plan::plan_journeys;
use journey_planner::render;

/// Decompose a route network into the minimum set of journeys that
/// together traverse every route exactly once.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the routes file (one route per line, e.g.
    /// "Kings Cross <> York (R001) 110 min, 4 stops")
    routes_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let input = fs::read_to_string(&args.routes_file)
        .with_context(|| format!("reading {}", args.routes_file.display()))?;
    let routes = parse_routes(&input)?;
    let plan = plan_journeys(routes)?;

    let rendered = match args.format {
        Format::Text => render::render_text(&plan),
        Format::Json => render::to_json(&plan)?,
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
