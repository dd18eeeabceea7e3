use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use wardrop::equilibrium::report::{plot_history, to_json, write_report};
use wardrop::equilibrium::utils::draw_with_flow;
use wardrop::equilibrium::{find_equilibrium, NetworkConfig, Result};

/// All-or-nothing traffic equilibrium on a small link network
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// network config (JSON); the five-link reference network when omitted
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// override max_iterations of the config
    #[clap(long)]
    max_iterations: Option<usize>,
    /// override tolerance of the config
    #[clap(long)]
    tolerance: Option<f64>,
    /// print the result as JSON instead of text
    #[clap(long)]
    json: bool,
    /// also print the network with the final flow as Graphviz DOT
    #[clap(long)]
    dot: bool,
    /// draw the travel time history and final flows as a PNG chart
    #[clap(long)]
    plot: Option<PathBuf>,
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => NetworkConfig::from_json_file(path)?,
        None => NetworkConfig::reference(),
    };
    if let Some(n) = args.max_iterations {
        config.max_iterations = n;
    }
    if let Some(t) = args.tolerance {
        config.tolerance = t;
    }
    info!(
        "{} links, max_iterations={} tolerance={} demand={}",
        config.links.len(),
        config.max_iterations,
        config.tolerance,
        config.demand
    );

    let model = config.cost_model()?;
    let eq = find_equilibrium(&model, config.solver_config()?)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", to_json(&eq)?)?;
    } else {
        write_report(&mut out, &model, &eq)?;
    }
    if args.dot {
        writeln!(out, "{}", draw_with_flow(&model, &eq.flow))?;
    }
    if let Some(path) = &args.plot {
        plot_history(path, &eq)?;
        info!("chart written to {}", path.display());
    }
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
