#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use csv::Writer;
use mincostflow::{
    ArcSpec, MinCostFlow, RawArc, ResidualGraph, SuccessiveShortestPaths, TopologyBuilder,
};
use serde::Serialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Send the maximum flow between two nodes of a network at minimum cost.
#[derive(Debug, Parser)]
#[command(name = "mincostflow-cli", version)]
struct Cli {
    /// CSV file with `source,target,capacity,cost` rows
    input: PathBuf,

    /// Label of the source node
    #[arg(long, default_value = "s")]
    source: String,

    /// Label of the sink node
    #[arg(long, default_value = "t")]
    sink: String,

    /// Pair every arc with a zero-capacity reverse arc so flow can be cancelled
    #[arg(long)]
    cancellable: bool,

    /// Write the final arc state to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct ArcRow<'a> {
    source: &'a str,
    target: &'a str,
    cost: i64,
    capacity: i64,
    flow: i64,
}

// Function to read the arcs from CSV file
fn read_arcs_csv(filepath: &Path) -> Result<Vec<ArcSpec<i64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let mut arcs = Vec::new();
    for row in rdr.deserialize::<RawArc<i64>>() {
        arcs.push(ArcSpec::try_from(row?).map_err(|e| e.to_string())?);
    }
    Ok(arcs)
}

// Function to write the final residual state
fn write_csv(graph: &ResidualGraph<i64>, filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for arc in graph.arcs() {
        wtr.serialize(ArcRow {
            source: arc.source_label,
            target: arc.target_label,
            cost: arc.weight.cost,
            capacity: arc.weight.capacity,
            flow: arc.weight.flow,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    TermLogger::init(
        level(cli.verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let arcs = read_arcs_csv(&cli.input)?;
    let mut graph = TopologyBuilder::new()
        .cancellable(cli.cancellable)
        .arcs(arcs)
        .build()
        .map_err(|e| e.to_string())?;
    let source = graph.require(&cli.source).map_err(|e| e.to_string())?;
    let sink = graph.require(&cli.sink).map_err(|e| e.to_string())?;

    let summary = SuccessiveShortestPaths::new()
        .min_cost_flow(&mut graph, source, sink)
        .map_err(|e| e.to_string())?;

    println!("*** Augmenting paths ***");
    for augmentation in &summary.augmentations {
        println!(
            "{} | flow: {} | unit cost: {}",
            augmentation.path.labels(&graph).join(" -> "),
            augmentation.flow,
            augmentation.unit_cost
        );
    }
    println!("----------------------------------");
    println!("Max flow: {}", summary.flow);
    println!("Min cost: {}", summary.cost);

    println!("*** Saturated arcs ***");
    for arc in graph.saturated_arcs() {
        println!("{arc}");
    }

    println!("*** Minimum cut ***");
    let (_, cut) = graph.min_cut(source);
    for arc in &cut {
        println!("{arc}");
    }

    if let Some(output) = &cli.output {
        write_csv(&graph, output)?;
    }

    Ok(())
}
