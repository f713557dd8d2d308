//! # frontier-route
//!
//! Loads edge-list graphs and prints shortest routes between named nodes.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use frontier_sssp::edge_list::{load_edge_list, LoadOptions, STDIN_NAME, STDIN_TOKEN};
use frontier_sssp::report::{GraphDump, GraphSnapshot, RouteReport};
use frontier_sssp::{reconstruct_route, DirectedGraph, FrontierSearch};

/// Command-line interface for frontier-route
#[derive(Parser, Debug)]
#[command(name = "frontier-route")]
#[command(about = "Shortest routes over weighted edge-list graphs")]
#[command(long_about = "Each input file holds one graph, one link per line:
  from to [weight]           # fields split by commas, spaces or tabs
  # comment                  # ignored, as are blank lines

Examples:
  frontier-route -s A -d B roads.txt    # route from A to B
  frontier-route -s A roads.txt         # routes from A to every node
  frontier-route --print-graph -        # dump a graph read from stdin")]
#[command(version)]
struct Cli {
    /// Edge-list files, one graph per file; "-" reads standard input
    files: Vec<String>,

    /// Origin node of the search
    #[arg(short, long)]
    source: Option<String>,

    /// Destination node; without it every node's route is printed
    #[arg(short, long, requires = "source")]
    destination: Option<String>,

    /// Trace the search (-v passes and selections, -vv every link)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the graph after loading it
    #[arg(long)]
    print_graph: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Reject records with unparsable weights instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("frontier-route: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.files.is_empty() {
        return process(io::stdin().lock(), STDIN_NAME, cli);
    }

    for path in &cli.files {
        if path == STDIN_TOKEN {
            process(io::stdin().lock(), STDIN_NAME, cli)?;
        } else {
            let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
            process(BufReader::new(file), path, cli)?;
        }
    }
    Ok(())
}

fn process<R: BufRead>(reader: R, name: &str, cli: &Cli) -> Result<()> {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new(name);
    let options = LoadOptions { strict: cli.strict };
    let stats = load_edge_list(&mut graph, reader, name, options)
        .with_context(|| format!("cannot load {}", name))?;
    info!(
        "{}: {} nodes, {} links ({} records skipped)",
        name,
        graph.node_count(),
        graph.edge_count(),
        stats.skipped
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let source = match &cli.source {
        Some(source) => source,
        None => return print_graph(&mut out, &graph, cli.json),
    };
    if cli.print_graph {
        print_graph(&mut out, &graph, cli.json)?;
    }

    let origin = graph.require(source)?;
    let destination = cli
        .destination
        .as_deref()
        .map(|name| graph.require(name))
        .transpose()?;

    let passes = FrontierSearch::new().run(&mut graph, origin, destination)?;

    let targets = match destination {
        Some(dest) => vec![dest],
        None => graph.nodes().map(|(id, _)| id).collect(),
    };
    let routes = targets
        .into_iter()
        .map(|id| reconstruct_route(&graph, id))
        .collect::<frontier_sssp::Result<Vec<_>>>()?;

    if cli.json {
        let report = RouteReport {
            graph: graph.name().to_owned(),
            source: source.clone(),
            passes,
            routes,
        };
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "Graph {}: {} passes from {}", graph.name(), passes, source)?;
        for route in &routes {
            writeln!(out, "  {}", route)?;
        }
    }
    Ok(())
}

fn print_graph<W: Write>(out: &mut W, graph: &DirectedGraph<i64>, json: bool) -> Result<()> {
    if json {
        let snapshot = GraphSnapshot::capture(graph);
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        write!(out, "{}", GraphDump(graph))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_requires_source() {
        let err = Cli::try_parse_from(["frontier-route", "-d", "B", "roads.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["frontier-route", "-s", "A", "-d", "B", "-vv", "roads.txt"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some("A"));
        assert_eq!(cli.destination.as_deref(), Some("B"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.files, vec!["roads.txt".to_owned()]);
    }
}
