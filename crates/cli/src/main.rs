use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orgdoc_chart::{flatten, load_doc_tree, ChartSession};
use orgdoc_tree::{resolve_selection, DocNode, NodeDetail};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgdoc")]
#[command(about = "Inspect API-documentation trees as org-chart rows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a documentation tree into chart edge rows
    Edges {
        /// Path to the docs.json document
        file: PathBuf,

        /// Scope to one dotted namespace before flattening
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Resolve a fully-qualified identifier and print its detail record
    Show {
        /// Path to the docs.json document
        file: PathBuf,

        /// Root-relative dotted identifier (a chart node id)
        id: String,
    },

    /// Parse and flatten the whole document, printing a summary
    Check {
        /// Path to the docs.json document
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct CheckSummary {
    nodes: usize,
    edges: usize,
    modules: usize,
    roles: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Edges { file, namespace } => {
            let tree = load(&file).await?;
            let mut session = ChartSession::new(tree);
            let edges = match namespace {
                Some(ns) => session
                    .set_namespace(&ns)
                    .with_context(|| format!("cannot scope to namespace '{}'", ns))?,
                None => session.edges()?,
            };
            print_json(&edges, cli.pretty)
        }
        Commands::Show { file, id } => {
            let tree = load(&file).await?;
            let node = resolve_selection(&tree, &id)
                .with_context(|| format!("cannot resolve '{}'", id))?;
            print_json(&NodeDetail::from_node(node), cli.pretty)
        }
        Commands::Check { file } => {
            let tree = load(&file).await?;
            let edges = flatten(&tree).context("document does not flatten")?;
            let roles = count_roles(&tree);
            let summary = CheckSummary {
                nodes: tree.descendant_count(),
                edges: edges.len(),
                modules: tree.descendant_count() - roles,
                roles,
            };
            print_json(&summary, cli.pretty)
        }
    }
}

async fn load(file: &PathBuf) -> Result<DocNode> {
    load_doc_tree(file)
        .await
        .with_context(|| format!("cannot load doc tree from {}", file.display()))
}

fn count_roles(node: &DocNode) -> usize {
    match node.children() {
        Some(children) => children
            .values()
            .map(|c| if c.is_role() { 1 } else { count_roles(c) })
            .sum(),
        None => 0,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
