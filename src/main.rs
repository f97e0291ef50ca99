use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mediatree_rs::auth;
use mediatree_rs::browser::MediaBrowser;
use mediatree_rs::config::{BrowserConfig, DEFAULT_CONFIG_FILE};
use mediatree_rs::logging;
use mediatree_rs::model::Node;
use mediatree_rs::source::SpotifyDataSource;

/// Browse your Spotify library through the media tree
#[derive(Parser, Debug)]
#[command(name = "mediatree-rs", version, about)]
struct Args {
    /// Browser config file
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print nodes as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the root node
    Root,
    /// List the children of a node
    Children { id: String },
    /// Resolve a single node
    Item { id: String },
    /// Walk the tree from the root
    Tree {
        #[arg(long, short = 'd', default_value_t = 2)]
        depth: usize,
    },
    /// Print the default config file
    GenerateConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== mediatree-rs starting ===");

    if let Command::GenerateConfig = args.command {
        print!("{}", BrowserConfig::default().to_toml()?);
        return Ok(());
    }

    let config = BrowserConfig::load(&args.config)?;
    let starred_limit = config.starred_limit;
    let browser = MediaBrowser::new(config);

    let spotify = auth::authenticate().await?;
    browser.initialize(Arc::new(SpotifyDataSource::new(spotify, starred_limit)));

    let result = run(&browser, &args).await;
    if let Err(ref e) = result {
        tracing::error!(error = ?e, "Command failed");
    }

    tracing::info!("mediatree-rs shutting down");
    result
}

async fn run(browser: &MediaBrowser, args: &Args) -> Result<()> {
    match &args.command {
        Command::Root => print_nodes(&[browser.root_item()?], args.json),
        Command::Children { id } => print_nodes(&browser.get_children(id, None).await?, args.json),
        Command::Item { id } => print_nodes(&[browser.get_item(id).await?], args.json),
        Command::Tree { depth } => print_tree(browser, *depth).await,
        Command::GenerateConfig => Ok(()),
    }
}

fn print_nodes(nodes: &[Node], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(nodes)?);
        return Ok(());
    }
    for node in nodes {
        println!("{}", describe(node));
    }
    Ok(())
}

fn describe(node: &Node) -> String {
    let mut line = format!("{}\t{}", node.id, node.title);
    if let Some(artist) = &node.artist {
        line.push_str(&format!(" - {}", artist));
    }
    if let Some(uri) = &node.source_uri {
        line.push_str(&format!(" <{}>", uri));
    }
    line
}

/// Depth-first walk printing each browsable node's children
async fn print_tree(browser: &MediaBrowser, max_depth: usize) -> Result<()> {
    let root = browser.root_item()?;
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        println!("{}{}", "  ".repeat(depth), describe(&node));
        if !node.browsable || depth >= max_depth {
            continue;
        }
        match browser.get_children(&node.id, None).await {
            Ok(children) => {
                stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            }
            Err(e) => {
                tracing::warn!(id = %node.id, error = %e, "Skipping subtree");
                println!("{}  ({})", "  ".repeat(depth), e);
            }
        }
    }
    Ok(())
}
