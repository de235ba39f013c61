use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use rebuild_bst::{Key, Tree};

const DEFAULT_KEYS: &str = "1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324";

#[derive(Parser, Debug)]
#[command(
    name = "rebuild-bst",
    about = "Build a binary search tree, skew it with inserts and deletes, then rebalance it"
)]
struct Cli {
    /// Keys to build the tree from, separated by commas and/or spaces.
    #[arg(allow_negative_numbers = true)]
    keys: Vec<String>,
    /// Keys to insert once the tree is built. Pass the flag alone to insert nothing.
    #[arg(long, num_args = 0.., allow_negative_numbers = true, default_values_t = [101, 102, 103, 104])]
    insert: Vec<Key>,
    /// Keys to delete after inserting.
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    delete: Vec<Key>,
    /// Skip the final rebalance.
    #[arg(long)]
    no_rebalance: bool,
    /// How much of the tree's own logging to show: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .context("failed to install logger")?;

    let input = if cli.keys.is_empty() {
        DEFAULT_KEYS.to_string()
    } else {
        cli.keys.join(" ")
    };
    let mut tree: Tree = input
        .parse()
        .with_context(|| format!("failed to parse keys from {input:?}"))?;
    info!("built tree with {} keys", tree.len());
    display(&tree);

    tree.extend(cli.insert.iter().copied());
    for &key in &cli.delete {
        tree.delete(key);
    }
    info!("inserted {:?} and deleted {:?}", cli.insert, cli.delete);
    display(&tree);

    if !cli.no_rebalance {
        tree.rebalance();
        display(&tree);
    }

    Ok(())
}

/// Prints the tree followed by its balance and every traversal.
fn display(tree: &Tree) {
    print!("{tree}");
    println!("is balanced: {}", tree.is_balanced());
    println!("level order: {:?}", tree.level_order());
    println!("pre order: {:?}", tree.preorder());
    println!("post order: {:?}", tree.postorder());
    println!("in order: {:?}", tree.inorder());
    println!();
}
