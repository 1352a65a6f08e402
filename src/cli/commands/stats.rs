//! Stats command - size and outcome breakdown of the unsolved tree

use anyhow::Result;
use clap::Parser;

use crate::cli::{
    config::{CommonConfig, init_logging},
    output::{print_kv, print_section, print_subsection, print_summary},
};

#[derive(Parser, Debug)]
#[command(about = "Print state, leaf and outcome counts of the game tree")]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let _logger = init_logging(&args.common.log_level)?;

    print_section("Game Tree Statistics");
    if !args.common.opening.is_empty() {
        print_kv("Opening", &args.common.opening.to_string());
    }

    let tree = args.common.build_tree()?;
    let root = tree.root();
    print_summary(&tree.summary(root));
    print_kv("Root children", &tree.children(root).len().to_string());

    if let Some(leaf) = tree.first_leaf(root) {
        print_subsection("First leaf");
        if let Some(outcome) = tree.result(leaf) {
            print_kv("Outcome", outcome.as_str());
        }
        println!("\n{}", tree.derive_board_state(leaf));
    }
    Ok(())
}
