use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::mkissue::MkissueArgs;

#[derive(Parser)]
#[command(
    name = "gh-utils",
    bin_name = "gh-utils",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a GitHub issue from a markdown file
    Mkissue(MkissueArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
