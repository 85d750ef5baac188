mod cli;
mod mkissue;
mod shared;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() {
    let Cli { command } = Cli::parse();

    let result: mkissue::Result<()> = match command {
        Commands::Mkissue(args) => mkissue::run(&args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
