// crates/sokopack-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sokopack-cli")]
#[command(about = "Pack Sokoban levels into line-numbered DATA blocks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode every level of a plain-text level file into DATA blocks
    Encode(cmd::encode::EncodeArgs),

    /// Decode a rendered DATA block back into a level picture
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
