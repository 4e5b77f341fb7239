// crates/kyuji-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "kyuji")]
#[command(about = "Old-form kanji (kyujitai) to joyo kanji normalizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a file or stdin, replacing old forms with joyo kanji
    Normalize(cmd::normalize::NormalizeArgs),

    /// Report how each character of a string is classified and normalized
    Check(cmd::check::CheckArgs),

    /// Pack a JSON source dictionary into a .kjd artifact
    Pack(cmd::pack::PackArgs),

    /// Inspect a .kjd artifact (magic/crc/id, record counts, sizes)
    Inspect(cmd::inspect::InspectArgs),

    /// Export a dictionary back to the labeled JSON source format
    Export(cmd::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Pack(args) => cmd::pack::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Export(args) => cmd::export::run(args),
    }
}
