use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = dircheck::cli::Cli::parse();
    cli.run()
}
