mod catalog;
mod cli;
mod commands;
mod config;
mod playback;
mod render;
mod routing;
mod session;
mod store;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.run()
}
