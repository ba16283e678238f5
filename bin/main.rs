use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod game;
mod player;
mod render;
mod terminal;
mod variant;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
