use anyhow::Result;
use ascii_aquarium::{app, logging, Args, Settings};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();
    app::run(Settings::from(args))
}
