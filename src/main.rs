pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod sections;
pub mod utils;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    app::App,
    cli::Cli,
    utils::{initialize_logging, initialize_panic_handler},
};

fn run() -> Result<()> {
    initialize_panic_handler()?;

    // The log file is optional; the card still prints without it.
    if let Err(e) = initialize_logging() {
        eprintln!("{} warning: logging disabled: {e}", env!("CARGO_PKG_NAME"));
    }

    let args = Cli::parse();
    let mut app = App::new(args)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
