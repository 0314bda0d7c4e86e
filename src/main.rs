mod api;
mod cli;
mod config;
mod handler;
mod logger;
mod page;

use std::error::Error;

use clap::Parser;
use tracing::debug;

use crate::cli::CmdRunner;
use crate::cli::entry::{Holler, HollerCmd};
use crate::config::DataDir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let data_dir = DataDir::new()?;

    // Keep the guard alive so buffered log lines reach the file on exit.
    let _guard = logger::configure(&data_dir.cache_dir())?;

    debug!("logging to {}", data_dir.cache_dir().display());

    let args = Holler::parse();

    match args.cmd {
        HollerCmd::Call(call_cmd) => call_cmd.run().await?,
        HollerCmd::Repl(repl_cmd) => repl_cmd.run().await?,
    }

    Ok(())
}
