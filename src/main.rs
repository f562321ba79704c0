use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod seed;

#[cfg(test)]
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    config::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(cli::parse_error_exit_code(&e));
        }
    };
    cli.run().await
}
