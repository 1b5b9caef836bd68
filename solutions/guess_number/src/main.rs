// Standard streams and the argument list
use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

// The game itself lives in the library half of the crate
use guess_number_solution::Config;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout only carries the game
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Build the Config from the command line
    // If it fails, clap prints usage and exits with its own status code
    let config = Config::build(env::args_os()).unwrap_or_else(|err| err.exit());
    info!(?config, "starting game");

    // Play over locked stdin and stdout; a failed write bubbles up as a non-zero exit
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    guess_number_solution::run(&config, stdin, &mut stdout)?;

    Ok(())
}
