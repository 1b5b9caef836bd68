// Secret derivation and guess scoring, plus the console game that drives them
use std::io::{BufRead, Write};

use tracing::debug;

mod config;
mod error;
mod evaluate;
mod game;
mod input;
mod secret;

pub use config::{Config, SeedSource};
pub use error::{GameError, InputError};
pub use evaluate::{Feedback, evaluate};
pub use game::{Game, GameState, Outcome, PROMPT, RETRY, play};
pub use input::GuessReader;
pub use secret::{FALLBACK_SEED, MAX_SECRET, MIN_SECRET, Secret, generate};

// Play one session with the given config over any input and output
pub fn run<R, W>(config: &Config, input: R, output: &mut W) -> Result<Outcome, GameError>
where
    R: BufRead,
    W: Write,
{
    // The seed is resolved once and turned into the session's secret
    let seed = config.seed();
    let secret = generate(seed);
    debug!(seed, secret = secret.get(), "derived secret");

    // Hand the secret to a fresh game and drive it to the end
    play(Game::new(secret), input, output)
}
