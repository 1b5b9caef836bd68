use clap::Parser;
use tracing::debug;

// Command-line options; none are required
#[derive(Debug, Parser)]
#[command(name = "guess_number", about = "Guess the secret number between 1 and 100")]
pub struct Config {
    /// Fix the seed instead of drawing one at random
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,
}

// Where the seed for a session comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Fixed(i64),
    Entropy,
}

impl SeedSource {
    // Entropy is only drawn here, once per session
    pub fn resolve(self) -> i64 {
        match self {
            SeedSource::Fixed(seed) => seed,
            SeedSource::Entropy => rand::random(),
        }
    }
}

impl Config {
    // Build a Config from an explicit argument list (program name first)
    pub fn build<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    // A --seed flag pins the seed, otherwise it comes from entropy
    pub fn seed_source(&self) -> SeedSource {
        match self.seed {
            Some(seed) => SeedSource::Fixed(seed),
            None => SeedSource::Entropy,
        }
    }

    // Resolve the seed for this session
    pub fn seed(&self) -> i64 {
        let source = self.seed_source();
        let seed = source.resolve();
        debug!(?source, seed, "resolved seed");
        seed
    }
}
