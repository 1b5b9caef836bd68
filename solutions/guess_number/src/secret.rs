use std::fmt;

// Seed used in place of zero, so a default-initialized seed still yields a spread-out secret
pub const FALLBACK_SEED: i64 = 42;

// Inclusive bounds of the secret
pub const MIN_SECRET: u8 = 1;
pub const MAX_SECRET: u8 = 100;

// The number the player has to find, always within MIN_SECRET..=MAX_SECRET
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Secret(u8);

impl Secret {
    // Wrap a value, rejecting anything outside 1..=100
    pub fn new(value: u8) -> Option<Secret> {
        (MIN_SECRET..=MAX_SECRET)
            .contains(&value)
            .then_some(Secret(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the secret for a seed: `((seed * 57 + 13) mod 100) + 1`.
///
/// The modulo is Euclidean, so negative seeds land in range too. The
/// arithmetic runs in `i128`, which keeps the function total over `i64`.
pub fn generate(seed: i64) -> Secret {
    // Zero is swapped for the fallback before anything else
    let seed = if seed == 0 { FALLBACK_SEED } else { seed };

    // rem_euclid keeps the remainder in 0..100 whatever the sign
    let offset = (i128::from(seed) * 57 + 13).rem_euclid(100);

    // Shift 0..100 up to 1..=100
    Secret(offset as u8 + MIN_SECRET)
}
