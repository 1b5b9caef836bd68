// Ordering is the three-way result; fmt renders the feedback lines
use std::cmp::Ordering;
use std::fmt;

use crate::secret::Secret;

// Compare a guess against the secret: Less means the guess is too low
pub fn evaluate(secret: Secret, guess: i64) -> Ordering {
    guess.cmp(&i64::from(secret.get()))
}

// What the player gets told after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct(Secret),
}

impl Feedback {
    // Less means the player has to go higher
    pub fn from_ordering(ordering: Ordering, secret: Secret) -> Feedback {
        match ordering {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => Feedback::Correct(secret),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct(_))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Feedback::TooLow => write!(f, "Too low"),
            Feedback::TooHigh => write!(f, "Too high"),
            Feedback::Correct(secret) => write!(f, "Correct! The number was {secret}"),
        }
    }
}
