// Buffered reading for guesses, Write for the feedback sink
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{GameError, InputError};
use crate::evaluate::{Feedback, evaluate};
use crate::input::GuessReader;
use crate::secret::Secret;

// Fixed lines printed by the driver
pub const PROMPT: &str = "Guess the number (1-100):";
pub const RETRY: &str = "Try again:";

// AwaitingInput is the only state that repeats; the other two are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingInput,
    Won,
    Terminated,
}

// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { secret: Secret, attempts: u32 },
    Terminated { attempts: u32 },
}

// One game session: a fixed secret and the guesses made against it
#[derive(Debug)]
pub struct Game {
    secret: Secret,
    state: GameState,
    attempts: u32,
}

impl Game {
    pub fn new(secret: Secret) -> Game {
        Game {
            secret,
            state: GameState::AwaitingInput,
            attempts: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Score a guess and advance the state machine.
    ///
    /// Returns `None` once the game has ended; terminal states accept no
    /// further guesses.
    pub fn guess(&mut self, guess: i64) -> Option<Feedback> {
        if self.state != GameState::AwaitingInput {
            return None;
        }

        Some(self.score(guess))
    }

    // Caller guarantees the game is still AwaitingInput
    fn score(&mut self, guess: i64) -> Feedback {
        // Count the attempt before judging it
        self.attempts += 1;

        // Compare against the secret and turn the ordering into a message
        let feedback = Feedback::from_ordering(evaluate(self.secret, guess), self.secret);
        debug!(guess, attempt = self.attempts, %feedback, "scored guess");

        // A hit moves the game into its winning terminal state
        if feedback.is_correct() {
            self.state = GameState::Won;
        }

        feedback
    }

    // Input ran out before the secret was found
    pub fn terminate(&mut self) {
        if self.state == GameState::AwaitingInput {
            self.state = GameState::Terminated;
        }
    }

    // None while the game is still waiting for guesses
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::AwaitingInput => None,
            GameState::Won => Some(Outcome::Won {
                secret: self.secret,
                attempts: self.attempts,
            }),
            GameState::Terminated => Some(Outcome::Terminated {
                attempts: self.attempts,
            }),
        }
    }
}

/// Run a whole session: prompt, then read and score guesses until one is
/// correct or the input stops yielding numbers.
///
/// Running out of input, a malformed token and a failed read all end the game
/// quietly. Only a failure to write feedback is reported as an error.
pub fn play<R, W>(mut game: Game, input: R, output: &mut W) -> Result<Outcome, GameError>
where
    R: BufRead,
    W: Write,
{
    // Tokenize the raw input into guesses
    let mut guesses = GuessReader::new(input);

    // Show the prompt before blocking on the first read
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    loop {
        match game.state() {
            GameState::AwaitingInput => match guesses.next_guess() {
                // A number: score it and report back
                Ok(Some(guess)) => {
                    let feedback = game.score(guess);
                    writeln!(output, "{feedback}")?;

                    // Only a miss asks for another guess
                    if !feedback.is_correct() {
                        writeln!(output, "{RETRY}")?;
                    }
                    output.flush()?;
                }

                // End of input is a normal way out
                Ok(None) => {
                    debug!("input closed");
                    game.terminate();
                }

                // Anything that isn't a number ends the game without a diagnostic
                Err(InputError::Malformed { token }) => {
                    debug!(token = %token, "non-numeric guess, ending game");
                    game.terminate();
                }

                // So does a read that fails outright
                Err(err @ InputError::Io(_)) => {
                    debug!(error = %err, "could not read guess, ending game");
                    game.terminate();
                }
            },

            // Both terminal states leave the loop
            GameState::Won | GameState::Terminated => break,
        }
    }

    // The loop only exits from a terminal state
    let outcome = game.outcome().unwrap_or(Outcome::Terminated {
        attempts: game.attempts(),
    });
    info!(?outcome, "game over");
    Ok(outcome)
}

// Unit tests for the state machine and the driver loop
#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::generate;
    use std::io;

    // Play a full session over in-memory input and capture what was printed
    fn transcript(secret: Secret, input: &[u8]) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome = play(Game::new(secret), input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    // A sink whose every write fails as if stdout had gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    // Too low, too high, then the hit
    #[test]
    fn low_high_then_correct() {
        let secret = Secret::new(60).unwrap();
        let (outcome, out) = transcript(secret, b"50\n75\n60\n");

        assert_eq!(
            out,
            "Guess the number (1-100):\n\
             Too low\nTry again:\n\
             Too high\nTry again:\n\
             Correct! The number was 60\n"
        );
        assert_eq!(outcome, Outcome::Won { secret, attempts: 3 });
    }

    // Nothing to read: just the prompt
    #[test]
    fn empty_input_only_prompts() {
        let (outcome, out) = transcript(generate(1), b"");
        assert_eq!(out, "Guess the number (1-100):\n");
        assert_eq!(outcome, Outcome::Terminated { attempts: 0 });
    }

    // Garbage ends the game; nothing after it is scored
    #[test]
    fn malformed_input_terminates() {
        let secret = Secret::new(10).unwrap();
        let (outcome, out) = transcript(secret, b"5 nope 10\n");

        assert_eq!(out, "Guess the number (1-100):\nToo low\nTry again:\n");
        assert_eq!(outcome, Outcome::Terminated { attempts: 1 });
    }

    // A line that isn't UTF-8 fails the read itself, which also ends the game
    #[test]
    fn unreadable_line_terminates() {
        let secret = Secret::new(60).unwrap();
        let (outcome, out) = transcript(secret, b"50\n\xff\xfe\n60\n");

        assert_eq!(out, "Guess the number (1-100):\nToo low\nTry again:\n");
        assert_eq!(outcome, Outcome::Terminated { attempts: 1 });
    }

    // A dead output is the one failure that gets reported
    #[test]
    fn failed_write_is_an_error() {
        let result = play(Game::new(Secret::new(5).unwrap()), &b"5\n"[..], &mut ClosedPipe);

        match result {
            Err(GameError::Output(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an output error, got {other:?}"),
        }
    }

    // Once the secret is found the rest of the line is left unread
    #[test]
    fn input_after_win_is_ignored() {
        let secret = Secret::new(10).unwrap();
        let (outcome, out) = transcript(secret, b"10 20 30\n");

        assert_eq!(out, "Guess the number (1-100):\nCorrect! The number was 10\n");
        assert_eq!(outcome, Outcome::Won { secret, attempts: 1 });
    }

    // Won and Terminated are terminal
    #[test]
    fn terminal_states_reject_guesses() {
        let secret = Secret::new(3).unwrap();

        let mut won = Game::new(secret);
        assert_eq!(won.guess(3), Some(Feedback::Correct(secret)));
        assert_eq!(won.state(), GameState::Won);
        assert_eq!(won.guess(3), None);
        won.terminate();
        assert_eq!(won.state(), GameState::Won);

        let mut quit = Game::new(secret);
        assert_eq!(quit.outcome(), None);
        quit.terminate();
        assert_eq!(quit.guess(3), None);
        assert_eq!(quit.outcome(), Some(Outcome::Terminated { attempts: 0 }));
    }
}
