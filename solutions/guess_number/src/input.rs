// A queue of tokens still waiting to be parsed, and line-oriented reading
use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::InputError;

/// Pulls whitespace-separated guesses out of a line-oriented reader.
///
/// Lines are read lazily, one at a time, so an interactive player is never
/// asked for more input than the next guess needs.
pub struct GuessReader<R> {
    reader: R,
    // Tokens left over from the last line read
    pending: VecDeque<String>,
}

impl<R: BufRead> GuessReader<R> {
    // Wrap a reader; nothing is read until the first guess is asked for
    pub fn new(reader: R) -> GuessReader<R> {
        GuessReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    // Ok(None) once the input is exhausted
    pub fn next_guess(&mut self) -> Result<Option<i64>, InputError> {
        // Refill from the reader until we have a token or hit the end
        while self.pending.is_empty() {
            let mut line = String::new();

            // Zero bytes read means the stream is closed
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            // Split the line on any whitespace; blank lines add nothing
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }

        // Take the oldest token first
        let Some(token) = self.pending.pop_front() else {
            return Ok(None);
        };

        // Parse as i64; anything else is reported with the offending token
        token
            .parse()
            .map(Some)
            .map_err(|_| InputError::Malformed { token })
    }
}
