use rand::Rng;

/// Result of feeding one line of input to a [`GuessSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input did not parse as an integer
    NotANumber,
    /// Parsed, but outside the session's `[min, max]` range
    OutOfRange,
    /// Guess was above the secret
    TooHigh,
    /// Guess was below the secret
    TooLow,
    /// Guess matched the secret; the session is over
    Correct { secret: i64, attempts: u32 },
}

/// One run of the guessing game: a secret number and an attempt counter.
///
/// Every call to [`guess`](Self::guess) counts as an attempt, including
/// malformed and out-of-range input. The counter is bumped before the input
/// is validated; this matches the game's historical behavior and is relied
/// on by the reported attempt total.
#[derive(Debug)]
pub struct GuessSession {
    secret: i64,
    min: i64,
    max: i64,
    attempts: u32,
}

impl GuessSession {
    /// Start a session with a uniformly random secret in `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        let secret = rand::rng().random_range(min..=max);
        tracing::debug!(secret, "drew secret number");
        Self::with_secret(secret, min, max)
    }

    /// Start a session with a known secret (used by tests).
    pub fn with_secret(secret: i64, min: i64, max: i64) -> Self {
        Self {
            secret,
            min,
            max,
            attempts: 0,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Consume one line of player input and report the outcome.
    pub fn guess(&mut self, line: &str) -> Outcome {
        self.attempts += 1;

        let Ok(number) = line.trim().parse::<i64>() else {
            return Outcome::NotANumber;
        };

        if number < self.min || number > self.max {
            return Outcome::OutOfRange;
        }

        if number > self.secret {
            Outcome::TooHigh
        } else if number < self.secret {
            Outcome::TooLow
        } else {
            Outcome::Correct {
                secret: self.secret,
                attempts: self.attempts,
            }
        }
    }
}
