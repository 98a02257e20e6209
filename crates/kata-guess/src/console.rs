//! Console loop for the guessing game.

use crate::session::{GuessSession, Outcome};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter a number: ";
const HIGH_MESSAGE: &str = "You guessed higher than my number.";
const LOW_MESSAGE: &str = "You guessed lower than my number.";

fn welcome_message(min: i64, max: i64) -> String {
    format!("Guess my number. It is between {} and {}.", min, max)
}

fn not_a_number_message(min: i64, max: i64) -> String {
    format!("Not a number. Enter a number between {} and {}.", min, max)
}

fn out_of_range_message(min: i64, max: i64) -> String {
    format!("Out of range. Enter a number between {} and {}.", min, max)
}

/// Run the game against the given reader/writer until the secret is guessed
/// or the input ends.
pub fn run<R: BufRead, W: Write>(
    mut session: GuessSession,
    mut reader: R,
    mut writer: W,
) -> std::io::Result<()> {
    let (min, max) = (session.min(), session.max());

    writeln!(writer, "{}", welcome_message(min, max))?;

    let mut line = String::new();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF: the player walked away
            return Ok(());
        }

        match session.guess(&line) {
            Outcome::NotANumber => writeln!(writer, "{}", not_a_number_message(min, max))?,
            Outcome::OutOfRange => writeln!(writer, "{}", out_of_range_message(min, max))?,
            Outcome::TooHigh => writeln!(writer, "{}", HIGH_MESSAGE)?,
            Outcome::TooLow => writeln!(writer, "{}", LOW_MESSAGE)?,
            Outcome::Correct { secret, attempts } => {
                writeln!(writer, "Correct. My number was {}.", secret)?;
                writeln!(writer, "You guessed it in {} attempts.", attempts)?;
                return Ok(());
            }
        }
    }
}
