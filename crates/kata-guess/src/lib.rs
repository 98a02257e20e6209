//! Number guessing game for the kata suite.
//!
//! The session engine is pure (no I/O) so the hint logic can be tested
//! directly; the console loop wires it to stdin/stdout.

pub mod console;
pub mod session;

pub use console::run;
pub use session::{GuessSession, Outcome};
