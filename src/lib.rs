//! A desk calculator: reads arithmetic statements, evaluates each one while
//! parsing it, and keeps variables between statements.
//!
//! ```
//! let outcome = deskcalc::calculate("r = 2; pi * r * r");
//! assert_eq!(outcome.results.len(), 2);
//! assert_eq!(outcome.errors, 0);
//! ```

pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod symbols;
mod utils;

pub use error::{CalcError, Diagnostic, Reporter, SENTINEL};
pub use interpreter::Session;
pub use source::{EditorSource, InputSource, ReaderSource, StrSource};
pub use symbols::SymbolTable;

/// Values and error count from evaluating a whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome
{
	pub results: Vec<f64>,
	pub errors: usize,
}

/// Evaluate every statement in `src` in a fresh session, discarding diagnostics.
pub fn calculate(src: &str) -> Outcome
{
	let mut session = Session::with_reporter(StrSource::new(src), Reporter::silent());
	let results = session.by_ref().collect();
	Outcome { results, errors: session.error_count() }
}
