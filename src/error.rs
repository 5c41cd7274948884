use std::fmt;
use std::io::{self, Write};

/// Value substituted for any subexpression that failed to evaluate.
///
/// `1.0` keeps a failed divisor from cascading into a second divide-by-zero report.
pub const SENTINEL: f64 = 1.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalcError
{
	#[error("bad token '{0}'")]
	BadToken(char),
	#[error("primary expected")]
	PrimaryExpected,
	#[error("')' expected")]
	RParenExpected,
	#[error("divide by 0")]
	DivideByZero,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic
{
	pub line: usize,
	pub error: CalcError,
}

impl fmt::Display for Diagnostic
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "error: line {}: {}", self.line, self.error)
	}
}

pub struct Reporter
{
	sink: Box<dyn Write>,
	reported: Vec<Diagnostic>,
}

impl Reporter
{
	pub fn new(sink: Box<dyn Write>) -> Reporter
	{
		Reporter
		{
			sink,
			reported: Vec::new(),
		}
	}

	pub fn stderr() -> Reporter
	{
		Reporter::new(Box::new(io::stderr()))
	}

	pub fn silent() -> Reporter
	{
		Reporter::new(Box::new(io::sink()))
	}

	/// Records `error`, writes it out and returns [`SENTINEL`] for the caller to use as its value.
	pub fn report(&mut self, line: usize, error: CalcError) -> f64
	{
		let diagnostic = Diagnostic { line, error };
		log::debug!("error #{}: {}", self.reported.len() + 1, diagnostic);

		if let Err(err) = writeln!(self.sink, "{}", diagnostic)
		{
			log::warn!("could not write diagnostic: {}", err);
		}

		self.reported.push(diagnostic);
		SENTINEL
	}

	pub fn count(&self) -> usize
	{
		self.reported.len()
	}

	pub fn diagnostics(&self) -> &[Diagnostic]
	{
		&self.reported
	}
}
