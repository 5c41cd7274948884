use std::io::{self, Write};

use super::error::{Diagnostic, Reporter};
use super::lexer::{TokenKind, Tokenizer};
use super::parser::Parser;
use super::source::InputSource;
use super::symbols::SymbolTable;

/// Iterating a session yields one value per statement. Bad input is reported and counted, never fatal.
pub struct Session<S: InputSource>
{
	tokens: Tokenizer<S>,
	symbols: SymbolTable,
	reporter: Reporter,
}

impl<S: InputSource> Session<S>
{
	pub fn new(source: S) -> Session<S>
	{
		Session::with_reporter(source, Reporter::stderr())
	}

	pub fn with_reporter(source: S, reporter: Reporter) -> Session<S>
	{
		Session
		{
			tokens: Tokenizer::new(source),
			symbols: SymbolTable::new(),
			reporter,
		}
	}

	pub fn symbols(&self) -> &SymbolTable
	{
		&self.symbols
	}

	pub fn error_count(&self) -> usize
	{
		self.reporter.count()
	}

	pub fn diagnostics(&self) -> &[Diagnostic]
	{
		self.reporter.diagnostics()
	}

	pub fn exit_status(&self) -> i32
	{
		exit_status(self.error_count())
	}

	/// Evaluate the next non-empty statement, or `None` once the input is exhausted.
	pub fn statement(&mut self) -> Option<f64>
	{
		loop
		{
			match self.tokens.advance(&mut self.reporter).kind
			{
				TokenKind::End => return None,
				TokenKind::Print => continue,
				_ => break,
			}
		}

		let value = Parser::new(&mut self.tokens, &mut self.symbols, &mut self.reporter).expression();
		log::debug!("line {}: statement = {}", self.tokens.line(), value);
		Some(value)
	}

	/// Driver loop: print every statement's value on its own line until end of input.
	///
	/// Returns the final error count, or the read failure that cut the input short.
	pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<usize>
	{
		while let Some(value) = self.statement()
		{
			writeln!(out, "{}", value)?;
			out.flush()?;
		}

		match self.tokens.take_error()
		{
			Some(err) => Err(err),
			None => Ok(self.error_count()),
		}
	}
}

impl<S: InputSource> Iterator for Session<S>
{
	type Item = f64;

	fn next(&mut self) -> Option<f64>
	{
		self.statement()
	}
}

/// Error count saturated so it never wraps to a successful status.
pub fn exit_status(errors: usize) -> i32
{
	errors.min(255) as i32
}
