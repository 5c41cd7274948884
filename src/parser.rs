use super::error::{CalcError, Reporter};
use super::lexer::{TokenKind, Tokenizer};
use super::source::InputSource;
use super::symbols::SymbolTable;

/// Recursive-descent parser that computes values as it goes; no tree is built.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := primary (('*' | '/') primary)*
/// primary    := number | name | name '=' expression | '-' primary | '(' expression ')'
/// ```
///
/// Every rule starts on the tokenizer's current token, so the caller must have
/// fetched it already. A rule returns with the first token it did not consume
/// as the current one.
pub struct Parser<'a, S: InputSource>
{
	tokens: &'a mut Tokenizer<S>,
	symbols: &'a mut SymbolTable,
	reporter: &'a mut Reporter,
}

impl<'a, S: InputSource> Parser<'a, S>
{
	pub fn new(tokens: &'a mut Tokenizer<S>, symbols: &'a mut SymbolTable, reporter: &'a mut Reporter) -> Parser<'a, S>
	{
		Parser { tokens, symbols, reporter }
	}

	fn advance(&mut self) -> TokenKind
	{
		self.tokens.advance(self.reporter).kind
	}

	fn error(&mut self, error: CalcError) -> f64
	{
		let line = self.tokens.line();
		self.reporter.report(line, error)
	}

	pub fn expression(&mut self) -> f64
	{
		let mut left = self.term();
		loop
		{
			match self.tokens.kind()
			{
				TokenKind::Plus =>
				{
					self.advance();
					left += self.term();
				},
				TokenKind::Minus =>
				{
					self.advance();
					left -= self.term();
				},
				_ => return left,
			}
		}
	}

	pub fn term(&mut self) -> f64
	{
		let mut left = self.primary();
		loop
		{
			match self.tokens.kind()
			{
				TokenKind::Mul =>
				{
					self.advance();
					left *= self.primary();
				},
				TokenKind::Div =>
				{
					self.advance();
					let divisor = self.primary();
					if divisor == 0.0
					{
						return self.error(CalcError::DivideByZero);
					}
					left /= divisor;
				},
				_ => return left,
			}
		}
	}

	pub fn primary(&mut self) -> f64
	{
		match self.tokens.kind()
		{
			TokenKind::Number =>
			{
				let value = self.tokens.current().value;
				self.advance();
				value
			},
			TokenKind::Name =>
			{
				let name = self.tokens.current().text.clone();
				let value = *self.symbols.lookup(&name);
				if self.advance() != TokenKind::Assign
				{
					return value;
				}

				self.advance();
				let value = self.expression();
				*self.symbols.lookup(&name) = value;
				value
			},
			TokenKind::Minus =>
			{
				self.advance();
				-self.primary()
			},
			TokenKind::LParen =>
			{
				self.advance();
				let value = self.expression();
				if self.tokens.kind() != TokenKind::RParen
				{
					return self.error(CalcError::RParenExpected);
				}
				self.advance();
				value
			},
			_ => self.error(CalcError::PrimaryExpected),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::error::SENTINEL;
	use crate::source::StrSource;

	struct Fixture
	{
		tokens: Tokenizer<StrSource>,
		symbols: SymbolTable,
		reporter: Reporter,
	}

	impl Fixture
	{
		fn new(src: &str) -> Fixture
		{
			let mut reporter = Reporter::silent();
			let mut tokens = Tokenizer::new(StrSource::new(src));
			tokens.advance(&mut reporter);
			Fixture { tokens, symbols: SymbolTable::new(), reporter }
		}

		fn parser(&mut self) -> Parser<'_, StrSource>
		{
			Parser::new(&mut self.tokens, &mut self.symbols, &mut self.reporter)
		}
	}

	fn eval(src: &str) -> (f64, usize)
	{
		let mut fixture = Fixture::new(src);
		let value = fixture.parser().expression();
		(value, fixture.reporter.count())
	}

	#[test]
	fn precedence_and_grouping()
	{
		assert_eq!(eval("2 + 3 * 4"), (14.0, 0));
		assert_eq!(eval("(2 + 3) * 4"), (20.0, 0));
		assert_eq!(eval("-2 * -3"), (6.0, 0));
	}

	#[test]
	fn left_associative()
	{
		assert_eq!(eval("10 - 4 - 3"), (3.0, 0));
		assert_eq!(eval("64 / 4 / 2"), (8.0, 0));
		assert_eq!(eval("2 * 3 / 4 * 8"), (12.0, 0));
	}

	#[test]
	fn unary_minus_binds_tightest()
	{
		assert_eq!(eval("--4"), (4.0, 0));
		assert_eq!(eval("-(1 + 2) * 2"), (-6.0, 0));
		assert_eq!(eval("3 - -3"), (6.0, 0));
	}

	#[test]
	fn assignment_stores_and_returns()
	{
		let mut fixture = Fixture::new("x = 2 * 3");
		assert_eq!(fixture.parser().expression(), 6.0);
		assert_eq!(fixture.symbols.get("x"), Some(6.0));
	}

	#[test]
	fn assignment_is_right_recursive()
	{
		let mut fixture = Fixture::new("a = b = 4");
		assert_eq!(fixture.parser().expression(), 4.0);
		assert_eq!(fixture.symbols.get("a"), Some(4.0));
		assert_eq!(fixture.symbols.get("b"), Some(4.0));
	}

	#[test]
	fn unknown_name_reads_zero()
	{
		let mut fixture = Fixture::new("y * 2");
		assert_eq!(fixture.parser().expression(), 0.0);
		assert_eq!(fixture.symbols.get("y"), Some(0.0));
	}

	#[test]
	fn divide_by_zero_yields_sentinel()
	{
		assert_eq!(eval("1 / 0"), (SENTINEL, 1));
		assert_eq!(eval("5 + 8 / (2 - 2)"), (5.0 + SENTINEL, 1));
	}

	#[test]
	fn divide_by_zero_abandons_rest_of_term()
	{
		let mut fixture = Fixture::new("1 / 0 * 7");
		assert_eq!(fixture.parser().expression(), SENTINEL);
		assert_eq!(fixture.tokens.kind(), TokenKind::Mul);
	}

	#[test]
	fn missing_primary()
	{
		let mut fixture = Fixture::new("2 +");
		assert_eq!(fixture.parser().expression(), 2.0 + SENTINEL);
		assert_eq!(fixture.reporter.diagnostics()[0].error, CalcError::PrimaryExpected);
		assert_eq!(fixture.tokens.kind(), TokenKind::End);
	}

	#[test]
	fn missing_rparen()
	{
		let mut fixture = Fixture::new("(1 + 2");
		assert_eq!(fixture.parser().expression(), SENTINEL);
		assert_eq!(fixture.reporter.diagnostics()[0].error, CalcError::RParenExpected);
	}

	#[test]
	fn primary_error_does_not_consume()
	{
		let mut fixture = Fixture::new(")");
		assert_eq!(fixture.parser().primary(), SENTINEL);
		assert_eq!(fixture.tokens.kind(), TokenKind::RParen);
	}

	#[test]
	fn stops_at_terminator()
	{
		let mut fixture = Fixture::new("1 + 1; 5");
		assert_eq!(fixture.parser().expression(), 2.0);
		assert_eq!(fixture.tokens.kind(), TokenKind::Print);
	}
}
