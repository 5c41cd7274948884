use std::fmt::{self, Display};

use super::error::{CalcError, Reporter};
use super::source::InputSource;
use super::utils::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind
{
	Number,
	Name,
	End,
	Plus,
	Minus,
	Mul,
	Div,
	Assign,
	LParen,
	RParen,
	/// Statement terminator: `;` or a newline.
	Print,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token
{
	pub kind: TokenKind,
	pub text: String,
	pub value: f64,
}

impl Token
{
	pub fn new(kind: TokenKind) -> Token
	{
		Token { kind, text: String::new(), value: 0.0 }
	}

	pub fn number(value: f64) -> Token
	{
		Token { kind: TokenKind::Number, text: String::new(), value }
	}

	pub fn name<T>(text: T) -> Token where T: Into<String>
	{
		Token { kind: TokenKind::Name, text: text.into(), value: 0.0 }
	}
}

impl Display for Token
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
	{
		match self.kind
		{
			TokenKind::Number => write!(f, "{}", self.value),
			TokenKind::Name   => write!(f, "{}", self.text),
			TokenKind::End    => write!(f, "<end>"),
			TokenKind::Plus   => write!(f, "+"),
			TokenKind::Minus  => write!(f, "-"),
			TokenKind::Mul    => write!(f, "*"),
			TokenKind::Div    => write!(f, "/"),
			TokenKind::Assign => write!(f, "="),
			TokenKind::LParen => write!(f, "("),
			TokenKind::RParen => write!(f, ")"),
			TokenKind::Print  => write!(f, ";"),
		}
	}
}

pub struct Tokenizer<S: InputSource>
{
	source: S,
	current: Token,
	line: usize,
	newline_pending: bool,
}

impl<S: InputSource> Tokenizer<S>
{
	pub fn new(source: S) -> Tokenizer<S>
	{
		Tokenizer
		{
			source,
			current: Token::new(TokenKind::Print),
			line: 1,
			newline_pending: false,
		}
	}

	pub fn take_error(&mut self) -> Option<std::io::Error>
	{
		self.source.take_error()
	}

	pub fn current(&self) -> &Token
	{
		&self.current
	}

	pub fn kind(&self) -> TokenKind
	{
		self.current.kind
	}

	pub fn line(&self) -> usize
	{
		self.line
	}

	/// Replace the current token with the next one from the input.
	///
	/// Malformed input is reported to `reporter` and comes back as a `print`
	/// token so the driver can resynchronize at the next statement.
	pub fn advance(&mut self, reporter: &mut Reporter) -> &Token
	{
		if self.newline_pending
		{
			self.line += 1;
			self.newline_pending = false;
		}

		self.current = if self.current.kind == TokenKind::End
		{
			Token::new(TokenKind::End)
		}
		else
		{
			self.read_token(reporter)
		};

		log::trace!("line {}: token {}", self.line, self.current);
		&self.current
	}

	fn read_token(&mut self, reporter: &mut Reporter) -> Token
	{
		let c = loop
		{
			match self.source.next_char()
			{
				None => return Token::new(TokenKind::End),
				Some(c) if is_blank(c) => continue,
				Some(c) => break c,
			}
		};

		match c
		{
			'\n' =>
			{
				self.newline_pending = true;
				Token::new(TokenKind::Print)
			},
			';' => Token::new(TokenKind::Print),
			'+' => Token::new(TokenKind::Plus),
			'-' => Token::new(TokenKind::Minus),
			'*' => Token::new(TokenKind::Mul),
			'/' => Token::new(TokenKind::Div),
			'=' => Token::new(TokenKind::Assign),
			'(' => Token::new(TokenKind::LParen),
			')' => Token::new(TokenKind::RParen),
			c if is_number_char(c) =>
			{
				self.source.unread(c);
				self.read_number(reporter)
			},
			c if is_name_start(c) =>
			{
				self.source.unread(c);
				self.read_name()
			},
			c =>
			{
				reporter.report(self.line, CalcError::BadToken(c));
				Token::new(TokenKind::Print)
			},
		}
	}

	/// Longest prefix of the form `digits [. digits]`; whatever follows is left for the next token.
	fn read_number(&mut self, reporter: &mut Reporter) -> Token
	{
		let mut literal = self.read_while(is_digit);
		match self.source.next_char()
		{
			Some('.') =>
			{
				literal.push('.');
				literal.push_str(&self.read_while(is_digit));
			},
			Some(c) => self.source.unread(c),
			None => (),
		}

		match literal.parse::<f64>()
		{
			Ok(value) if is_numeric_literal(&literal) => Token::number(value),
			_ =>
			{
				reporter.report(self.line, CalcError::BadToken('.'));
				Token::new(TokenKind::Print)
			},
		}
	}

	fn read_name(&mut self) -> Token
	{
		Token::name(self.read_while(is_name_char))
	}

	fn read_while(&mut self, accept: fn(char) -> bool) -> String
	{
		let mut text = String::new();
		while let Some(c) = self.source.next_char()
		{
			if !accept(c)
			{
				self.source.unread(c);
				break;
			}
			text.push(c);
		}
		text
	}
}
