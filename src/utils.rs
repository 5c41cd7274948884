use std::sync::OnceLock;

use regex::Regex;

fn numeric_literal() -> &'static Regex
{
	static NUMERIC: OnceLock<Regex> = OnceLock::new();
	NUMERIC.get_or_init(||
		Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("numeric literal pattern is valid")
	)
}

pub fn is_numeric_literal(text: &str) -> bool
{
	numeric_literal().is_match(text)
}

/// Characters that start a number literal.
pub fn is_number_char(c: char) -> bool
{
	c.is_ascii_digit() || c == '.'
}

pub fn is_digit(c: char) -> bool
{
	c.is_ascii_digit()
}

pub fn is_name_start(c: char) -> bool
{
	c.is_alphabetic()
}

pub fn is_name_char(c: char) -> bool
{
	c.is_alphanumeric()
}

/// Whitespace that separates tokens; a newline is a statement terminator, not a separator.
pub fn is_blank(c: char) -> bool
{
	c.is_whitespace() && c != '\n'
}
