use std::collections::VecDeque;
use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::Editor;

/// A character stream with room for exactly one pushed-back character.
pub trait InputSource
{
	fn next_char(&mut self) -> Option<char>;

	fn unread(&mut self, c: char);

	/// The I/O failure that ended the stream early, if any.
	fn take_error(&mut self) -> Option<io::Error>
	{
		None
	}
}

impl<T: InputSource + ?Sized> InputSource for Box<T>
{
	fn next_char(&mut self) -> Option<char>
	{
		(**self).next_char()
	}

	fn unread(&mut self, c: char)
	{
		(**self).unread(c)
	}

	fn take_error(&mut self) -> Option<io::Error>
	{
		(**self).take_error()
	}
}

pub struct StrSource
{
	chars: Vec<char>,
	pos: usize,
	pushed: Option<char>,
}

impl StrSource
{
	pub fn new<T>(src: T) -> StrSource where T: Into<String>
	{
		StrSource
		{
			chars: src.into().chars().collect(),
			pos: 0,
			pushed: None,
		}
	}
}

impl InputSource for StrSource
{
	fn next_char(&mut self) -> Option<char>
	{
		if let Some(c) = self.pushed.take()
		{
			return Some(c);
		}

		let c = self.chars.get(self.pos).copied()?;
		self.pos += 1;
		Some(c)
	}

	fn unread(&mut self, c: char)
	{
		self.pushed = Some(c);
	}
}

/// Line-buffered source over any reader, used when stdin is a pipe or file.
///
/// Bytes that aren't UTF-8 come through as U+FFFD, which the tokenizer reports as a bad token.
pub struct ReaderSource<R: BufRead>
{
	reader: R,
	line: VecDeque<char>,
	pushed: Option<char>,
	done: bool,
	error: Option<io::Error>,
}

impl<R: BufRead> ReaderSource<R>
{
	pub fn new(reader: R) -> ReaderSource<R>
	{
		ReaderSource
		{
			reader,
			line: VecDeque::new(),
			pushed: None,
			done: false,
			error: None,
		}
	}

	fn fill(&mut self) -> bool
	{
		if self.done
		{
			return false;
		}

		let mut buf = Vec::new();
		match self.reader.read_until(b'\n', &mut buf)
		{
			Ok(0) =>
			{
				self.done = true;
				false
			},
			Ok(_) =>
			{
				self.line.extend(String::from_utf8_lossy(&buf).chars());
				true
			},
			Err(err) =>
			{
				log::warn!("input read failed: {}", err);
				self.line.extend(String::from_utf8_lossy(&buf).chars());
				self.error = Some(err);
				self.done = true;
				!self.line.is_empty()
			},
		}
	}
}

impl<R: BufRead> InputSource for ReaderSource<R>
{
	fn next_char(&mut self) -> Option<char>
	{
		if let Some(c) = self.pushed.take()
		{
			return Some(c);
		}

		while self.line.is_empty()
		{
			if !self.fill()
			{
				return None;
			}
		}

		self.line.pop_front()
	}

	fn unread(&mut self, c: char)
	{
		self.pushed = Some(c);
	}

	fn take_error(&mut self) -> Option<io::Error>
	{
		self.error.take()
	}
}

/// Interactive source backed by a line editor. `Ctrl-C` and `Ctrl-D` end the input.
pub struct EditorSource
{
	editor: Editor<()>,
	prompt: String,
	history: bool,
	line: VecDeque<char>,
	pushed: Option<char>,
	done: bool,
	error: Option<io::Error>,
}

impl EditorSource
{
	pub fn new<T>(prompt: T, history: bool) -> EditorSource where T: Into<String>
	{
		EditorSource
		{
			editor: Editor::<()>::new(),
			prompt: prompt.into(),
			history,
			line: VecDeque::new(),
			pushed: None,
			done: false,
			error: None,
		}
	}

	fn fill(&mut self) -> bool
	{
		if self.done
		{
			return false;
		}

		match self.editor.readline(&self.prompt)
		{
			Ok(line) =>
			{
				if self.history && !line.trim().is_empty()
				{
					self.editor.add_history_entry(line.as_str());
				}
				self.line.extend(line.chars());
				self.line.push_back('\n');
				true
			},
			Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) =>
			{
				self.done = true;
				false
			},
			Err(err) =>
			{
				log::warn!("line editor failed: {:?}", err);
				self.error = Some(editor_error(err));
				self.done = true;
				false
			},
		}
	}
}

fn editor_error(err: ReadlineError) -> io::Error
{
	match err
	{
		ReadlineError::Io(err) => err,
		err => io::Error::new(io::ErrorKind::Other, err.to_string()),
	}
}

impl InputSource for EditorSource
{
	fn next_char(&mut self) -> Option<char>
	{
		if let Some(c) = self.pushed.take()
		{
			return Some(c);
		}

		while self.line.is_empty()
		{
			if !self.fill()
			{
				return None;
			}
		}

		self.line.pop_front()
	}

	fn unread(&mut self, c: char)
	{
		self.pushed = Some(c);
	}

	fn take_error(&mut self) -> Option<io::Error>
	{
		self.error.take()
	}
}
