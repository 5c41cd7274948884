use std::io::{self, IsTerminal};

use clap::Parser;
use deskcalc::interpreter::exit_status;
use deskcalc::{EditorSource, InputSource, ReaderSource, Session, StrSource};

/// Desk calculator: evaluates `+ - * /`, parentheses and variable
/// assignments, one statement per line or `;`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args
{
	/// Prompt shown when reading from a terminal.
	#[arg(short, long, default_value = "> ")]
	prompt: String,

	/// Don't keep a history of entered lines.
	#[arg(long)]
	no_history: bool,

	/// Statements to evaluate instead of reading standard input.
	expressions: Vec<String>,
}

fn source(args: &Args) -> Box<dyn InputSource>
{
	if !args.expressions.is_empty()
	{
		let mut text = args.expressions.join("\n");
		text.push('\n');
		Box::new(StrSource::new(text))
	}
	else if io::stdin().is_terminal()
	{
		Box::new(EditorSource::new(args.prompt.as_str(), !args.no_history))
	}
	else
	{
		Box::new(ReaderSource::new(io::stdin().lock()))
	}
}

fn run(args: Args) -> anyhow::Result<usize>
{
	let mut session = Session::new(source(&args));
	let errors = session.run(&mut io::stdout().lock())?;
	log::debug!("session ended with {} error(s)", errors);
	Ok(errors)
}

fn main()
{
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	match run(args)
	{
		Ok(errors) => std::process::exit(exit_status(errors)),
		Err(err) =>
		{
			eprintln!("Error: {:?}", err);
			std::process::exit(1);
		},
	}
}
