//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::process;

use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unitydoc::{DocError, DocLookup, LookupConfig, Renderer};

const EXAMPLES: &str = "\
Examples:
  unitydoc Transform
  unitydoc Rigidbody AddForce
  unitydoc CinemachineCamera   # package docs
  unitydoc --search Input";

#[derive(Parser)]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
/// Parsed command-line options for the unitydoc CLI.
struct Cli {
	/// Class to look up, e.g. `Transform`
	#[arg(value_name = "CLASS")]
	class: Option<String>,

	/// Member of the class to look up, e.g. `AddForce`
	#[arg(value_name = "MEMBER")]
	member: Option<String>,

	/// Search core and package doc names for a term
	#[arg(short = 's', long, value_name = "TERM", num_args = 0..=1, conflicts_with_all = ["class", "member"])]
	search: Option<Option<String>>,

	/// Increase log verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

fn init_tracing(verbose: u8) {
	let filter = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
		.with_writer(std::io::stderr)
		.init();
}

fn should_color_output(no_color: bool) -> bool {
	if no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stdout().is_terminal()
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(e) = run(cli) {
		eprintln!("Error: {e}");
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	if cli.class.is_none() && cli.search.is_none() {
		Cli::command().print_help()?;
		println!();
		return Ok(());
	}

	let renderer = Renderer::new().with_color(should_color_output(cli.no_color));
	let lookup = DocLookup::resolve(LookupConfig::from_env())?.with_renderer(renderer);
	debug!(doc_root = %lookup.doc_root().display(), project_root = ?lookup.project_root(), "roots resolved");

	if let Some(term) = cli.search {
		let term = term.ok_or(DocError::MissingSearchTerm)?;
		let results = lookup.search(&term)?;
		print!("{}", lookup.render_search(&term, &results));
		return Ok(());
	}

	let Some(class) = cli.class else {
		return Ok(());
	};
	let outcome = lookup.lookup(&class, cli.member.as_deref());
	if !outcome.found {
		return Err(DocError::NotFound { name: class }.into());
	}

	print!("{}", outcome.rendered);
	Ok(())
}
