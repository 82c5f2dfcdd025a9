#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "logshape", about = "Encode and render structured log values")]
struct Cli {
	/// Print internal diagnostics to stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render JSON documents as human or JSON log text.
	Render(cmd::render::Args),
	/// Emit one log entry.
	Log(cmd::log::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> logshape::fields::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Render(args) => cmd::render::run(args),
		Commands::Log(args) => cmd::log::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "logshape=trace" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
