//! Inspection CLI for auto splitter settings documents and widget streams.

use clap::{Parser, Subcommand};

mod cmd;

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "asr_settings")]
#[command(about = "Inspect and edit auto splitter settings")]
struct Cli {
	/// Enable debug logging on stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print a settings document header and its custom settings tree.
	Show(cmd::show::Args),
	/// Print the nested widget tree with resolved values.
	Tree(cmd::tree::Args),
	/// Rewrite one custom setting of a settings document.
	Set(cmd::set::Args),
	/// Report whether a rendered widget tree would be stale.
	Changed(cmd::changed::Args),
	/// Check that a settings document survives decode and re-encode.
	Roundtrip(cmd::roundtrip::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let result = match cli.command {
		Command::Show(args) => cmd::show::run(args),
		Command::Tree(args) => cmd::tree::run(args),
		Command::Set(args) => cmd::set::run(args),
		Command::Changed(args) => cmd::changed::run(args),
		Command::Roundtrip(args) => cmd::roundtrip::run(args),
	};

	if let Err(err) = result {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.with_writer(std::io::stderr)
		.finish();

	if tracing::subscriber::set_global_default(subscriber).is_err() {
		eprintln!("warning: tracing subscriber already installed");
	}
}
