#[macro_use]
extern crate lazy_static;

mod build;
mod build_cache;
mod cc;
mod commands {
	pub mod build;
	pub mod clean;
	pub mod export;
	pub mod sources;
	pub mod watch;
}
mod compilation_data;
mod compilers;
mod configuration;
mod cpp_compilers;
mod errors;
mod export;
mod linkers;
mod parsers;
mod paths;
mod project_data;
mod settings;
mod source_set;

pub use crate::errors::{Error, Result};

use crate::export::ExportOutput;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Command {
	/// Builds the extension module (default).
	Build {
		#[structopt(short, long)]
		force: bool,
	},
	/// Removes build artifacts, build cache.
	Clean,
	/// Builds and packages the extension module.
	Export {
		#[structopt(short, long, default_value = "export")]
		directory: PathBuf,
		#[structopt(short, long)]
		force: bool,
		#[structopt(short, long, default_value = "directory")]
		output: ExportOutput,
	},
	/// Prints the assembled source set without building.
	Sources {
		#[structopt(long)]
		json: bool,
	},
	/// Rebuilds whenever the source directories change.
	Watch {
		#[structopt(short, long, default_value = "0.3")]
		debounce_delay: f32,
	},
}

impl Default for Command {
	fn default() -> Self {
		Command::Build { force: false }
	}
}

#[derive(Debug, StructOpt)]
#[structopt(about, author)]
struct Args {
	#[structopt(subcommand)]
	command: Option<Command>,

	#[structopt(short, long, default_value = ".")]
	project_directory: PathBuf,
}

fn main() -> Result<()> {
	let args = Args::from_args();

	let command = args.command.unwrap_or_else(Command::default);
	match command {
		Command::Build { force } => commands::build::execute(&commands::build::Options {
			force,
			project_directory: &args.project_directory,
		}),

		Command::Clean => commands::clean::execute(),

		Command::Export {
			directory,
			force,
			output,
		} => commands::export::execute(&commands::export::Options {
			export_directory: &directory,
			force,
			output,
			project_directory: &args.project_directory,
		}),

		Command::Sources { json } => commands::sources::execute(&commands::sources::Options {
			json,
			project_directory: &args.project_directory,
		}),

		Command::Watch { debounce_delay } => {
			commands::watch::execute(&commands::watch::Options {
				debounce_delay: Duration::from_secs_f32(debounce_delay),
				project_directory: &args.project_directory,
			})
		}
	}
}
