use crate::build::{self, BuildEvent, BuildOptions};
use crate::export::{self, ExportOptions, ExportOutput};
use crate::project_data::Project;
use crate::Result;
use std::path::Path;

pub struct Options<'a> {
	pub export_directory: &'a Path,
	pub force: bool,
	pub output: ExportOutput,
	pub project_directory: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let project = Project::load(options.project_directory)?;

	let mut event_listener = |_event: BuildEvent| {};

	let extension_path = build::build(
		&BuildOptions {
			force: options.force,
			project: &project,
		},
		&mut event_listener,
	)?;

	let path = export::export(&ExportOptions {
		directory: options.export_directory,
		extension_path: &extension_path,
		output: options.output,
		project: &project,
	})?;

	println!("Exported to {:?}.", path);
	Ok(())
}
