use crate::project_data::Project;
use crate::source_set::SourceSet;
use crate::{Error, Result};
use std::path::Path;

pub struct Options<'a> {
	pub json: bool,
	pub project_directory: &'a Path,
}

/// Prints the assembled, ordered source set without building anything.
pub fn execute(options: &Options) -> Result<()> {
	let project = Project::load(options.project_directory)?;
	let settings = &project.settings;

	let source_set = SourceSet::assemble(
		&project.directory,
		&settings.source_directories,
		&settings.source_suffixes,
		&settings.extra_sources,
	)?;

	if options.json {
		let json = serde_json::to_string_pretty(source_set.files()).map_err(|err| {
			Error::message(format!("Failed to serialize the source set: {}", err))
		})?;
		println!("{}", json);
	} else {
		for path in source_set.files() {
			println!("{}", path.display());
		}
	}

	Ok(())
}
