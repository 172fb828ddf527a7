use crate::build::{self, BuildEvent, BuildOptions};
use crate::project_data::Project;
use crate::Result;
use std::path::Path;

pub struct Options<'a> {
	pub force: bool,
	pub project_directory: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let project = Project::load(options.project_directory)?;

	let mut event_listener = |event: BuildEvent| match event {
		BuildEvent::SourcesAssembled(event) => {
			println!("Assembled {} source files.", event.paths.len());
		}

		BuildEvent::ExtensionLinked(event) => match event.get_size() {
			Ok(size) => {
				println!("Extension linked:");
				println!("  Path: {:?}", event.path);
				println!("  Size: {}", size);
			}
			Err(_err) => {
				println!("Unexpected error while getting size.");
			}
		},
	};

	let duration = build::build_duration(
		&BuildOptions {
			force: options.force,
			project: &project,
		},
		&mut event_listener,
	)?;

	println!("Build duration: {:?}.", duration);
	Ok(())
}
