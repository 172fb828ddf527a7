use crate::build::{self, BuildEvent, BuildOptions};
use crate::project_data::Project;
use crate::source_set;
use crate::{Error, Result};
use notify::{DebouncedEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

pub struct Options<'a> {
	pub debounce_delay: Duration,
	pub project_directory: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let (tx, rx) = channel();
	let mut watcher: RecommendedWatcher = Watcher::new(tx, options.debounce_delay)
		.map_err(|err| Error::failed_to_watch(options.project_directory, err))?;

	{
		let project = Project::load(options.project_directory)?;
		for directory in &project.settings.source_directories {
			let directory = source_set::normalize(&project.directory, directory);
			watcher
				.watch(&directory, RecursiveMode::NonRecursive)
				.map_err(|err| Error::failed_to_watch(&directory, err))?;
		}
		// Settings changes retrigger too.
		watcher
			.watch(&project.directory, RecursiveMode::NonRecursive)
			.map_err(|err| Error::failed_to_watch(&project.directory, err))?;
	}

	rebuild(options.project_directory);

	loop {
		match rx.recv() {
			Ok(event) => match event {
				DebouncedEvent::Create(_)
				| DebouncedEvent::Remove(_)
				| DebouncedEvent::Rename(_, _)
				| DebouncedEvent::Rescan
				| DebouncedEvent::Write(_) => {
					rebuild(options.project_directory);
				}
				_ => {}
			},
			Err(err) => {
				return Err(Error::message(format!("Error while watching: {}", err)));
			}
		}
	}
}

/// The project is reloaded on every pass, so edits to `hyphy-build.yml`
/// take effect without restarting the watch.
fn rebuild(project_directory: &Path) {
	let result = Project::load(project_directory).and_then(|project| {
		let mut event_listener = |event: BuildEvent| {
			if let BuildEvent::ExtensionLinked(event) = event {
				println!("Extension linked: {:?}", event.path);
			}
		};

		build::build(
			&BuildOptions {
				force: false,
				project: &project,
			},
			&mut event_listener,
		)
	});

	match result {
		Ok(_) => println!("Build succeeded."),
		Err(err) => println!("Build failed: {}", err),
	}
}
