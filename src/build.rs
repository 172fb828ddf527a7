use crate::compilation_data::{Define, Linking};
use crate::compilers::CompileOptions;
use crate::linkers::LinkOptions;
use crate::paths::BUILD_ROOT_DIRECTORY;
use crate::project_data::Project;
use crate::settings::PackageSettings;
use crate::source_set::{self, SourceSet};
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct SourcesAssembledEvent<'a> {
	pub paths: &'a [PathBuf],
}

pub struct ExtensionLinkedEvent {
	pub path: PathBuf,
}

impl ExtensionLinkedEvent {
	pub fn get_size(&self) -> Result<u64> {
		let size = fs::metadata(&self.path)
			.map_err(|err| Error::failed_to_get_metadata(&self.path, err))?
			.len();
		Ok(size)
	}
}

pub enum BuildEvent<'a> {
	ExtensionLinked(ExtensionLinkedEvent),
	SourcesAssembled(SourcesAssembledEvent<'a>),
}

pub struct BuildOptions<'a> {
	pub force: bool,
	pub project: &'a Project,
}

/// Runs the whole pipeline: assemble the source set, compile every source,
/// link the extension module. Returns the path of the linked module.
pub fn build(
	options: &BuildOptions,
	event_listener: &mut dyn FnMut(BuildEvent),
) -> Result<PathBuf> {
	let project = options.project;
	let settings = &project.settings;

	let source_set = SourceSet::assemble(
		&project.directory,
		&settings.source_directories,
		&settings.source_suffixes,
		&settings.extra_sources,
	)?;

	event_listener(BuildEvent::SourcesAssembled(SourcesAssembledEvent {
		paths: source_set.files(),
	}));

	// Include precedence follows the source directory order.
	let mut include_paths: Vec<PathBuf> = settings
		.source_directories
		.iter()
		.map(|directory| source_set::normalize(&project.directory, directory))
		.collect();
	include_paths.extend(
		settings
			.include_directories
			.iter()
			.map(|directory| source_set::normalize(&project.directory, directory)),
	);

	write_manifest(project, &source_set)?;

	let toolchain = settings.compiler.instantiate(project)?;

	let mut linking = Linking::default();
	for path in source_set.files() {
		toolchain.compile(
			options,
			&CompileOptions {
				defines: &settings.defines,
				include_paths: &include_paths,
				path,
			},
			&mut linking,
		)?;
	}

	let output_name = format!("{}.so", settings.extension_name);
	let path = toolchain.link(
		options,
		&LinkOptions {
			libraries: &settings.libraries,
			linking: &linking,
			output_name: &output_name,
		},
	)?;

	event_listener(BuildEvent::ExtensionLinked(ExtensionLinkedEvent {
		path: path.clone(),
	}));

	Ok(path)
}

pub fn build_duration(
	options: &BuildOptions,
	event_listener: &mut dyn FnMut(BuildEvent),
) -> Result<Duration> {
	let start = Instant::now();

	build(options, event_listener)?;

	let duration = start.elapsed();

	Ok(duration)
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct Manifest<'a> {
	defines: &'a [Define],
	extension_name: &'a str,
	libraries: &'a [String],
	package: &'a PackageSettings,
	sources: &'a [PathBuf],
}

/// Records what the last build fed to the toolchain.
fn write_manifest(project: &Project, source_set: &SourceSet) -> Result<()> {
	let settings = &project.settings;
	let manifest = Manifest {
		defines: &settings.defines,
		extension_name: &settings.extension_name,
		libraries: &settings.libraries,
		package: &settings.package,
		sources: source_set.files(),
	};

	let json = serde_json::to_string_pretty(&manifest)
		.map_err(|err| Error::message(format!("Failed to serialize the build manifest: {}", err)))?;

	let path = BUILD_ROOT_DIRECTORY.join("manifest.json");
	fs::write(&path, json).map_err(|err| Error::failed_to_write(&path, err))?;

	Ok(())
}
