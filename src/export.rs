use crate::paths::TEMP_DIRECTORY;
use crate::project_data::Project;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExportOutput {
	Directory,
	TarGz,
	Zip,
}

impl FromStr for ExportOutput {
	type Err = &'static str;

	fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
		match s {
			"directory" => Ok(ExportOutput::Directory),
			"tar.gz" => Ok(ExportOutput::TarGz),
			"zip" => Ok(ExportOutput::Zip),
			_ => Err("Invalid output variant."),
		}
	}
}

pub struct ExportOptions<'a> {
	pub directory: &'a Path,
	pub extension_path: &'a Path,
	pub output: ExportOutput,
	pub project: &'a Project,
}

/// Stages the built module with its script-side module files under the
/// package name, then emits a directory or an archive.
pub fn export(options: &ExportOptions) -> Result<PathBuf> {
	let project = options.project;
	let package = &project.settings.package;

	let mut export_directory = PathBuf::from(options.directory);
	if export_directory.is_relative() {
		export_directory = project.directory.join(export_directory);
	}

	if export_directory.exists() {
		fs::remove_dir_all(&export_directory)
			.map_err(|err| Error::failed_to_remove_directory(&export_directory, err))?;
	}
	fs::create_dir_all(&export_directory)
		.map_err(|err| Error::failed_to_create_directory(&export_directory, err))?;

	// Directly use the final path if exporting as directory.
	let staging_directory = if options.output == ExportOutput::Directory {
		export_directory.clone()
	} else {
		TEMP_DIRECTORY.join("export")
	};
	let staging_named_directory = staging_directory.join(&package.name);

	if staging_named_directory.exists() {
		fs::remove_dir_all(&staging_named_directory)
			.map_err(|err| Error::failed_to_remove_directory(&staging_named_directory, err))?;
	}
	fs::create_dir_all(&staging_named_directory)
		.map_err(|err| Error::failed_to_create_directory(&staging_named_directory, err))?;

	let extension_filename = options
		.extension_path
		.file_name()
		.ok_or_else(|| Error::path_has_invalid_file_name(options.extension_path))?;
	let copy_to = staging_named_directory.join(extension_filename);
	fs::copy(options.extension_path, &copy_to)
		.map_err(|err| Error::failed_to_copy(options.extension_path, &copy_to, err))?;

	let module_directory = project.directory.join(&package.package_directory);
	for module in &package.modules {
		let from = module_directory.join(module);
		let to = staging_named_directory.join(module);
		fs::copy(&from, &to).map_err(|err| Error::failed_to_copy(&from, &to, err))?;
	}

	let output_path = match options.output {
		ExportOutput::Directory => {
			// Already done.
			staging_named_directory
		}

		ExportOutput::TarGz => {
			let tar_path = project.configuration.get_path("tar");

			let output_path = export_directory.join(format!("{}.tar.gz", package.name));

			let mut archiving = Command::new(&tar_path)
				.arg("-czf")
				.arg(&output_path)
				.arg(&package.name)
				.current_dir(&staging_directory)
				.spawn()
				.map_err(|err| Error::failed_to_execute(&tar_path, err))?;

			let status = archiving
				.wait()
				.map_err(|err| Error::failed_to_execute(&tar_path, err))?;
			if !status.success() {
				return Err(Error::execution_failed(&tar_path));
			}

			output_path
		}

		ExportOutput::Zip => {
			let zip_path = project.configuration.get_path("zip");

			let output_path = export_directory.join(format!("{}.zip", package.name));

			let mut archiving = Command::new(&zip_path)
				.arg("-r")
				.arg(&output_path)
				.arg(&package.name)
				.current_dir(&staging_directory)
				.spawn()
				.map_err(|err| Error::failed_to_execute(&zip_path, err))?;

			let status = archiving
				.wait()
				.map_err(|err| Error::failed_to_execute(&zip_path, err))?;
			if !status.success() {
				return Err(Error::execution_failed(&zip_path));
			}

			output_path
		}
	};

	Ok(output_path)
}
