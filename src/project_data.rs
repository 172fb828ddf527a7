use crate::configuration::Configuration;
use crate::settings::Settings;
use crate::source_set;
use crate::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

pub struct Project {
	pub configuration: Configuration,
	pub development: bool,
	pub directory: PathBuf,
	pub settings: Settings,
}

impl Project {
	pub fn load(directory: &Path) -> Result<Self> {
		let configuration = Configuration::load()?;

		let current_directory = env::current_dir()
			.map_err(|_| Error::message("Failed to get the working directory."))?;
		let directory = source_set::normalize(&current_directory, directory);

		let settings = Settings::load(&directory)?;

		let development = settings.development.unwrap_or(false);

		Ok(Project {
			configuration,
			development,
			directory,
			settings,
		})
	}
}
