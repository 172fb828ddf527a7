use crate::configuration::Configuration;
use crate::{Error, Result};
use encoding::all::UTF_8;
use encoding::{DecoderTrap, Encoding};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Hash)]
pub struct CommandGeneratorInputs<'a> {
	pub driver_path: &'a PathBuf,
	pub version: &'a String,
}

/// Locates a compiler driver and stamps its identity, so cached objects are
/// invalidated when the toolchain changes underneath the tool.
pub struct CommandGenerator {
	driver_path: PathBuf,
	version: String,
}

impl CommandGenerator {
	pub fn new(
		configuration: &Configuration,
		configuration_key: &str,
		default_driver: &str,
	) -> Result<Self> {
		let driver_path = configuration
			.paths
			.get(configuration_key)
			.cloned()
			.unwrap_or_else(|| PathBuf::from(default_driver));

		let probe = Command::new(&driver_path)
			.arg("--version")
			.output()
			.map_err(|err| Error::failed_to_execute(&driver_path, err))?;
		if !probe.status.success() {
			return Err(Error::execution_failed(&driver_path));
		}

		let text = UTF_8
			.decode(&probe.stdout, DecoderTrap::Ignore)
			.map_err(|err| Error::failed_to_convert_utf8(&probe.stdout, err))?;

		lazy_static! {
			static ref VERSION: Regex = Regex::new(r"\d+\.\d+(\.\d+)?").unwrap();
		}

		let version = VERSION
			.find(&text)
			.map(|found| found.as_str().to_string())
			.ok_or_else(|| Error::failed_to_parse(&text))?;

		Ok(CommandGenerator {
			driver_path,
			version,
		})
	}

	pub fn driver_path(&self) -> &Path {
		&self.driver_path
	}

	pub fn get_inputs(&self) -> CommandGeneratorInputs {
		CommandGeneratorInputs {
			driver_path: &self.driver_path,
			version: &self.version,
		}
	}

	pub fn command(&self) -> Command {
		Command::new(&self.driver_path)
	}
}
