use super::{clang, gcc, Toolchain};
use crate::project_data::Project;
use crate::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Hash)]
#[serde(rename_all = "kebab-case", tag = "tool")]
pub enum Settings {
	Clang(clang::ClangSettings),
	Gcc(gcc::GccSettings),
}

impl Settings {
	pub fn instantiate<'a>(&'a self, project: &'a Project) -> Result<Box<dyn Toolchain + 'a>> {
		let instance: Box<dyn Toolchain + 'a> = match self {
			Settings::Clang(settings) => {
				Box::new(clang::ClangToolchain::new(project, settings)?)
			}
			Settings::Gcc(settings) => Box::new(gcc::GccToolchain::new(project, settings)?),
		};
		Ok(instance)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Settings::Gcc(gcc::GccSettings::default())
	}
}
