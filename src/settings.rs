use crate::compilation_data::Define;
use crate::cpp_compilers;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};

fn default_source_directories() -> Vec<PathBuf> {
	vec![
		"../Core",
		"../NewerFunctionality",
		"../../SQLite/trunk",
		"Link",
	]
	.into_iter()
	.map(PathBuf::from)
	.collect()
}

fn default_source_suffixes() -> Vec<String> {
	vec!["cpp", "c"].into_iter().map(|s| s.to_string()).collect()
}

fn default_extra_sources() -> Vec<PathBuf> {
	vec![
		"../Mains/hyphyunixutils.cpp",
		"SWIGWrappers/THyPhy_python.cpp",
	]
	.into_iter()
	.map(PathBuf::from)
	.collect()
}

fn default_defines() -> Vec<Define> {
	vec![
		Define::new("SQLITE_PTR_SIZE", Some("sizeof(long)")),
		Define::new("__UNIX__", None),
		Define::new("__MP__", None),
		Define::new("__MP2__", None),
		Define::new("__HEADLESS__", None),
	]
}

fn default_libraries() -> Vec<String> {
	vec!["pthread", "ssl", "crypto", "curl"]
		.into_iter()
		.map(|s| s.to_string())
		.collect()
}

fn default_extension_name() -> String {
	"_HyPhy".to_string()
}

#[derive(Debug, Deserialize, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
	#[serde(default)]
	pub compiler: cpp_compilers::Settings,
	#[serde(default = "default_defines")]
	pub defines: Vec<Define>,
	pub development: Option<bool>,
	#[serde(default = "default_extension_name")]
	pub extension_name: String,
	#[serde(default = "default_extra_sources")]
	pub extra_sources: Vec<PathBuf>,
	/// Appended after the source directories, which always come first.
	#[serde(default)]
	pub include_directories: Vec<PathBuf>,
	#[serde(default = "default_libraries")]
	pub libraries: Vec<String>,
	#[serde(default)]
	pub package: PackageSettings,
	#[serde(default = "default_source_directories")]
	pub source_directories: Vec<PathBuf>,
	#[serde(default = "default_source_suffixes")]
	pub source_suffixes: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			compiler: cpp_compilers::Settings::default(),
			defines: default_defines(),
			development: None,
			extension_name: default_extension_name(),
			extra_sources: default_extra_sources(),
			include_directories: Vec::new(),
			libraries: default_libraries(),
			package: PackageSettings::default(),
			source_directories: default_source_directories(),
			source_suffixes: default_source_suffixes(),
		}
	}
}

impl Settings {
	pub fn load(project_directory: &Path) -> Result<Self> {
		let path = project_directory.join("hyphy-build.yml");

		if !path.exists() {
			return Ok(Settings::default());
		}

		let contents =
			fs::read_to_string(&path).map_err(|err| Error::failed_to_read(&path, err))?;
		let settings: Settings = serde_yaml::from_str(&contents)
			.map_err(|err| Error::failed_to_deserialize(&contents, err))?;
		Ok(settings)
	}
}

fn default_package_name() -> String {
	"HyPhy".to_string()
}

fn default_package_version() -> String {
	"0.1".to_string()
}

fn default_package_description() -> String {
	"HyPhy package interface library".to_string()
}

fn default_package_author() -> String {
	"Sergei L Kosakovsky Pond".to_string()
}

fn default_package_author_email() -> String {
	"spond@ucsd.edu".to_string()
}

fn default_package_url() -> String {
	"http://www.hyphy.org/".to_string()
}

fn default_package_directory() -> PathBuf {
	PathBuf::from("LibraryModules/Python")
}

fn default_package_packages() -> Vec<String> {
	vec!["HyPhy", "_HyPhy"]
		.into_iter()
		.map(|s| s.to_string())
		.collect()
}

fn default_package_modules() -> Vec<String> {
	vec!["HyPhy.py".to_string()]
}

#[derive(Debug, Deserialize, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageSettings {
	#[serde(default = "default_package_author")]
	pub author: String,
	#[serde(default = "default_package_author_email")]
	pub author_email: String,
	#[serde(default = "default_package_description")]
	pub description: String,
	/// Script-side module files, relative to the package directory.
	#[serde(default = "default_package_modules")]
	pub modules: Vec<String>,
	#[serde(default = "default_package_name")]
	pub name: String,
	#[serde(default = "default_package_directory")]
	pub package_directory: PathBuf,
	#[serde(default = "default_package_packages")]
	pub packages: Vec<String>,
	#[serde(default = "default_package_url")]
	pub url: String,
	#[serde(default = "default_package_version")]
	pub version: String,
}

impl Default for PackageSettings {
	fn default() -> Self {
		PackageSettings {
			author: default_package_author(),
			author_email: default_package_author_email(),
			description: default_package_description(),
			modules: default_package_modules(),
			name: default_package_name(),
			package_directory: default_package_directory(),
			packages: default_package_packages(),
			url: default_package_url(),
			version: default_package_version(),
		}
	}
}
