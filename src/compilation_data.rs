use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Preprocessor macro passed to every compile job.
#[derive(Clone, Debug, Deserialize, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Define {
	pub name: String,
	#[serde(default)]
	pub value: Option<String>,
}

impl Define {
	pub fn new(name: &str, value: Option<&str>) -> Self {
		Define {
			name: name.to_string(),
			value: value.map(|value| value.to_string()),
		}
	}

	pub fn as_arg(&self) -> String {
		match &self.value {
			Some(value) if !value.is_empty() => format!("-D{}={}", self.name, value),
			_ => format!("-D{}", self.name),
		}
	}
}

#[derive(Default, Hash)]
pub struct Linking {
	pub objects: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_define_as_arg() {
		let define = Define::new("SQLITE_PTR_SIZE", Some("sizeof(long)"));
		assert_eq!(define.as_arg(), "-DSQLITE_PTR_SIZE=sizeof(long)");

		let define = Define::new("__UNIX__", None);
		assert_eq!(define.as_arg(), "-D__UNIX__");

		let define = Define::new("__HEADLESS__", Some(""));
		assert_eq!(define.as_arg(), "-D__HEADLESS__");
	}
}
