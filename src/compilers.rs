use crate::build::BuildOptions;
use crate::compilation_data::{Define, Linking};
use crate::parsers::cpp::{self, Include};
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Hash)]
pub struct CompileOptions<'a> {
	pub defines: &'a [Define],
	pub include_paths: &'a [PathBuf],
	pub path: &'a Path,
}

pub trait Compiler {
	fn compile(
		&self,
		build_options: &BuildOptions,
		options: &CompileOptions,
		linking: &mut Linking,
	) -> Result<()>;
}

/// Contents of the local headers a source names, in scan order, for cache
/// hashing. Quoted includes are looked up next to the source first, then
/// along the include paths; angled includes only along the include paths.
/// Transitive includes are not followed.
pub fn header_dependencies(
	source_path: &Path,
	contents: &str,
	include_paths: &[PathBuf],
) -> Vec<String> {
	let source_directory = source_path.parent();

	cpp::scan(contents)
		.iter()
		.filter_map(|include| match include {
			Include::Quoted(name) => source_directory
				.map(|directory| directory.join(name))
				.filter(|candidate| candidate.is_file())
				.or_else(|| locate(name, include_paths)),
			Include::Angled(name) => locate(name, include_paths),
		})
		.filter_map(|path| fs::read_to_string(path).ok())
		.collect()
}

fn locate(name: &str, include_paths: &[PathBuf]) -> Option<PathBuf> {
	include_paths
		.iter()
		.map(|directory| directory.join(name))
		.find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_header_dependencies_resolution_order() {
		let root = std::env::temp_dir()
			.join("hyphy-build-tests")
			.join("header-dependencies");
		if root.exists() {
			fs::remove_dir_all(&root).unwrap();
		}
		let sources = root.join("sources");
		let headers = root.join("headers");
		fs::create_dir_all(&sources).unwrap();
		fs::create_dir_all(&headers).unwrap();

		fs::write(sources.join("local.h"), "// next to the source").unwrap();
		fs::write(headers.join("local.h"), "// on the include path").unwrap();
		fs::write(headers.join("shared.h"), "// only on the include path").unwrap();

		let source_path = sources.join("main.cpp");
		let contents = "#include \"local.h\"\n#include \"shared.h\"\n#include <missing.h>\n";

		let dependencies =
			header_dependencies(&source_path, contents, &[headers.clone()]);

		assert_eq!(
			dependencies,
			vec![
				"// next to the source".to_string(),
				"// only on the include path".to_string(),
			]
		);
	}
}
