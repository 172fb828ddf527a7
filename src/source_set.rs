use crate::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Ordered list of the source files fed to the toolchain.
///
/// Directory order is preserved because it drives include-path precedence.
/// Entries within a directory are sorted so the set does not depend on the
/// platform's enumeration order.
#[derive(Debug)]
pub struct SourceSet {
	files: Vec<PathBuf>,
}

impl SourceSet {
	/// Scans each directory in order, keeps regular files whose name ends
	/// with one of the suffixes, and appends the extra sources unfiltered.
	/// Fails on the first unlistable directory without a partial result.
	pub fn assemble(
		base: &Path,
		directories: &[PathBuf],
		suffixes: &[String],
		extra_sources: &[PathBuf],
	) -> Result<Self> {
		let mut files = Vec::new();

		for directory in directories {
			let directory = normalize(base, directory);
			let entries = fs::read_dir(&directory)
				.map_err(|err| Error::failed_to_read_directory(&directory, err))?;

			let mut matched = Vec::new();
			for entry in entries {
				let entry =
					entry.map_err(|err| Error::failed_to_read_directory(&directory, err))?;
				let file_type = entry
					.file_type()
					.map_err(|err| Error::failed_to_read_directory(&directory, err))?;
				if !file_type.is_file() {
					continue;
				}

				let name = entry.file_name();
				if matches_suffix(&name, suffixes) {
					matched.push(directory.join(&name));
				}
			}

			matched.sort();
			files.extend(matched);
		}

		for extra in extra_sources {
			files.push(normalize(base, extra));
		}

		Ok(SourceSet { files })
	}

	pub fn files(&self) -> &[PathBuf] {
		&self.files
	}
}

/// Case-sensitive match against the end of the file name, not the extension:
/// `x.c` matches suffix `c`, and so does `x.inc.c`.
fn matches_suffix(name: &OsStr, suffixes: &[String]) -> bool {
	match name.to_str() {
		Some(name) => suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())),
		None => false,
	}
}

/// Joins `path` onto `base` when relative, then resolves `.` and `..`
/// segments lexically, without consulting the filesystem.
pub fn normalize(base: &Path, path: &Path) -> PathBuf {
	let joined = if path.is_absolute() {
		path.to_path_buf()
	} else {
		base.join(path)
	};

	let mut normalized = PathBuf::new();
	for component in joined.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				let ends_with_normal = matches!(
					normalized.components().next_back(),
					Some(Component::Normal(_))
				);
				if ends_with_normal {
					normalized.pop();
				} else {
					// `..` cannot go above the root.
					let anchored = matches!(
						normalized.components().next_back(),
						Some(Component::RootDir) | Some(Component::Prefix(_))
					);
					if !anchored {
						normalized.push(Component::ParentDir.as_os_str());
					}
				}
			}
			component => normalized.push(component.as_os_str()),
		}
	}

	if normalized.as_os_str().is_empty() {
		normalized.push(Component::CurDir.as_os_str());
	}

	normalized
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::ErrorKind;

	fn fixture_directory(name: &str) -> PathBuf {
		let path = std::env::temp_dir().join("hyphy-build-tests").join(name);
		if path.exists() {
			fs::remove_dir_all(&path).unwrap();
		}
		fs::create_dir_all(&path).unwrap();
		path
	}

	fn touch(path: &Path) {
		fs::write(path, b"").unwrap();
	}

	#[test]
	fn test_normalize_resolves_relative_segments() {
		let base = Path::new("/work/Library");
		assert_eq!(
			normalize(base, Path::new("../Core/./parser.cpp")),
			PathBuf::from("/work/Core/parser.cpp")
		);
		assert_eq!(
			normalize(base, Path::new("/opt/../var/x")),
			PathBuf::from("/var/x")
		);
	}

	#[test]
	fn test_normalize_is_idempotent() {
		let base = Path::new("/work/Library");
		let once = normalize(base, Path::new("../../SQLite/trunk/btree.c"));
		assert!(once.is_absolute());
		assert_eq!(normalize(base, &once), once);
	}

	#[test]
	fn test_normalize_stops_at_root() {
		assert_eq!(
			normalize(Path::new("/"), Path::new("../..")),
			PathBuf::from("/")
		);
	}

	#[test]
	fn test_assemble_filters_and_appends_extras() {
		let root = fixture_directory("filters-and-extras");
		let a = root.join("a");
		let b = root.join("b");
		fs::create_dir_all(&a).unwrap();
		fs::create_dir_all(&b).unwrap();
		touch(&a.join("x.c"));
		touch(&a.join("y.h"));
		touch(&b.join("z.c"));
		touch(&root.join("m1"));
		touch(&root.join("m2"));

		let set = SourceSet::assemble(
			&root,
			&[PathBuf::from("a"), PathBuf::from("b")],
			&["c".to_string()],
			&[PathBuf::from("m1"), PathBuf::from("m2")],
		)
		.unwrap();

		assert_eq!(
			set.files(),
			&[
				a.join("x.c"),
				b.join("z.c"),
				root.join("m1"),
				root.join("m2"),
			][..]
		);
		assert_eq!(set.files().len(), 4);
	}

	#[test]
	fn test_assemble_sorts_entries_within_directory() {
		let root = fixture_directory("sorted-entries");
		let sources = root.join("sources");
		fs::create_dir_all(&sources).unwrap();
		touch(&sources.join("c.cpp"));
		touch(&sources.join("a.cpp"));
		touch(&sources.join("b.cpp"));

		let set = SourceSet::assemble(
			&root,
			&[PathBuf::from("sources")],
			&["cpp".to_string()],
			&[],
		)
		.unwrap();

		assert_eq!(
			set.files(),
			&[
				sources.join("a.cpp"),
				sources.join("b.cpp"),
				sources.join("c.cpp"),
			][..]
		);
	}

	#[test]
	fn test_assemble_preserves_directory_order() {
		let root = fixture_directory("directory-order");
		let first = root.join("first");
		let second = root.join("second");
		fs::create_dir_all(&first).unwrap();
		fs::create_dir_all(&second).unwrap();
		touch(&first.join("z.c"));
		touch(&second.join("a.c"));

		let set = SourceSet::assemble(
			&root,
			&[PathBuf::from("second"), PathBuf::from("first")],
			&["c".to_string()],
			&[],
		)
		.unwrap();

		assert_eq!(set.files(), &[second.join("a.c"), first.join("z.c")][..]);
	}

	#[test]
	fn test_assemble_keeps_duplicates() {
		let root = fixture_directory("duplicates");
		let a = root.join("a");
		fs::create_dir_all(&a).unwrap();
		touch(&a.join("same.c"));

		let set = SourceSet::assemble(
			&root,
			&[PathBuf::from("a"), PathBuf::from("b/../a")],
			&["c".to_string()],
			&[],
		)
		.unwrap();

		assert_eq!(set.files(), &[a.join("same.c"), a.join("same.c")][..]);
	}

	#[test]
	fn test_assemble_suffix_match_is_case_sensitive() {
		let root = fixture_directory("case-sensitive");
		let sources = root.join("sources");
		fs::create_dir_all(&sources).unwrap();
		touch(&sources.join("lower.c"));
		touch(&sources.join("upper.C"));

		let set = SourceSet::assemble(
			&root,
			&[PathBuf::from("sources")],
			&["c".to_string()],
			&[],
		)
		.unwrap();

		assert_eq!(set.files(), &[sources.join("lower.c")][..]);
	}

	#[test]
	fn test_assemble_fails_on_missing_directory() {
		let root = fixture_directory("missing-directory");

		let result = SourceSet::assemble(
			&root,
			&[PathBuf::from("does-not-exist")],
			&["c".to_string()],
			&[],
		);

		match result {
			Err(err) => assert!(matches!(err.kind, ErrorKind::FailedToReadDirectory(_))),
			Ok(_) => panic!("assembling a missing directory must fail"),
		}
	}
}
