use crate::paths::BUILD_CACHE_DIRECTORY;
use crate::{Error, Result};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Maps a hashed set of build inputs to its cache directory, creating the
/// directory on first use.
pub fn directory_for(inputs: &impl Hash) -> Result<PathBuf> {
	let mut hasher = DefaultHasher::new();
	inputs.hash(&mut hasher);
	let path = BUILD_CACHE_DIRECTORY.join(format!("{:x}", hasher.finish()));
	fs::create_dir_all(&path).map_err(|err| Error::failed_to_create_directory(&path, err))?;
	Ok(path)
}
