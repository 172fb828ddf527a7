use crate::paths::{BUILD_CACHE_DIRECTORY, BUILD_ROOT_DIRECTORY};
use crate::{Error, Result};
use std::fs;

pub fn execute() -> Result<()> {
	for directory in &[&*BUILD_CACHE_DIRECTORY, &*BUILD_ROOT_DIRECTORY] {
		if directory.exists() {
			fs::remove_dir_all(directory)
				.map_err(|err| Error::failed_to_remove_directory(*directory, err))?;
		}
	}
	Ok(())
}
