use crate::build::BuildOptions;
use crate::compilation_data::Linking;
use crate::Result;
use std::path::PathBuf;

#[derive(Hash)]
pub struct LinkOptions<'a> {
	pub libraries: &'a [String],
	pub linking: &'a Linking,
	pub output_name: &'a str,
}

pub trait Linker {
	fn link(&self, build_options: &BuildOptions, options: &LinkOptions) -> Result<PathBuf>;
}
