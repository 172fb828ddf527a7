mod settings;

pub use self::settings::GccSettings;
use super::Toolchain;
use crate::build::BuildOptions;
use crate::build_cache;
use crate::cc;
use crate::compilation_data::Linking;
use crate::compilers::{self, CompileOptions, Compiler};
use crate::linkers::{LinkOptions, Linker};
use crate::paths::BUILD_ROOT_DIRECTORY;
use crate::project_data::Project;
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;

pub struct GccToolchain<'a> {
	settings: &'a GccSettings,

	args: Vec<String>,
	command_generator: cc::CommandGenerator,
}

impl<'a> GccToolchain<'a> {
	pub fn new(project: &'a Project, settings: &'a GccSettings) -> Result<Self> {
		let args = settings.args.clone().unwrap_or_else(|| {
			if project.development {
				vec!["-g", "-O0", "-fsigned-char", "-fpermissive", "-fPIC"]
			} else {
				vec!["-w", "-fsigned-char", "-O3", "-fpermissive", "-fPIC"]
			}
			.into_iter()
			.map(|s| s.to_string())
			.collect()
		});
		let command_generator =
			cc::CommandGenerator::new(&project.configuration, "gcc", "g++")?;

		Ok(GccToolchain {
			settings,

			args,
			command_generator,
		})
	}
}

impl<'a> Compiler for GccToolchain<'a> {
	fn compile(
		&self,
		build_options: &BuildOptions,
		options: &CompileOptions,
		linking: &mut Linking,
	) -> Result<()> {
		let output_filename = format!(
			"{}.o",
			options
				.path
				.file_stem()
				.ok_or_else(|| Error::path_has_invalid_file_name(options.path))?
				.to_string_lossy()
		);

		let contents = fs::read_to_string(options.path)
			.map_err(|err| Error::failed_to_read(options.path, err))?;
		let dependencies =
			compilers::header_dependencies(options.path, &contents, options.include_paths);

		#[derive(Hash)]
		struct Inputs<'a> {
			args: &'a Vec<String>,
			command_generator: cc::CommandGeneratorInputs<'a>,
			contents: &'a str,
			dependencies: &'a Vec<String>,
			options: &'a CompileOptions<'a>,
			settings: &'a GccSettings,
		}

		let inputs = Inputs {
			args: &self.args,
			command_generator: self.command_generator.get_inputs(),
			contents: &contents,
			dependencies: &dependencies,
			options,
			settings: self.settings,
		};
		let build_cache_directory = build_cache::directory_for(&inputs)?;
		let build_cache_path = build_cache_directory.join(&output_filename);

		linking.objects.push(build_cache_path.clone());

		if !build_options.force && build_cache_path.exists() {
			return Ok(());
		}

		let build_directory = BUILD_ROOT_DIRECTORY.join("cpp-compilers").join("gcc");
		fs::create_dir_all(&build_directory)
			.map_err(|err| Error::failed_to_create_directory(&build_directory, err))?;

		let mut compilation = self
			.command_generator
			.command()
			.arg("-c")
			.args(&self.args)
			.args(options.defines.iter().map(|define| define.as_arg()))
			.args(
				options
					.include_paths
					.iter()
					.map(|path| format!("-I{}", path.to_string_lossy())),
			)
			.arg("-o")
			.arg("file.o")
			.arg(options.path)
			.current_dir(&build_directory)
			.spawn()
			.map_err(|err| {
				Error::failed_to_execute(self.command_generator.driver_path(), err)
			})?;

		let status = compilation.wait().map_err(|err| {
			Error::failed_to_execute(self.command_generator.driver_path(), err)
		})?;
		if !status.success() {
			return Err(Error::execution_failed(self.command_generator.driver_path()));
		}

		let copy_from = build_directory.join("file.o");
		fs::copy(&copy_from, &build_cache_path)
			.map_err(|err| Error::failed_to_copy(&copy_from, &build_cache_path, err))?;

		Ok(())
	}
}

impl<'a> Linker for GccToolchain<'a> {
	fn link(&self, build_options: &BuildOptions, options: &LinkOptions) -> Result<PathBuf> {
		#[derive(Hash)]
		struct Inputs<'a> {
			command_generator: cc::CommandGeneratorInputs<'a>,
			options: &'a LinkOptions<'a>,
			settings: &'a GccSettings,
		}

		let inputs = Inputs {
			command_generator: self.command_generator.get_inputs(),
			options,
			settings: self.settings,
		};
		let build_cache_directory = build_cache::directory_for(&inputs)?;
		let build_cache_path = build_cache_directory.join(options.output_name);

		if !build_options.force && build_cache_path.exists() {
			return Ok(build_cache_path);
		}

		let build_directory = BUILD_ROOT_DIRECTORY.join("linkers").join("gcc");
		fs::create_dir_all(&build_directory)
			.map_err(|err| Error::failed_to_create_directory(&build_directory, err))?;

		let mut linking = self
			.command_generator
			.command()
			.arg("-shared")
			.arg("-o")
			.arg(options.output_name)
			.args(&options.linking.objects)
			.args(&self.settings.link_args)
			.args(
				options
					.libraries
					.iter()
					.map(|library| format!("-l{}", library)),
			)
			.current_dir(&build_directory)
			.spawn()
			.map_err(|err| {
				Error::failed_to_execute(self.command_generator.driver_path(), err)
			})?;

		let status = linking.wait().map_err(|err| {
			Error::failed_to_execute(self.command_generator.driver_path(), err)
		})?;
		if !status.success() {
			return Err(Error::execution_failed(self.command_generator.driver_path()));
		}

		let copy_from = build_directory.join(options.output_name);
		fs::copy(&copy_from, &build_cache_path)
			.map_err(|err| Error::failed_to_copy(&copy_from, &build_cache_path, err))?;

		Ok(build_cache_path)
	}
}

impl Toolchain for GccToolchain<'_> {}
