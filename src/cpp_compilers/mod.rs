pub mod clang;
pub mod gcc;
mod settings;

use crate::compilers::Compiler;
use crate::linkers::Linker;
pub use settings::Settings;

/// A driver able to both compile translation units and link the extension
/// module.
pub trait Toolchain: Compiler + Linker {}
