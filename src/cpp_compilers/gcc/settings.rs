use serde::{Deserialize, Serialize};
use std::hash::Hash;

#[derive(Debug, Default, Deserialize, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GccSettings {
	/// Replaces the default compile flags entirely when set.
	#[serde(default)]
	pub args: Option<Vec<String>>,
	#[serde(default)]
	pub link_args: Vec<String>,
}
