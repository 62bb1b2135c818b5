use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) input_max_elements: Option<SettingSource>,
	pub(crate) matrix_max_dimension: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_max_elements(&self) -> SettingSource {
		self.input_max_elements
			.clone()
			.unwrap_or(SettingSource::ConfigKey("input.max_elements"))
	}

	pub(crate) fn source_for_max_dimension(&self) -> SettingSource {
		self.matrix_max_dimension
			.clone()
			.unwrap_or(SettingSource::ConfigKey("matrix.max_dimension"))
	}
}
