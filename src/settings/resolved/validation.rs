use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.max_elements == 0 {
		return Err(ConfigError::invalid(
			"input.max_elements",
			config.max_elements.to_string(),
			sources.source_for_max_elements(),
			"must be at least 1",
		));
	}

	if config.max_dimension == 0 {
		return Err(ConfigError::invalid(
			"matrix.max_dimension",
			config.max_dimension.to_string(),
			sources.source_for_max_dimension(),
			"must be at least 1",
		));
	}

	Ok(())
}
