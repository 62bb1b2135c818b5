//! Logger setup for the command-line front end.
//!
//! Logs go to stderr through `env_logger` so that stdout only carries results.
//! `COURSEWORK_LOG` takes precedence over the verbosity chosen on the command
//! line.

use log::LevelFilter;

pub const LOG_ENV: &str = "COURSEWORK_LOG";

/// Map a `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. Calling this more than once is harmless.
pub fn initialize(verbosity: u8) {
	let default_filter = level_for(verbosity).to_string().to_lowercase();
	let _ = env_logger::Builder::new()
		.filter_level(level_for(verbosity))
		.parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
		.format_timestamp(None)
		.try_init();
}
