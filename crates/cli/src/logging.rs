//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initializes the subscriber. Verbosity: `-v` info, `-vv` debug,
/// `-vvv` trace; `SHELF_LOG` overrides everything.
pub fn init(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
