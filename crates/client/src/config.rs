//! Client configuration: base URL and the fixed request time budget.

use std::time::Duration;

/// Where the backend lives and how long any single request may take.
///
/// The timeout applies uniformly to every request; there is no automatic
/// retry anywhere in this crate. Retrying is the caller's decision.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: String,
	pub timeout: Duration,
}

impl ClientConfig {
	/// Server-configured request budget used unless overridden.
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

	/// Environment variable consulted by [`ClientConfig::from_env`].
	pub const BASE_URL_ENV: &'static str = "SHELF_BASE_URL";

	/// Creates a config for the given backend with the default timeout.
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url, timeout: Self::DEFAULT_TIMEOUT }
	}

	/// Reads the base URL from `SHELF_BASE_URL`, if set.
	pub fn from_env() -> Option<Self> {
		std::env::var(Self::BASE_URL_ENV).ok().filter(|v| !v.is_empty()).map(Self::new)
	}

	/// Overrides the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_slashes_are_stripped() {
		let config = ClientConfig::new("http://localhost:3000//");
		assert_eq!(config.base_url, "http://localhost:3000");
	}

	#[test]
	fn default_timeout_is_ten_seconds() {
		let config = ClientConfig::new("http://localhost:3000");
		assert_eq!(config.timeout, Duration::from_secs(10));
	}
}
