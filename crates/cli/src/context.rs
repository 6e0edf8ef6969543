//! Shared wiring for command execution.

use anyhow::{Context as _, bail};
use shelf::{ApiClient, ClientConfig, SessionManager, SessionStore, TokenCell};
use shelf_protocol::Lang;
use url::Url;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Everything a command needs: the API client (reading the shared token
/// cell) and the session manager (the only writer of it).
pub struct AppContext {
	pub api: ApiClient,
	pub session: SessionManager,
	pub format: OutputFormat,
	pub lang: Lang,
}

impl AppContext {
	pub fn new(cli: &Cli) -> anyhow::Result<Self> {
		let config = match &cli.base_url {
			Some(base_url) => ClientConfig::new(base_url.clone()),
			None => match ClientConfig::from_env() {
				Some(config) => config,
				None => bail!(
					"no backend configured; pass --base-url or set {}",
					ClientConfig::BASE_URL_ENV
				),
			},
		};
		Url::parse(&config.base_url)
			.with_context(|| format!("invalid base URL: {}", config.base_url))?;

		let token = TokenCell::new();
		let api = ApiClient::new(&config, token.clone())?;
		let store = match &cli.session_file {
			Some(path) => SessionStore::new(path.clone()),
			None => SessionStore::default_location(),
		};
		let session = SessionManager::new(store, token);

		Ok(Self { api, session, format: cli.format, lang: cli.lang })
	}
}
