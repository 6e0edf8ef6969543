//! Command routing and the forced-invalidation funnel.

mod admins;
mod auth;
mod carousel;
mod categories;
mod dashboard;
mod products;
mod taxonomy;

use std::path::Path;

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use shelf::{ApiError, SaveError};

use crate::cli::Commands;
use crate::context::AppContext;

/// Restores any persisted session, runs the command, and routes a 401
/// from *any* request into forced session invalidation.
pub async fn dispatch(command: Commands, ctx: &mut AppContext) -> anyhow::Result<()> {
	ctx.session.validate_session()?;

	let result = route(command, ctx).await;
	if let Err(err) = &result {
		if is_unauthorized(err) {
			ctx.session.on_unauthorized()?;
		}
	}
	result
}

async fn route(command: Commands, ctx: &mut AppContext) -> anyhow::Result<()> {
	match command {
		Commands::Auth { action } => auth::run(action, ctx).await,
		Commands::Products { action } => products::run(action, ctx).await,
		Commands::Categories { action } => categories::run_categories(action, ctx).await,
		Commands::Subcategories { action } => categories::run_subcategories(action, ctx).await,
		Commands::Units { action } => taxonomy::run_units(action, ctx).await,
		Commands::Countries { action } => taxonomy::run_countries(action, ctx).await,
		Commands::Carousel { action } => carousel::run(action, ctx).await,
		Commands::Admins { action } => admins::run(action, ctx).await,
		Commands::Settings { action } => admins::run_settings(action, ctx).await,
		Commands::Dashboard => dashboard::summary(ctx).await,
		Commands::Currency => dashboard::currency(ctx).await,
	}
}

/// Whether a failure is, at its root, a credential rejection.
fn is_unauthorized(err: &anyhow::Error) -> bool {
	if let Some(save) = err.downcast_ref::<SaveError>() {
		return save.source.is_unauthorized();
	}
	err.downcast_ref::<ApiError>().is_some_and(ApiError::is_unauthorized)
}

/// Loads a JSON draft file into any deserializable payload.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}
