//! Persisted session state: the bearer token plus cached identity fields.
//!
//! The cached identity copies exist only to avoid a UI flash before
//! revalidation; once the token decodes they are never trusted over its
//! own claims. A session is restorable only when *all* fields are present
//! and the token decodes - partial or corrupt state is always invalid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

const SESSION_SCHEMA_VERSION: u32 = 1;

/// On-disk format for the persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStoreFile {
	pub schema: u32,
	#[serde(default)]
	pub token: Option<String>,
	#[serde(default)]
	pub admin_id: Option<String>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub superadmin: Option<bool>,
}

impl Default for SessionStoreFile {
	fn default() -> Self {
		Self {
			schema: SESSION_SCHEMA_VERSION,
			token: None,
			admin_id: None,
			username: None,
			superadmin: None,
		}
	}
}

impl SessionStoreFile {
	/// All four persisted fields are present.
	pub fn is_complete(&self) -> bool {
		self.token.is_some()
			&& self.admin_id.is_some()
			&& self.username.is_some()
			&& self.superadmin.is_some()
	}

	/// No persisted fields at all.
	pub fn is_empty(&self) -> bool {
		self.token.is_none()
			&& self.admin_id.is_none()
			&& self.username.is_none()
			&& self.superadmin.is_none()
	}
}

/// File-backed persistence for session state.
#[derive(Debug, Clone)]
pub struct SessionStore {
	path: PathBuf,
}

impl SessionStore {
	/// Creates a store at an explicit path.
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	/// Creates a store at the default per-user location.
	pub fn default_location() -> Self {
		Self { path: default_store_path() }
	}

	/// Path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Loads persisted state. A missing file is an empty session; a file
	/// that exists but does not parse is an error so the caller treats it
	/// as corrupt state to clear.
	pub fn load(&self) -> Result<SessionStoreFile> {
		match fs::read_to_string(&self.path) {
			Ok(content) => serde_json::from_str(&content)
				.map_err(|e| ApiError::Decode(format!("session file is corrupt: {e}"))),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				Ok(SessionStoreFile::default())
			}
			Err(err) => Err(err.into()),
		}
	}

	/// Persists session state, creating parent directories as needed.
	pub fn save(&self, file: &SessionStoreFile) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let json = serde_json::to_string_pretty(file)
			.map_err(|e| ApiError::Decode(format!("session state is not serializable: {e}")))?;
		fs::write(&self.path, json)?;
		Ok(())
	}

	/// Removes the backing file if present. Returns whether anything was
	/// removed; repeated calls are a no-op.
	pub fn clear(&self) -> Result<bool> {
		match fs::remove_file(&self.path) {
			Ok(()) => Ok(true),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
			Err(err) => Err(err.into()),
		}
	}
}

fn default_store_path() -> PathBuf {
	std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
		.unwrap_or_else(|| PathBuf::from("."))
		.join("shelf/session.json")
}
