//! Session lifecycle: validation on startup, login, logout, and forced
//! invalidation on credential rejection.
//!
//! The manager is the single writer of token state. Every mutation of the
//! shared [`TokenCell`] and the persisted store funnels through
//! [`login`](SessionManager::login), [`logout`](SessionManager::logout),
//! or [`on_unauthorized`](SessionManager::on_unauthorized); components
//! that hit a 401 propagate the classified error upward and the owning
//! shell routes it here.

use shelf_protocol::{LoginRequest, TokenClaims};
use tracing::{debug, info, warn};

use crate::api::CatalogApi;
use crate::error::Result;
use crate::store::{SessionStore, SessionStoreFile};
use crate::token::{TokenCell, decode_claims};

/// Identity derived from the current token.
///
/// Always re-derivable from the token; never edited independently of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
	pub admin_id: String,
	pub username: String,
	pub superadmin: bool,
}

impl Session {
	fn from_claims(claims: &TokenClaims) -> Self {
		Self {
			admin_id: claims.id.clone(),
			username: claims.username.clone(),
			superadmin: claims.is_superadmin,
		}
	}
}

/// Where the session lifecycle currently stands.
///
/// After [`SessionManager::validate_session`] returns, the state is
/// exactly one of `Authenticated` or `Unauthenticated`, never ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
	/// Startup: persisted state has not been examined yet.
	#[default]
	Unvalidated,
	Authenticated(Session),
	Unauthenticated,
}

impl SessionState {
	pub fn is_authenticated(&self) -> bool {
		matches!(self, SessionState::Authenticated(_))
	}
}

/// Owns the persisted session and the shared token cell.
#[derive(Debug)]
pub struct SessionManager {
	store: SessionStore,
	token: TokenCell,
	state: SessionState,
}

impl SessionManager {
	/// Creates a manager over the given store, sharing `token` with the
	/// API client.
	pub fn new(store: SessionStore, token: TokenCell) -> Self {
		Self { store, token, state: SessionState::Unvalidated }
	}

	/// Current lifecycle state.
	pub fn state(&self) -> &SessionState {
		&self.state
	}

	/// Identity of the authenticated admin, if any.
	pub fn session(&self) -> Option<&Session> {
		match &self.state {
			SessionState::Authenticated(session) => Some(session),
			_ => None,
		}
	}

	/// Examines persisted state and settles into `Authenticated` or
	/// `Unauthenticated`.
	///
	/// No persisted data at all leaves everything untouched. A restorable
	/// session requires the token *and* all three cached identity fields;
	/// anything partial, corrupt, or undecodable is cleared wholesale.
	/// Identity comes from the decoded claims, not the cached copies -
	/// those exist only to be checked for presence.
	pub fn validate_session(&mut self) -> Result<&SessionState> {
		let persisted = match self.store.load() {
			Ok(persisted) => persisted,
			Err(err) => {
				warn!(target = "shelf.session", error = %err, "session store unreadable; clearing");
				self.clear_session()?;
				return Ok(&self.state);
			}
		};

		if persisted.is_empty() {
			debug!(target = "shelf.session", "no persisted session");
			self.state = SessionState::Unauthenticated;
			return Ok(&self.state);
		}

		if !persisted.is_complete() {
			warn!(target = "shelf.session", "partial session state; clearing");
			self.clear_session()?;
			return Ok(&self.state);
		}

		let token = persisted.token.as_deref().unwrap_or_default();
		match decode_claims(token) {
			Ok(claims) => {
				self.token.set(token.to_string());
				let session = Session::from_claims(&claims);
				info!(
					target = "shelf.session",
					username = %session.username,
					superadmin = session.superadmin,
					"session restored"
				);
				self.state = SessionState::Authenticated(session);
			}
			Err(err) => {
				warn!(target = "shelf.session", error = %err, "persisted token undecodable; clearing");
				self.clear_session()?;
			}
		}

		Ok(&self.state)
	}

	/// Exchanges credentials for a token, derives identity from its
	/// claims, and persists both.
	///
	/// The decoded claims are the canonical identity source; no follow-up
	/// identity fetch is made. On any failure nothing changes: no token
	/// is stored and the state stays as it was.
	pub async fn login(
		&mut self,
		api: &dyn CatalogApi,
		username: &str,
		password: &str,
	) -> Result<Session> {
		let request = LoginRequest {
			username: username.to_string(),
			password: password.to_string(),
		};
		let response = api.login(&request).await?;
		let claims = decode_claims(&response.access_token)?;
		let session = Session::from_claims(&claims);

		self.store.save(&SessionStoreFile {
			token: Some(response.access_token.clone()),
			admin_id: Some(session.admin_id.clone()),
			username: Some(session.username.clone()),
			superadmin: Some(session.superadmin),
			..Default::default()
		})?;
		self.token.set(response.access_token);

		info!(
			target = "shelf.session",
			username = %session.username,
			superadmin = session.superadmin,
			"logged in"
		);
		self.state = SessionState::Authenticated(session.clone());
		Ok(session)
	}

	/// Clears the token and all persisted identity state. Idempotent.
	pub fn logout(&mut self) -> Result<()> {
		info!(target = "shelf.session", "logged out");
		self.clear_session()
	}

	/// Forced invalidation: the same clearing as [`logout`](Self::logout),
	/// reached when *any* request - from any component - came back 401.
	pub fn on_unauthorized(&mut self) -> Result<()> {
		warn!(target = "shelf.session", "session invalidated by unauthorized response");
		self.clear_session()
	}

	fn clear_session(&mut self) -> Result<()> {
		self.token.clear();
		self.store.clear()?;
		self.state = SessionState::Unauthenticated;
		Ok(())
	}
}
