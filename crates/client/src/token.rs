//! Bearer token decoding and the shared token cell.
//!
//! The token is a three-part dot-separated credential. Only the payload is
//! decoded client-side; signature verification is the backend's job on
//! every request. The decoded claims are used for display and routing
//! only, never as an authorization decision.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use parking_lot::RwLock;
use shelf_protocol::TokenClaims;

use crate::error::{ApiError, Result};

/// Decodes the claims carried in a bearer token's payload segment.
///
/// Fails if the token does not have exactly three segments, the payload is
/// not valid base64url-encoded JSON, or the required `id` and `username`
/// claims are absent. A failure here is never silently defaulted: a token
/// that cannot be decoded cannot be partially trusted.
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
	let segments: Vec<&str> = token.split('.').collect();
	if segments.len() != 3 {
		return Err(ApiError::TokenDecode(format!(
			"expected 3 segments, found {}",
			segments.len()
		)));
	}

	let payload = decode_base64url(segments[1])?;
	let claims: TokenClaims = serde_json::from_slice(&payload)
		.map_err(|e| ApiError::TokenDecode(format!("payload is not valid claims JSON: {e}")))?;

	if claims.id.is_empty() || claims.username.is_empty() {
		return Err(ApiError::TokenDecode("missing required id/username claims".into()));
	}

	Ok(claims)
}

/// Translates base64url to standard base64, restores `=` padding to a
/// multiple-of-4 length, and decodes.
fn decode_base64url(segment: &str) -> Result<Vec<u8>> {
	let mut translated = segment.replace('-', "+").replace('_', "/");
	while translated.len() % 4 != 0 {
		translated.push('=');
	}
	STANDARD
		.decode(&translated)
		.map_err(|e| ApiError::TokenDecode(format!("payload is not valid base64: {e}")))
}

/// Process-wide slot for the current bearer token.
///
/// Every outgoing authenticated request reads it; only the session
/// manager's operations (login, logout, forced invalidation) write it.
/// The write surface is crate-private so no other component can mutate
/// token state ad hoc.
#[derive(Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
	/// Creates an empty cell.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current token, if a session is active.
	pub fn get(&self) -> Option<String> {
		self.0.read().clone()
	}

	/// Whether a token is currently held.
	pub fn is_present(&self) -> bool {
		self.0.read().is_some()
	}

	pub(crate) fn set(&self, token: String) {
		*self.0.write() = Some(token);
	}

	pub(crate) fn clear(&self) {
		*self.0.write() = None;
	}
}

impl std::fmt::Debug for TokenCell {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Never print the credential itself.
		f.write_str(if self.is_present() { "TokenCell(set)" } else { "TokenCell(empty)" })
	}
}
