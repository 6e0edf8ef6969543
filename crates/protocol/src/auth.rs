//! Login exchange and token payload shapes.

use serde::{Deserialize, Serialize};

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
	pub username: String,
	pub password: String,
}

/// Successful login response. The token is the only thing the backend
/// returns; identity is decoded from it client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	pub access_token: String,
}

/// Claims carried in the token payload.
///
/// `id` and `username` are required; a payload missing either must be
/// rejected as a decode failure rather than defaulted. The privilege flag
/// is embedded so no follow-up identity fetch is needed after login - a
/// promotion or demotion is invisible until the token is reissued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
	pub id: String,
	pub username: String,
	#[serde(default)]
	pub is_superadmin: bool,
	/// Issued-at (Unix timestamp, seconds).
	#[serde(default)]
	pub iat: i64,
	/// Expiry (Unix timestamp, seconds). The backend enforces it; the
	/// client only displays identity derived from the claims.
	#[serde(default)]
	pub exp: i64,
}
