//! Error taxonomy for API calls and session handling.
//!
//! Call sites route on the variant, never on message text: a form catches
//! [`ApiError::Validation`] for field-level display, the command shell
//! funnels [`ApiError::Unauthorized`] into forced session invalidation,
//! and timeout/network failures keep their distinct user-facing wording.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Classified failure of an API call or session operation.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Credential missing, expired, or rejected (HTTP 401). Always routed
	/// to forced session invalidation, whichever call produced it.
	#[error("session expired: {message}")]
	Unauthorized { message: String },

	/// Structured field errors from the backend (HTTP 400). Recoverable
	/// locally; never triggers logout.
	#[error("validation failed: {}", messages.join("; "))]
	Validation { messages: Vec<String> },

	/// The fixed request time budget elapsed without a response.
	#[error("request timed out")]
	Timeout,

	/// No response at all: DNS, connect, or transport failure.
	#[error("cannot reach server: {0}")]
	Network(String),

	/// Any other HTTP failure, with the server-provided message when one
	/// was present.
	#[error("HTTP {status}: {message}")]
	Http { status: u16, message: String },

	/// A response body that did not match the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(String),

	/// A bearer token that could not be decoded. Fatal to the current
	/// session: a corrupt token is never partially trusted.
	#[error("failed to decode token: {0}")]
	TokenDecode(String),

	/// A request that is malformed before it ever reaches the wire.
	#[error("invalid request: {0}")]
	InvalidRequest(String),

	/// Session store I/O failure.
	#[error("session store: {0}")]
	Store(#[from] std::io::Error),
}

impl ApiError {
	/// HTTP status for errors that originated as a response, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Unauthorized { .. } => Some(401),
			ApiError::Validation { .. } => Some(400),
			ApiError::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True for credential rejection; the caller must invalidate the
	/// session and send the user back to login.
	pub fn is_unauthorized(&self) -> bool {
		matches!(self, ApiError::Unauthorized { .. })
	}

	/// True for structured field errors a form can render inline.
	pub fn is_validation(&self) -> bool {
		matches!(self, ApiError::Validation { .. })
	}

	/// True when the request ran out of its time budget.
	pub fn is_timeout(&self) -> bool {
		matches!(self, ApiError::Timeout)
	}

	/// Field-level messages for a validation failure.
	pub fn validation_messages(&self) -> Option<&[String]> {
		match self {
			ApiError::Validation { messages } => Some(messages),
			_ => None,
		}
	}
}
