//! HTTP plumbing shared by every endpoint method.
//!
//! One place owns bearer-header attachment, the fixed request timeout,
//! and the mapping from HTTP responses and transport failures onto
//! [`ApiError`]. Endpoint methods stay one-liners on top of this.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
	/// Starts a request carrying the current bearer token, if one is held.
	pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let builder = self.http().request(method, format!("{}{}", self.base_url(), path));
		match self.token().get() {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		}
	}

	/// Starts a request that never carries credentials (the login call).
	pub(crate) fn request_unauthenticated(&self, method: Method, path: &str) -> RequestBuilder {
		self.http().request(method, format!("{}{}", self.base_url(), path))
	}

	pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		self.send_json(self.request(Method::GET, path)).await
	}

	pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T> {
		self.send_json(self.request(Method::POST, path).json(body)).await
	}

	pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T> {
		self.send_json(self.request(Method::PATCH, path).json(body)).await
	}

	/// Sends a DELETE and discards whatever body the backend returns.
	pub(crate) async fn delete(&self, path: &str) -> Result<()> {
		self.send_empty(self.request(Method::DELETE, path)).await
	}

	pub(crate) async fn send_multipart<T: DeserializeOwned>(
		&self,
		method: Method,
		path: &str,
		form: reqwest::multipart::Form,
	) -> Result<T> {
		self.send_json(self.request(method, path).multipart(form)).await
	}

	/// Sends a request and decodes a JSON success body.
	pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
		let response = self.send(builder).await?;
		response
			.json::<T>()
			.await
			.map_err(|e| ApiError::Decode(format!("unexpected response body: {e}")))
	}

	/// Sends a request, checking status but ignoring the success body.
	pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
		self.send(builder).await?;
		Ok(())
	}

	async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
		let response = builder.send().await.map_err(classify_transport)?;
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		// The error body is informative but optional; classification must
		// work from the status code alone.
		let body = response.json::<Value>().await.ok();
		let err = classify_response(status.as_u16(), body);
		debug!(target = "shelf.api", status = status.as_u16(), error = %err, "request failed");
		Err(err)
	}
}

/// Maps a non-success response onto the error taxonomy by status code.
pub(crate) fn classify_response(status: u16, body: Option<Value>) -> ApiError {
	let message = body
		.as_ref()
		.and_then(|b| b.get("message"))
		.and_then(message_text)
		.unwrap_or_else(|| format!("HTTP error {status}"));

	match status {
		401 => ApiError::Unauthorized { message },
		400 => match body.as_ref().and_then(|b| b.get("message")).and_then(message_list) {
			Some(messages) => ApiError::Validation { messages },
			None => ApiError::Http { status, message },
		},
		_ => ApiError::Http { status, message },
	}
}

/// Maps a transport-level failure (no response at all) onto the taxonomy.
pub(crate) fn classify_transport(err: reqwest::Error) -> ApiError {
	if err.is_timeout() {
		ApiError::Timeout
	} else {
		ApiError::Network(err.without_url().to_string())
	}
}

/// The backend's `message` field as display text: either a string or an
/// array of strings joined for the generic fallback.
fn message_text(message: &Value) -> Option<String> {
	match message {
		Value::String(s) => Some(s.clone()),
		Value::Array(_) => message_list(message).map(|m| m.join("; ")),
		_ => None,
	}
}

/// The backend's `message` field as structured validation messages.
fn message_list(message: &Value) -> Option<Vec<String>> {
	match message {
		Value::String(s) => Some(vec![s.clone()]),
		Value::Array(items) => Some(
			items
				.iter()
				.filter_map(|item| item.as_str().map(str::to_string))
				.collect(),
		),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn unauthorized_is_detected_by_status_not_message() {
		let err = classify_response(401, Some(json!({"message": "whatever wording"})));
		assert!(err.is_unauthorized());

		let bare = classify_response(401, None);
		assert!(bare.is_unauthorized());
	}

	#[test]
	fn bad_request_with_message_array_is_validation() {
		let err = classify_response(
			400,
			Some(json!({"message": ["name_uz must not be empty", "price must be positive"]})),
		);
		assert_eq!(
			err.validation_messages(),
			Some(
				&[
					"name_uz must not be empty".to_string(),
					"price must be positive".to_string()
				][..]
			)
		);
	}

	#[test]
	fn bad_request_with_message_string_is_validation() {
		let err = classify_response(400, Some(json!({"message": "categoryId is required"})));
		assert_eq!(err.validation_messages(), Some(&["categoryId is required".to_string()][..]));
	}

	#[test]
	fn bad_request_without_structured_payload_is_generic() {
		let err = classify_response(400, None);
		assert!(!err.is_validation());
		assert_eq!(err.status(), Some(400));
	}

	#[test]
	fn other_statuses_keep_the_server_message() {
		let err = classify_response(500, Some(json!({"message": "database unavailable"})));
		match err {
			ApiError::Http { status, message } => {
				assert_eq!(status, 500);
				assert_eq!(message, "database unavailable");
			}
			other => panic!("expected Http, got {other:?}"),
		}
	}

	#[test]
	fn missing_body_falls_back_to_generic_message() {
		let err = classify_response(502, None);
		match err {
			ApiError::Http { status, message } => {
				assert_eq!(status, 502);
				assert_eq!(message, "HTTP error 502");
			}
			other => panic!("expected Http, got {other:?}"),
		}
	}
}
