//! The REST surface: [`ApiClient`] and the [`CatalogApi`] backend seam.
//!
//! `CatalogApi` covers exactly the operations the session manager and the
//! product-save orchestrator depend on, so both can run against an
//! in-memory backend in tests. Everything else the console needs (units,
//! countries, carousel, admin management, settings) lives as inherent
//! methods on [`ApiClient`].

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use shelf_protocol::{
	ApiMessage, Category, FileOrderUpdate, LoginRequest, LoginResponse, Product, ProductDraft,
	ProductFile, Subcategory,
};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::token::TokenCell;

mod admins;
mod catalog;
mod products;
pub mod routes;

pub use catalog::ImageUpload;

/// Typed client for the admin backend.
///
/// Holds a read handle on the token cell; it never writes token state.
/// Mutation is the session manager's job alone.
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
	token: TokenCell,
}

impl ApiClient {
	/// Builds a client with the config's fixed per-request timeout.
	pub fn new(config: &ClientConfig, token: TokenCell) -> Result<Self> {
		let http = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.map_err(|e| ApiError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;
		Ok(Self { http, base_url: config.base_url.clone(), token })
	}

	/// Base URL requests are issued against.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub(crate) fn http(&self) -> &reqwest::Client {
		&self.http
	}

	pub(crate) fn token(&self) -> &TokenCell {
		&self.token
	}
}

/// The backend operations the session and save workflows are built on.
#[async_trait]
pub trait CatalogApi: Send + Sync {
	/// Exchanges credentials for a bearer token. Carries no credentials
	/// itself.
	async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

	async fn create_product(&self, draft: &ProductDraft) -> Result<Product>;

	async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Product>;

	/// Uploads one media file for a product. One call per file.
	async fn add_product_file(
		&self,
		product_id: &str,
		file_name: &str,
		content_type: &str,
		bytes: Vec<u8>,
		is_video: bool,
	) -> Result<ProductFile>;

	/// Persists the full display order of a product's files in one call.
	async fn update_file_order(
		&self,
		product_id: &str,
		order: &FileOrderUpdate,
	) -> Result<ApiMessage>;

	async fn get_products(&self) -> Result<Vec<Product>>;

	async fn get_categories(&self) -> Result<Vec<Category>>;

	async fn get_subcategories(&self) -> Result<Vec<Subcategory>>;
}

#[async_trait]
impl CatalogApi for ApiClient {
	async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
		debug!(target = "shelf.api", username = %request.username, "logging in");
		self.send_json(
			self.request_unauthenticated(Method::POST, routes::ADMIN_LOGIN).json(request),
		)
		.await
	}

	async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
		self.post_json(routes::PRODUCTS, draft).await
	}

	async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Product> {
		self.patch_json(&routes::product(id), draft).await
	}

	async fn add_product_file(
		&self,
		product_id: &str,
		file_name: &str,
		content_type: &str,
		bytes: Vec<u8>,
		is_video: bool,
	) -> Result<ProductFile> {
		let part = Part::bytes(bytes)
			.file_name(file_name.to_string())
			.mime_str(content_type)
			.map_err(|e| ApiError::InvalidRequest(format!("invalid content type: {e}")))?;
		let form = Form::new().part("file", part);
		self.send_multipart(Method::POST, &routes::product_files(product_id, is_video), form)
			.await
	}

	async fn update_file_order(
		&self,
		product_id: &str,
		order: &FileOrderUpdate,
	) -> Result<ApiMessage> {
		self.patch_json(&routes::product_file_order(product_id), order).await
	}

	async fn get_products(&self) -> Result<Vec<Product>> {
		self.get_json(routes::PRODUCTS).await
	}

	async fn get_categories(&self) -> Result<Vec<Category>> {
		self.get_json(routes::CATEGORIES).await
	}

	async fn get_subcategories(&self) -> Result<Vec<Subcategory>> {
		self.get_json(routes::SUBCATEGORIES).await
	}
}
