//! In-memory backend for exercising the session and save workflows
//! without a server. Records every call and lets tests inject failures.

// Each integration test binary compiles its own copy; not every test
// uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use shelf::error::{ApiError, Result};
use shelf::{CatalogApi, SessionManager, SessionStore, TokenCell};
use shelf_protocol::{
	ApiMessage, Category, FileOrderUpdate, LoginRequest, LoginResponse, Product, ProductDraft,
	ProductFile, Subcategory,
};

/// Builds a structurally valid three-segment token around the claims.
pub fn make_token(id: &str, username: &str, superadmin: bool) -> String {
	let header = encode_segment(br#"{"alg":"HS256","typ":"JWT"}"#);
	let payload = format!(
		r#"{{"id":"{id}","username":"{username}","isSuperadmin":{superadmin},"iat":1700000000,"exp":1700086400}}"#
	);
	format!("{header}.{}.test-signature", encode_segment(payload.as_bytes()))
}

fn encode_segment(bytes: &[u8]) -> String {
	STANDARD.encode(bytes).replace('+', "-").replace('/', "_").replace('=', "")
}

/// A session manager wired to a temp-dir store, plus the token cell it
/// shares with request issuers.
pub fn session_fixture(dir: &tempfile::TempDir) -> (SessionManager, TokenCell) {
	let token = TokenCell::new();
	let store = SessionStore::new(dir.path().join("session.json"));
	(SessionManager::new(store, token.clone()), token)
}

/// A minimal draft with the required fields filled.
pub fn draft(name: &str) -> ProductDraft {
	ProductDraft {
		name_uz: name.to_string(),
		name_en: name.to_string(),
		name_ru: name.to_string(),
		name_kz: name.to_string(),
		price: 10.0,
		quantity: 5,
		category_id: "c1".into(),
		subcategory_id: "s1".into(),
		..Default::default()
	}
}

/// A full product record suitable for seeding, with no files attached.
pub fn draft_product(id: &str) -> Product {
	product_from_draft(id, &draft("Seeded"))
}

#[derive(Default)]
struct FakeState {
	login_token: Option<String>,
	products: Vec<Product>,
	categories: Vec<Category>,
	subcategories: Vec<Subcategory>,
	next_product: u64,
	next_file: u64,
	create_calls: u32,
	update_calls: u32,
	upload_names: Vec<String>,
	order_payloads: Vec<(String, FileOrderUpdate)>,
	fail_create: Option<Vec<String>>,
	fail_upload_named: Option<String>,
	fail_order: bool,
}

/// In-memory [`CatalogApi`] with a controller-style surface: seed state,
/// inject failures, then inspect what was sent.
#[derive(Default)]
pub struct FakeCatalog {
	state: Mutex<FakeState>,
}

impl FakeCatalog {
	pub fn new() -> Self {
		let fake = Self::default();
		{
			let mut state = fake.state.lock().unwrap();
			state.next_file = 1;
			state.next_product = 1;
		}
		fake
	}

	/// Makes login succeed with the given token.
	pub fn accept_login(&self, token: &str) {
		self.state.lock().unwrap().login_token = Some(token.to_string());
	}

	/// Seeds a product as already existing server-side.
	pub fn seed_product(&self, product: Product) {
		self.state.lock().unwrap().products.push(product);
	}

	/// Makes the next file upload receive this numeric id.
	pub fn set_next_file_id(&self, n: u64) {
		self.state.lock().unwrap().next_file = n;
	}

	/// Fails product creation with a structured validation payload.
	pub fn fail_create_with_validation(&self, messages: &[&str]) {
		self.state.lock().unwrap().fail_create =
			Some(messages.iter().map(|m| m.to_string()).collect());
	}

	/// Fails the next upload whose file name matches (single-shot).
	pub fn fail_upload_named(&self, file_name: &str) {
		self.state.lock().unwrap().fail_upload_named = Some(file_name.to_string());
	}

	/// Fails the order-persistence call.
	pub fn fail_order(&self) {
		self.state.lock().unwrap().fail_order = true;
	}

	pub fn create_calls(&self) -> u32 {
		self.state.lock().unwrap().create_calls
	}

	pub fn update_calls(&self) -> u32 {
		self.state.lock().unwrap().update_calls
	}

	pub fn uploaded_file_names(&self) -> Vec<String> {
		self.state.lock().unwrap().upload_names.clone()
	}

	/// Every `(product_id, payload)` the order endpoint received.
	pub fn order_payloads(&self) -> Vec<(String, FileOrderUpdate)> {
		self.state.lock().unwrap().order_payloads.clone()
	}

	pub fn product_count(&self) -> usize {
		self.state.lock().unwrap().products.len()
	}
}

fn product_from_draft(id: &str, draft: &ProductDraft) -> Product {
	Product {
		id: id.to_string(),
		name_uz: draft.name_uz.clone(),
		name_en: draft.name_en.clone(),
		name_ru: draft.name_ru.clone(),
		name_kz: draft.name_kz.clone(),
		description_uz: draft.description_uz.clone(),
		description_en: draft.description_en.clone(),
		description_ru: draft.description_ru.clone(),
		description_kz: draft.description_kz.clone(),
		structure_uz: draft.structure_uz.clone(),
		structure_en: draft.structure_en.clone(),
		structure_ru: draft.structure_ru.clone(),
		structure_kz: draft.structure_kz.clone(),
		price: draft.price,
		quantity: draft.quantity,
		category_id: draft.category_id.clone(),
		subcategory_id: draft.subcategory_id.clone(),
		country_id: draft.country_id.clone(),
		unit_id: draft.unit_id.clone(),
		view_count: None,
		is_deleted: None,
		files: Vec::new(),
		created_at: None,
		updated_at: None,
		category: None,
		subcategory: None,
		country: None,
		unit: None,
	}
}

#[async_trait]
impl CatalogApi for FakeCatalog {
	async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
		let state = self.state.lock().unwrap();
		match &state.login_token {
			Some(token) => Ok(LoginResponse { access_token: token.clone() }),
			None => Err(ApiError::Unauthorized { message: "invalid credentials".into() }),
		}
	}

	async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
		let mut state = self.state.lock().unwrap();
		state.create_calls += 1;
		if let Some(messages) = state.fail_create.take() {
			return Err(ApiError::Validation { messages });
		}
		let id = format!("p{}", state.next_product);
		state.next_product += 1;
		let product = product_from_draft(&id, draft);
		state.products.push(product.clone());
		Ok(product)
	}

	async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Product> {
		let mut state = self.state.lock().unwrap();
		state.update_calls += 1;
		let Some(slot) = state.products.iter_mut().find(|p| p.id == id) else {
			return Err(ApiError::Http { status: 404, message: format!("product {id} not found") });
		};
		let files = slot.files.clone();
		*slot = product_from_draft(id, draft);
		slot.files = files;
		Ok(slot.clone())
	}

	async fn add_product_file(
		&self,
		product_id: &str,
		file_name: &str,
		_content_type: &str,
		_bytes: Vec<u8>,
		is_video: bool,
	) -> Result<ProductFile> {
		let mut state = self.state.lock().unwrap();
		if state.fail_upload_named.as_deref() == Some(file_name) {
			state.fail_upload_named = None;
			return Err(ApiError::Http { status: 500, message: "upload failed".into() });
		}
		let file = ProductFile {
			id: format!("f{}", state.next_file),
			url: format!("https://cdn.test/{product_id}/{file_name}"),
			is_video,
			product_id: product_id.to_string(),
		};
		state.next_file += 1;
		state.upload_names.push(file_name.to_string());
		if let Some(slot) = state.products.iter_mut().find(|p| p.id == product_id) {
			slot.files.push(file.clone());
		}
		Ok(file)
	}

	async fn update_file_order(
		&self,
		product_id: &str,
		order: &FileOrderUpdate,
	) -> Result<ApiMessage> {
		let mut state = self.state.lock().unwrap();
		if state.fail_order {
			return Err(ApiError::Timeout);
		}
		state.order_payloads.push((product_id.to_string(), order.clone()));
		Ok(ApiMessage { message: "order updated".into() })
	}

	async fn get_products(&self) -> Result<Vec<Product>> {
		Ok(self.state.lock().unwrap().products.clone())
	}

	async fn get_categories(&self) -> Result<Vec<Category>> {
		Ok(self.state.lock().unwrap().categories.clone())
	}

	async fn get_subcategories(&self) -> Result<Vec<Subcategory>> {
		Ok(self.state.lock().unwrap().subcategories.clone())
	}
}

/// A [`HashMap`] of file id by uploaded file name, for correlating order
/// payload entries back to their source uploads.
pub fn file_ids_by_name(products: &[Product]) -> HashMap<String, String> {
	products
		.iter()
		.flat_map(|p| &p.files)
		.map(|f| {
			let name = f.url.rsplit('/').next().unwrap_or_default().to_string();
			(name, f.id.clone())
		})
		.collect()
}
