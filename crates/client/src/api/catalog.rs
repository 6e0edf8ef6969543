//! Taxonomy and storefront endpoints: categories, subcategories, units,
//! countries, carousel media, and the exchange rate.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use shelf_protocol::{
	CarouselItem, Category, CategoryDraft, Country, Currency, NamePayload, Subcategory,
	SubcategoryDraft, Unit,
};

use super::{ApiClient, routes};
use crate::error::{ApiError, Result};

/// An image payload attached to a multipart create/update call.
#[derive(Debug, Clone)]
pub struct ImageUpload {
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl ImageUpload {
	fn into_part(self) -> Result<Part> {
		Part::bytes(self.bytes)
			.file_name(self.file_name)
			.mime_str(&self.content_type)
			.map_err(|e| ApiError::InvalidRequest(format!("invalid content type: {e}")))
	}
}

fn category_form(draft: &CategoryDraft, image: Option<ImageUpload>) -> Result<Form> {
	let mut form = Form::new();
	for (key, value) in draft.form_fields() {
		form = form.text(key, value);
	}
	if let Some(image) = image {
		form = form.part("image", image.into_part()?);
	}
	Ok(form)
}

impl ApiClient {
	/// Creates a category; localized fields and the optional cover image
	/// travel as one multipart form.
	pub async fn create_category(
		&self,
		draft: &CategoryDraft,
		image: Option<ImageUpload>,
	) -> Result<Category> {
		self.send_multipart(Method::POST, routes::CATEGORIES, category_form(draft, image)?)
			.await
	}

	pub async fn update_category(
		&self,
		id: &str,
		draft: &CategoryDraft,
		image: Option<ImageUpload>,
	) -> Result<Category> {
		self.send_multipart(Method::PATCH, &routes::category(id), category_form(draft, image)?)
			.await
	}

	pub async fn delete_category(&self, id: &str) -> Result<()> {
		self.delete(&routes::category(id)).await
	}

	pub async fn create_subcategory(&self, draft: &SubcategoryDraft) -> Result<Subcategory> {
		self.post_json(routes::SUBCATEGORIES, draft).await
	}

	pub async fn update_subcategory(&self, id: &str, draft: &SubcategoryDraft) -> Result<Subcategory> {
		self.patch_json(&routes::subcategory(id), draft).await
	}

	pub async fn delete_subcategory(&self, id: &str) -> Result<()> {
		self.delete(&routes::subcategory(id)).await
	}

	pub async fn get_units(&self) -> Result<Vec<Unit>> {
		self.get_json(routes::UNITS).await
	}

	pub async fn create_unit(&self, name: &str) -> Result<Unit> {
		self.post_json(routes::UNITS, &NamePayload { name: name.to_string() }).await
	}

	pub async fn update_unit(&self, id: &str, name: &str) -> Result<Unit> {
		self.patch_json(&routes::unit(id), &NamePayload { name: name.to_string() }).await
	}

	pub async fn delete_unit(&self, id: &str) -> Result<()> {
		self.delete(&routes::unit(id)).await
	}

	pub async fn get_countries(&self) -> Result<Vec<Country>> {
		self.get_json(routes::COUNTRIES).await
	}

	pub async fn create_country(&self, name: &str) -> Result<Country> {
		self.post_json(routes::COUNTRIES, &NamePayload { name: name.to_string() }).await
	}

	pub async fn update_country(&self, id: &str, name: &str) -> Result<Country> {
		self.patch_json(&routes::country(id), &NamePayload { name: name.to_string() }).await
	}

	pub async fn delete_country(&self, id: &str) -> Result<()> {
		self.delete(&routes::country(id)).await
	}

	pub async fn get_carousel_items(&self) -> Result<Vec<CarouselItem>> {
		self.get_json(routes::CAROUSEL).await
	}

	/// Uploads one carousel image.
	pub async fn add_carousel_image(&self, image: ImageUpload) -> Result<CarouselItem> {
		let form = Form::new().part("file", image.into_part()?);
		self.send_multipart(Method::POST, routes::CAROUSEL, form).await
	}

	pub async fn delete_carousel_item(&self, id: &str) -> Result<()> {
		self.delete(&routes::carousel_item(id)).await
	}

	/// Current USD exchange rate used for price display.
	pub async fn get_currency(&self) -> Result<Currency> {
		self.get_json(routes::CURRENCY).await
	}
}
