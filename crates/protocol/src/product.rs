//! Product records, media files, and the file-order payload.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Country, Subcategory, Unit};
use crate::lang::Lang;

/// A product as returned by the backend.
///
/// Localized text keeps the backend's snake_case keys; everything else is
/// camelCase. Embedded relation records are present only on detail
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub id: String,
	#[serde(rename = "name_uz")]
	pub name_uz: String,
	#[serde(rename = "name_en")]
	pub name_en: String,
	#[serde(rename = "name_ru")]
	pub name_ru: String,
	#[serde(rename = "name_kz")]
	pub name_kz: String,
	#[serde(rename = "description_uz", default)]
	pub description_uz: String,
	#[serde(rename = "description_en", default)]
	pub description_en: String,
	#[serde(rename = "description_ru", default)]
	pub description_ru: String,
	#[serde(rename = "description_kz", default)]
	pub description_kz: String,
	#[serde(rename = "structure_uz", default)]
	pub structure_uz: String,
	#[serde(rename = "structure_en", default)]
	pub structure_en: String,
	#[serde(rename = "structure_ru", default)]
	pub structure_ru: String,
	#[serde(rename = "structure_kz", default)]
	pub structure_kz: String,
	pub price: f64,
	pub quantity: i64,
	pub category_id: String,
	#[serde(default)]
	pub subcategory_id: String,
	#[serde(default)]
	pub country_id: Option<String>,
	#[serde(default)]
	pub unit_id: Option<String>,
	#[serde(default)]
	pub view_count: Option<u64>,
	#[serde(default)]
	pub is_deleted: Option<bool>,
	/// Media files in display order.
	#[serde(default)]
	pub files: Vec<ProductFile>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
	#[serde(default)]
	pub category: Option<Category>,
	#[serde(default)]
	pub subcategory: Option<Subcategory>,
	#[serde(default)]
	pub country: Option<Country>,
	#[serde(default)]
	pub unit: Option<Unit>,
}

impl Product {
	/// Display name in the given language.
	pub fn name(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.name_uz,
			Lang::En => &self.name_en,
			Lang::Ru => &self.name_ru,
			Lang::Kz => &self.name_kz,
		}
	}

	/// Description in the given language.
	pub fn description(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.description_uz,
			Lang::En => &self.description_en,
			Lang::Ru => &self.description_ru,
			Lang::Kz => &self.description_kz,
		}
	}

	/// Composition/structure text in the given language.
	pub fn structure(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.structure_uz,
			Lang::En => &self.structure_en,
			Lang::Ru => &self.structure_ru,
			Lang::Kz => &self.structure_kz,
		}
	}
}

/// Writable product fields, sent whole on both create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
	#[serde(rename = "name_uz")]
	pub name_uz: String,
	#[serde(rename = "name_en")]
	pub name_en: String,
	#[serde(rename = "name_ru")]
	pub name_ru: String,
	#[serde(rename = "name_kz")]
	pub name_kz: String,
	#[serde(rename = "description_uz", default)]
	pub description_uz: String,
	#[serde(rename = "description_en", default)]
	pub description_en: String,
	#[serde(rename = "description_ru", default)]
	pub description_ru: String,
	#[serde(rename = "description_kz", default)]
	pub description_kz: String,
	#[serde(rename = "structure_uz", default)]
	pub structure_uz: String,
	#[serde(rename = "structure_en", default)]
	pub structure_en: String,
	#[serde(rename = "structure_ru", default)]
	pub structure_ru: String,
	#[serde(rename = "structure_kz", default)]
	pub structure_kz: String,
	pub price: f64,
	#[serde(default)]
	pub quantity: i64,
	pub category_id: String,
	#[serde(default)]
	pub subcategory_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unit_id: Option<String>,
}

/// One media file attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFile {
	pub id: String,
	pub url: String,
	pub is_video: bool,
	pub product_id: String,
}

/// A file's position in the display sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOrder {
	pub file_id: String,
	pub order: usize,
}

/// Body of the order-persistence call: the full ordered file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOrderUpdate {
	pub files: Vec<FileOrder>,
}

/// Plain acknowledgement body (`{ "message": ... }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
	pub message: String,
}
