//! Taxonomy and storefront records: categories, subcategories, units,
//! countries, carousel media, and the exchange rate.

use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// A top-level category with localized text and a cover image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
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
	/// URL of the uploaded cover image.
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub created_at: Option<String>,
}

impl Category {
	pub fn name(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.name_uz,
			Lang::En => &self.name_en,
			Lang::Ru => &self.name_ru,
			Lang::Kz => &self.name_kz,
		}
	}

	pub fn description(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.description_uz,
			Lang::En => &self.description_en,
			Lang::Ru => &self.description_ru,
			Lang::Kz => &self.description_kz,
		}
	}
}

/// Writable category fields. The cover image travels separately as a
/// multipart file part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
	pub name_uz: String,
	pub name_en: String,
	pub name_ru: String,
	pub name_kz: String,
	#[serde(default)]
	pub description_uz: String,
	#[serde(default)]
	pub description_en: String,
	#[serde(default)]
	pub description_ru: String,
	#[serde(default)]
	pub description_kz: String,
}

impl CategoryDraft {
	/// The form fields as `(key, value)` pairs, in wire order.
	pub fn form_fields(&self) -> Vec<(&'static str, String)> {
		vec![
			("name_uz", self.name_uz.clone()),
			("name_en", self.name_en.clone()),
			("name_ru", self.name_ru.clone()),
			("name_kz", self.name_kz.clone()),
			("description_uz", self.description_uz.clone()),
			("description_en", self.description_en.clone()),
			("description_ru", self.description_ru.clone()),
			("description_kz", self.description_kz.clone()),
		]
	}
}

/// A subcategory nested under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
	pub id: String,
	#[serde(rename = "name_uz")]
	pub name_uz: String,
	#[serde(rename = "name_en")]
	pub name_en: String,
	#[serde(rename = "name_ru")]
	pub name_ru: String,
	#[serde(rename = "name_kz")]
	pub name_kz: String,
	pub category_id: String,
	#[serde(default)]
	pub created_at: Option<String>,
}

impl Subcategory {
	pub fn name(&self, lang: Lang) -> &str {
		match lang {
			Lang::Uz => &self.name_uz,
			Lang::En => &self.name_en,
			Lang::Ru => &self.name_ru,
			Lang::Kz => &self.name_kz,
		}
	}
}

/// Writable subcategory fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDraft {
	#[serde(rename = "name_uz")]
	pub name_uz: String,
	#[serde(rename = "name_en")]
	pub name_en: String,
	#[serde(rename = "name_ru")]
	pub name_ru: String,
	#[serde(rename = "name_kz")]
	pub name_kz: String,
	pub category_id: String,
}

/// A unit of measure (`kg`, `liter`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
	pub id: String,
	pub name: String,
}

/// A country of origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
	pub id: String,
	pub name: String,
}

/// Body for creating or renaming a unit or country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamePayload {
	pub name: String,
}

/// One image in the storefront carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselItem {
	pub id: String,
	/// URL of the uploaded image.
	pub file: String,
}

/// Current exchange rate for price display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Currency {
	pub buy: f64,
	pub sell: f64,
}
