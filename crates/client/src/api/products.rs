//! Product endpoints beyond the save-workflow seam.

use shelf_protocol::Product;

use super::{ApiClient, routes};
use crate::error::Result;

impl ApiClient {
	/// Fetches one product with its files and embedded relations.
	pub async fn get_product(&self, id: &str) -> Result<Product> {
		self.get_json(&routes::product(id)).await
	}

	/// Lists products belonging to one category.
	pub async fn get_products_by_category(&self, category_id: &str) -> Result<Vec<Product>> {
		self.get_json(&routes::products_by_category(category_id)).await
	}

	/// Soft-deletes a product.
	pub async fn delete_product(&self, id: &str) -> Result<()> {
		self.delete(&routes::product(id)).await
	}

	/// Detaches and deletes one media file from a product.
	pub async fn remove_product_file(&self, product_id: &str, file_id: &str) -> Result<()> {
		self.delete(&routes::product_file(product_id, file_id)).await
	}
}
