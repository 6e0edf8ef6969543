//! The product save workflow: metadata upsert, concurrent media uploads,
//! order persistence, and refresh.
//!
//! New files have no server identifier until they are uploaded, yet the
//! user has already interleaved them with existing files in a chosen
//! display order. The orchestrator reconciles that by tagging every
//! pending upload with the temporary identifier of the card it belongs
//! to, pairing upload responses back by that tag rather than by array
//! position, and resolving each card to a server identifier before the
//! single order-persistence call.
//!
//! Phases run strictly in sequence - order persistence needs identifiers
//! produced by the uploads, and the uploads need the product identifier
//! produced by the upsert. Nothing here retries and nothing rolls back:
//! a failure after the upsert leaves the product record in place, and the
//! error carries its identifier so the caller can resume by saving again
//! as an edit.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::try_join_all;
use shelf_protocol::{
	Category, FileOrder, FileOrderUpdate, Product, ProductDraft, ProductFile, Subcategory,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::CatalogApi;
use crate::error::ApiError;

/// Prefix marking a client-generated identifier that must never reach the
/// backend as a file reference.
pub const TEMP_ID_PREFIX: &str = "new-";

/// Generator for temporary card identifiers.
#[derive(Debug, Default)]
pub struct TempIdGen(AtomicU64);

impl TempIdGen {
	pub fn new() -> Self {
		Self::default()
	}

	/// Next unique identifier, `new-1`, `new-2`, ...
	pub fn next_id(&self) -> String {
		let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
		format!("{TEMP_ID_PREFIX}{n}")
	}
}

/// One media item in display position: either already on the server or
/// pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCard {
	/// Server identifier for existing files, temporary identifier for
	/// pending ones.
	pub id: String,
	/// Server URL for existing files; a local preview location for
	/// pending ones.
	pub url: String,
	/// Display label.
	pub name: String,
	pub is_video: bool,
	pub is_existing: bool,
}

impl FileCard {
	/// Card for a file already attached to the product.
	pub fn existing(file: &ProductFile) -> Self {
		let name = file
			.url
			.rsplit('/')
			.next()
			.filter(|segment| !segment.is_empty())
			.map(str::to_string)
			.unwrap_or_else(|| if file.is_video { "video".into() } else { "image".into() });
		Self {
			id: file.id.clone(),
			url: file.url.clone(),
			name,
			is_video: file.is_video,
			is_existing: true,
		}
	}

	/// Card for a file the user just attached, not yet uploaded.
	pub fn pending(id: String, name: impl Into<String>, content_type: &str, url: impl Into<String>) -> Self {
		Self {
			id,
			url: url.into(),
			name: name.into(),
			is_video: content_type.starts_with("video/"),
			is_existing: false,
		}
	}

	pub fn is_pending(&self) -> bool {
		!self.is_existing
	}
}

/// Raw payload for one pending upload, tagged with the temporary
/// identifier of the card it belongs to.
#[derive(Debug, Clone)]
pub struct NewUpload {
	/// Temporary identifier of the matching pending card.
	pub card_id: String,
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl NewUpload {
	/// Video/image flag derived from the MIME type.
	pub fn is_video(&self) -> bool {
		self.content_type.starts_with("video/")
	}
}

/// Everything one save operation needs.
#[derive(Debug)]
pub struct SaveRequest {
	/// Present when editing; absent when creating.
	pub product_id: Option<String>,
	pub draft: ProductDraft,
	/// The full card sequence - existing and pending interleaved - in the
	/// user's chosen display order.
	pub cards: Vec<FileCard>,
	/// Payloads for every pending card, matched by temporary identifier.
	pub uploads: Vec<NewUpload>,
}

/// Server truth fetched after a successful save.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
	pub products: Vec<Product>,
	pub categories: Vec<Category>,
	pub subcategories: Vec<Subcategory>,
}

/// Result of a completed save.
#[derive(Debug)]
pub struct SaveOutcome {
	/// The upserted product as the backend confirmed it.
	pub product: Product,
	pub files_uploaded: usize,
	/// Fresh catalog state superseding all client-side cards.
	pub snapshot: CatalogSnapshot,
}

/// A save failure, carrying the product identifier once the upsert phase
/// has succeeded so the caller can resume the workflow as an edit.
#[derive(Debug, Error)]
#[error("product save failed")]
pub struct SaveError {
	pub product_id: Option<String>,
	#[source]
	pub source: ApiError,
}

impl SaveError {
	fn before_upsert(source: ApiError) -> Self {
		Self { product_id: None, source }
	}

	/// True for structured field errors the caller should route to
	/// form-level display.
	pub fn is_validation(&self) -> bool {
		self.source.is_validation()
	}
}

/// Sequences the four save phases against a backend.
pub struct SaveOrchestrator<'a> {
	api: &'a dyn CatalogApi,
}

impl<'a> SaveOrchestrator<'a> {
	pub fn new(api: &'a dyn CatalogApi) -> Self {
		Self { api }
	}

	/// Runs the full workflow. Each phase's success is a precondition for
	/// the next; failures propagate unchanged apart from the attached
	/// product identifier.
	pub async fn save(&self, request: SaveRequest) -> Result<SaveOutcome, SaveError> {
		let SaveRequest { product_id, draft, cards, uploads } = request;
		check_upload_pairing(&cards, &uploads).map_err(SaveError::before_upsert)?;

		// Phase 1: upsert metadata. Aborts the whole operation on failure;
		// nothing has been uploaded yet.
		let product = match &product_id {
			Some(id) => self.api.update_product(id, &draft).await,
			None => self.api.create_product(&draft).await,
		}
		.map_err(SaveError::before_upsert)?;
		debug!(target = "shelf.save", product = %product.id, editing = product_id.is_some(), "metadata upserted");

		let fail = |source: ApiError| SaveError { product_id: Some(product.id.clone()), source };

		// Phase 2: upload pending files concurrently. Results are paired
		// back by the card tag, not by completion order.
		let files_uploaded = uploads.len();
		let id_map = self.upload_files(&product.id, uploads).await.map_err(fail)?;

		// Phase 3: persist the display order in one call.
		self.persist_order(&product.id, &cards, &id_map).await.map_err(fail)?;

		// Phase 4: refetch so client state reflects server truth; the
		// temporary identifiers and the map die here.
		let snapshot = self.refresh().await.map_err(fail)?;

		info!(
			target = "shelf.save",
			product = %product.id,
			files = files_uploaded,
			"product saved"
		);
		Ok(SaveOutcome { product, files_uploaded, snapshot })
	}

	/// Uploads every pending payload and returns the temporary-to-server
	/// identifier map, scoped to this one save.
	async fn upload_files(
		&self,
		product_id: &str,
		uploads: Vec<NewUpload>,
	) -> Result<HashMap<String, String>, ApiError> {
		if uploads.is_empty() {
			return Ok(HashMap::new());
		}

		info!(target = "shelf.save", product = %product_id, files = uploads.len(), "uploading media");
		let tagged = uploads.into_iter().map(|upload| {
			let is_video = upload.is_video();
			let NewUpload { card_id, file_name, content_type, bytes } = upload;
			async move {
				let file = self
					.api
					.add_product_file(product_id, &file_name, &content_type, bytes, is_video)
					.await?;
				Ok::<_, ApiError>((card_id, file))
			}
		});

		let uploaded = try_join_all(tagged).await?;
		Ok(uploaded.into_iter().map(|(card_id, file)| (card_id, file.id)).collect())
	}

	/// Walks the cards in final display order, resolves each to a server
	/// identifier, and sends the whole order list in one call.
	async fn persist_order(
		&self,
		product_id: &str,
		cards: &[FileCard],
		id_map: &HashMap<String, String>,
	) -> Result<(), ApiError> {
		if cards.is_empty() {
			return Ok(());
		}

		let files: Vec<FileOrder> = cards
			.iter()
			.enumerate()
			.filter_map(|(order, card)| {
				let file_id = if card.is_existing {
					Some(card.id.clone())
				} else {
					id_map.get(&card.id).cloned()
				};
				// Defensive: a card that resolved to nothing is dropped
				// rather than sent as an invalid reference.
				if file_id.is_none() {
					warn!(target = "shelf.save", card = %card.id, "card has no server id; dropped from order");
				}
				file_id.map(|file_id| FileOrder { file_id, order })
			})
			.collect();

		if files.is_empty() {
			return Ok(());
		}

		self.api.update_file_order(product_id, &FileOrderUpdate { files }).await?;
		Ok(())
	}

	async fn refresh(&self) -> Result<CatalogSnapshot, ApiError> {
		let (products, categories, subcategories) = tokio::try_join!(
			self.api.get_products(),
			self.api.get_categories(),
			self.api.get_subcategories(),
		)?;
		Ok(CatalogSnapshot { products, categories, subcategories })
	}
}

/// Pending cards and upload payloads must pair one-to-one by temporary
/// identifier before anything is sent.
fn check_upload_pairing(cards: &[FileCard], uploads: &[NewUpload]) -> Result<(), ApiError> {
	let mut pending: HashSet<&str> = HashSet::new();
	for card in cards.iter().filter(|card| card.is_pending()) {
		if !pending.insert(card.id.as_str()) {
			return Err(ApiError::InvalidRequest(format!("duplicate pending card id {}", card.id)));
		}
	}

	let mut tagged: HashSet<&str> = HashSet::new();
	for upload in uploads {
		if !tagged.insert(upload.card_id.as_str()) {
			return Err(ApiError::InvalidRequest(format!(
				"duplicate upload for card {}",
				upload.card_id
			)));
		}
		if !pending.contains(upload.card_id.as_str()) {
			return Err(ApiError::InvalidRequest(format!(
				"upload {} has no matching pending card",
				upload.card_id
			)));
		}
	}

	if let Some(card_id) = pending.iter().find(|id| !tagged.contains(**id)) {
		return Err(ApiError::InvalidRequest(format!("pending card {card_id} has no upload payload")));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pending_card(id: &str) -> FileCard {
		FileCard::pending(id.to_string(), "photo.png", "image/png", "file:///tmp/photo.png")
	}

	fn upload_for(id: &str) -> NewUpload {
		NewUpload {
			card_id: id.to_string(),
			file_name: "photo.png".into(),
			content_type: "image/png".into(),
			bytes: vec![1, 2, 3],
		}
	}

	#[test]
	fn temp_ids_are_unique_and_prefixed() {
		let ids = TempIdGen::new();
		let first = ids.next_id();
		let second = ids.next_id();
		assert!(first.starts_with(TEMP_ID_PREFIX));
		assert_ne!(first, second);
	}

	#[test]
	fn video_flag_derives_from_mime_type() {
		assert!(NewUpload { content_type: "video/mp4".into(), ..upload_for("new-1") }.is_video());
		assert!(!upload_for("new-1").is_video());

		let card = FileCard::pending("new-2".into(), "clip.mp4", "video/mp4", "file:///tmp/clip.mp4");
		assert!(card.is_video);
		assert!(card.is_pending());
	}

	#[test]
	fn existing_card_takes_its_name_from_the_url() {
		let file = ProductFile {
			id: "f1".into(),
			url: "https://cdn.example.com/products/p1/tomato.jpg".into(),
			is_video: false,
			product_id: "p1".into(),
		};
		let card = FileCard::existing(&file);
		assert_eq!(card.name, "tomato.jpg");
		assert!(card.is_existing);
	}

	#[test]
	fn pairing_accepts_matched_cards_and_uploads() {
		let cards = vec![pending_card("new-1"), pending_card("new-2")];
		let uploads = vec![upload_for("new-1"), upload_for("new-2")];
		assert!(check_upload_pairing(&cards, &uploads).is_ok());
	}

	#[test]
	fn pairing_rejects_missing_upload_payload() {
		let cards = vec![pending_card("new-1"), pending_card("new-2")];
		let uploads = vec![upload_for("new-1")];
		assert!(check_upload_pairing(&cards, &uploads).is_err());
	}

	#[test]
	fn pairing_rejects_orphan_upload() {
		let cards = vec![pending_card("new-1")];
		let uploads = vec![upload_for("new-1"), upload_for("new-9")];
		assert!(check_upload_pairing(&cards, &uploads).is_err());
	}

	#[test]
	fn pairing_rejects_duplicate_card_ids() {
		let cards = vec![pending_card("new-1"), pending_card("new-1")];
		let uploads = vec![upload_for("new-1")];
		assert!(check_upload_pairing(&cards, &uploads).is_err());
	}
}
