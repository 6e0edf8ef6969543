//! Product commands, including the full save workflow.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::bail;
use shelf::{CatalogApi as _, FileCard, NewUpload, SaveOrchestrator, SaveRequest, TempIdGen};
use shelf_protocol::{Product, ProductDraft, ProductFile};

use super::load_json;
use crate::cli::ProductAction;
use crate::context::AppContext;
use crate::media::MediaFile;
use crate::output::{OutputFormat, print_json, print_table};

pub async fn run(action: ProductAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		ProductAction::List { category } => list(ctx, category.as_deref()).await,
		ProductAction::Show { id } => show(ctx, &id).await,
		ProductAction::Save { draft, id, media, order } => {
			save(ctx, &draft, id, &media, order).await
		}
		ProductAction::Delete { id } => {
			ctx.api.delete_product(&id).await?;
			println!("Product {id} deleted.");
			Ok(())
		}
		ProductAction::RemoveFile { product_id, file_id } => {
			ctx.api.remove_product_file(&product_id, &file_id).await?;
			println!("File {file_id} removed from product {product_id}.");
			Ok(())
		}
	}
}

async fn list(ctx: &AppContext, category: Option<&str>) -> anyhow::Result<()> {
	let products = match category {
		Some(category_id) => ctx.api.get_products_by_category(category_id).await?,
		None => ctx.api.get_products().await?,
	};

	match ctx.format {
		OutputFormat::Json => print_json(&products),
		OutputFormat::Table => {
			let rows: Vec<Vec<String>> = products
				.iter()
				.map(|p| {
					vec![
						p.id.clone(),
						p.name(ctx.lang).to_string(),
						format!("{:.2}", p.price),
						p.quantity.to_string(),
						p.files.len().to_string(),
					]
				})
				.collect();
			print_table(&["ID", "NAME", "PRICE", "QTY", "FILES"], &[26, 30, 10, 6, 5], &rows);
			Ok(())
		}
	}
}

async fn show(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
	let product = ctx.api.get_product(id).await?;
	if ctx.format == OutputFormat::Json {
		return print_json(&product);
	}

	print_product(ctx, &product);
	Ok(())
}

fn print_product(ctx: &AppContext, product: &Product) {
	println!("{} ({})", product.name(ctx.lang), product.id);
	println!("  price:    {:.2}", product.price);
	println!("  quantity: {}", product.quantity);
	println!("  category: {}", product.category_id);
	if !product.description(ctx.lang).is_empty() {
		println!("  about:    {}", product.description(ctx.lang));
	}
	if product.files.is_empty() {
		println!("  files:    (none)");
	} else {
		println!("  files:");
		for file in &product.files {
			let kind = if file.is_video { "video" } else { "image" };
			println!("    {} [{kind}] {}", file.id, file.url);
		}
	}
}

async fn save(
	ctx: &AppContext,
	draft_path: &Path,
	product_id: Option<String>,
	media: &[PathBuf],
	order: Option<Vec<String>>,
) -> anyhow::Result<()> {
	let draft: ProductDraft = load_json(draft_path)?;

	// When editing, the current server files are the existing cards, in
	// their server order.
	let existing = match &product_id {
		Some(id) => ctx.api.get_product(id).await?.files,
		None => Vec::new(),
	};

	let media_files = media.iter().map(|path| MediaFile::read(path)).collect::<Result<Vec<_>, _>>()?;
	let (mut cards, uploads) = build_cards(&existing, media_files);
	if let Some(order) = order {
		cards = apply_order(cards, &order)?;
	}

	let editing = product_id.is_some();
	let outcome = SaveOrchestrator::new(&ctx.api)
		.save(SaveRequest { product_id, draft, cards, uploads })
		.await?;

	println!(
		"Product {} {} ({} file(s) uploaded).",
		outcome.product.id,
		if editing { "updated" } else { "created" },
		outcome.files_uploaded,
	);
	Ok(())
}

/// Builds the card sequence (existing files first, new media appended in
/// argument order) and the matching tagged upload payloads.
fn build_cards(existing: &[ProductFile], media: Vec<MediaFile>) -> (Vec<FileCard>, Vec<NewUpload>) {
	let ids = TempIdGen::new();
	let mut cards: Vec<FileCard> = existing.iter().map(FileCard::existing).collect();
	let mut uploads = Vec::with_capacity(media.len());

	for file in media {
		let card_id = ids.next_id();
		cards.push(FileCard::pending(
			card_id.clone(),
			file.file_name.clone(),
			&file.content_type,
			file.path.display().to_string(),
		));
		uploads.push(NewUpload {
			card_id,
			file_name: file.file_name,
			content_type: file.content_type,
			bytes: file.bytes,
		});
	}

	(cards, uploads)
}

/// Rearranges cards to the user-given id sequence. Every file must be
/// listed exactly once; new files go by their `new-N` placeholder.
fn apply_order(cards: Vec<FileCard>, order: &[String]) -> anyhow::Result<Vec<FileCard>> {
	let mut by_id: HashMap<String, FileCard> =
		cards.into_iter().map(|card| (card.id.clone(), card)).collect();

	let mut ordered = Vec::with_capacity(by_id.len());
	for id in order {
		match by_id.remove(id) {
			Some(card) => ordered.push(card),
			None => bail!("unknown or duplicate file id in --order: {id}"),
		}
	}

	if !by_id.is_empty() {
		let mut missing: Vec<&str> = by_id.keys().map(String::as_str).collect();
		missing.sort_unstable();
		bail!("--order must list every file exactly once; missing: {}", missing.join(", "));
	}

	Ok(ordered)
}
