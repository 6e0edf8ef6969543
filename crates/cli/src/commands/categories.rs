//! Category and subcategory commands.

use std::path::Path;

use anyhow::bail;
use shelf::{CatalogApi as _, ImageUpload};
use shelf_protocol::{CategoryDraft, SubcategoryDraft};

use super::load_json;
use crate::cli::{CategoryAction, SubcategoryAction};
use crate::context::AppContext;
use crate::media::MediaFile;
use crate::output::{OutputFormat, print_json, print_table};

pub async fn run_categories(action: CategoryAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		CategoryAction::List => {
			let categories = ctx.api.get_categories().await?;
			match ctx.format {
				OutputFormat::Json => print_json(&categories),
				OutputFormat::Table => {
					let rows: Vec<Vec<String>> = categories
						.iter()
						.map(|c| vec![c.id.clone(), c.name(ctx.lang).to_string(), c.image.clone()])
						.collect();
					print_table(&["ID", "NAME", "IMAGE"], &[26, 30, 40], &rows);
					Ok(())
				}
			}
		}
		CategoryAction::Create { name, draft, image } => {
			let draft = category_draft(name, draft.as_deref())?;
			let image = image.as_deref().map(read_image).transpose()?;
			let created = ctx.api.create_category(&draft, image).await?;
			println!("Category {} created.", created.id);
			Ok(())
		}
		CategoryAction::Update { id, draft, image } => {
			let draft: CategoryDraft = load_json(&draft)?;
			let image = image.as_deref().map(read_image).transpose()?;
			let updated = ctx.api.update_category(&id, &draft, image).await?;
			println!("Category {} updated.", updated.id);
			Ok(())
		}
		CategoryAction::Delete { id } => {
			ctx.api.delete_category(&id).await?;
			println!("Category {id} deleted.");
			Ok(())
		}
	}
}

pub async fn run_subcategories(action: SubcategoryAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		SubcategoryAction::List => {
			let subcategories = ctx.api.get_subcategories().await?;
			match ctx.format {
				OutputFormat::Json => print_json(&subcategories),
				OutputFormat::Table => {
					let rows: Vec<Vec<String>> = subcategories
						.iter()
						.map(|s| {
							vec![s.id.clone(), s.name(ctx.lang).to_string(), s.category_id.clone()]
						})
						.collect();
					print_table(&["ID", "NAME", "CATEGORY"], &[26, 30, 26], &rows);
					Ok(())
				}
			}
		}
		SubcategoryAction::Create { name, category } => {
			let created = ctx
				.api
				.create_subcategory(&subcategory_draft(&name, category))
				.await?;
			println!("Subcategory {} created.", created.id);
			Ok(())
		}
		SubcategoryAction::Update { id, name, category } => {
			let updated = ctx
				.api
				.update_subcategory(&id, &subcategory_draft(&name, category))
				.await?;
			println!("Subcategory {} updated.", updated.id);
			Ok(())
		}
		SubcategoryAction::Delete { id } => {
			ctx.api.delete_subcategory(&id).await?;
			println!("Subcategory {id} deleted.");
			Ok(())
		}
	}
}

/// A full draft from JSON, or a quick-create draft where one name fills
/// every language.
fn category_draft(name: Option<String>, draft: Option<&Path>) -> anyhow::Result<CategoryDraft> {
	if let Some(path) = draft {
		return load_json(path);
	}
	let Some(name) = name else {
		bail!("pass --name or --draft");
	};
	Ok(CategoryDraft {
		name_uz: name.clone(),
		name_en: name.clone(),
		name_ru: name.clone(),
		name_kz: name,
		..Default::default()
	})
}

fn subcategory_draft(name: &str, category_id: String) -> SubcategoryDraft {
	SubcategoryDraft {
		name_uz: name.to_string(),
		name_en: name.to_string(),
		name_ru: name.to_string(),
		name_kz: name.to_string(),
		category_id,
	}
}

fn read_image(path: &Path) -> anyhow::Result<ImageUpload> {
	let file = MediaFile::read(path)?;
	if file.is_video() {
		bail!("{} is a video; categories take an image", path.display());
	}
	Ok(ImageUpload {
		file_name: file.file_name,
		content_type: file.content_type,
		bytes: file.bytes,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quick_create_fills_every_language_with_the_same_name() {
		let draft = category_draft(Some("Fruits".into()), None).unwrap();
		assert_eq!(draft.name_uz, "Fruits");
		assert_eq!(draft.name_en, "Fruits");
		assert_eq!(draft.name_ru, "Fruits");
		assert_eq!(draft.name_kz, "Fruits");
		assert!(draft.description_uz.is_empty());
	}

	#[test]
	fn quick_create_requires_a_name_or_a_draft() {
		assert!(category_draft(None, None).is_err());
	}
}
