//! Storefront carousel commands.

use anyhow::bail;
use shelf::ImageUpload;

use crate::cli::CarouselAction;
use crate::context::AppContext;
use crate::media::MediaFile;
use crate::output::{OutputFormat, print_json, print_table};

pub async fn run(action: CarouselAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		CarouselAction::List => {
			let items = ctx.api.get_carousel_items().await?;
			match ctx.format {
				OutputFormat::Json => print_json(&items),
				OutputFormat::Table => {
					let rows: Vec<Vec<String>> =
						items.iter().map(|i| vec![i.id.clone(), i.file.clone()]).collect();
					print_table(&["ID", "FILE"], &[26, 50], &rows);
					Ok(())
				}
			}
		}
		CarouselAction::Add { image } => {
			let file = MediaFile::read(&image)?;
			if file.is_video() {
				bail!("{} is a video; the carousel takes images", image.display());
			}
			let item = ctx
				.api
				.add_carousel_image(ImageUpload {
					file_name: file.file_name,
					content_type: file.content_type,
					bytes: file.bytes,
				})
				.await?;
			println!("Carousel item {} added.", item.id);
			Ok(())
		}
		CarouselAction::Delete { id } => {
			ctx.api.delete_carousel_item(&id).await?;
			println!("Carousel item {id} deleted.");
			Ok(())
		}
	}
}
