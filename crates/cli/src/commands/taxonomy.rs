//! Units and countries: plain named records with identical command shapes.

use shelf_protocol::{Country, Unit};

use crate::cli::NamedAction;
use crate::context::AppContext;
use crate::output::{OutputFormat, print_json, print_table};

pub async fn run_units(action: NamedAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		NamedAction::List => {
			let units = ctx.api.get_units().await?;
			print_named(ctx, &units, |u: &Unit| (u.id.clone(), u.name.clone()))
		}
		NamedAction::Create { name } => {
			let unit = ctx.api.create_unit(&name).await?;
			println!("Unit {} created.", unit.id);
			Ok(())
		}
		NamedAction::Rename { id, name } => {
			let unit = ctx.api.update_unit(&id, &name).await?;
			println!("Unit {} renamed to {}.", unit.id, unit.name);
			Ok(())
		}
		NamedAction::Delete { id } => {
			ctx.api.delete_unit(&id).await?;
			println!("Unit {id} deleted.");
			Ok(())
		}
	}
}

pub async fn run_countries(action: NamedAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		NamedAction::List => {
			let countries = ctx.api.get_countries().await?;
			print_named(ctx, &countries, |c: &Country| (c.id.clone(), c.name.clone()))
		}
		NamedAction::Create { name } => {
			let country = ctx.api.create_country(&name).await?;
			println!("Country {} created.", country.id);
			Ok(())
		}
		NamedAction::Rename { id, name } => {
			let country = ctx.api.update_country(&id, &name).await?;
			println!("Country {} renamed to {}.", country.id, country.name);
			Ok(())
		}
		NamedAction::Delete { id } => {
			ctx.api.delete_country(&id).await?;
			println!("Country {id} deleted.");
			Ok(())
		}
	}
}

fn print_named<T: serde::Serialize>(
	ctx: &AppContext,
	items: &[T],
	fields: impl Fn(&T) -> (String, String),
) -> anyhow::Result<()> {
	match ctx.format {
		OutputFormat::Json => print_json(&items),
		OutputFormat::Table => {
			let rows: Vec<Vec<String>> = items
				.iter()
				.map(|item| {
					let (id, name) = fields(item);
					vec![id, name]
				})
				.collect();
			print_table(&["ID", "NAME"], &[26, 30], &rows);
			Ok(())
		}
	}
}
