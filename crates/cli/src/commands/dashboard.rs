//! Dashboard summary and exchange-rate commands.

use crate::context::AppContext;
use crate::output::{OutputFormat, print_json};

pub async fn summary(ctx: &mut AppContext) -> anyhow::Result<()> {
	let summary = ctx.api.get_dashboard_summary().await?;
	if ctx.format == OutputFormat::Json {
		return print_json(&summary);
	}

	println!("Products:   {}", summary.stats.total_products);
	println!("Categories: {}", summary.stats.total_categories);
	println!("Views:      {}", summary.stats.total_views);
	println!("Low stock:  {}", summary.stats.low_stock_products);

	if !summary.activities.is_empty() {
		println!();
		println!("Recent activity:");
		for activity in &summary.activities {
			println!(
				"  {} {} {:?} \"{}\" ({})",
				activity.created_at,
				activity.admin_user_name,
				activity.action_type,
				activity.entity_name,
				format!("{:?}", activity.entity_type).to_lowercase(),
			);
		}
	}
	Ok(())
}

pub async fn currency(ctx: &mut AppContext) -> anyhow::Result<()> {
	let rate = ctx.api.get_currency().await?;
	if ctx.format == OutputFormat::Json {
		return print_json(&rate);
	}
	println!("USD buy:  {:.2}", rate.buy);
	println!("USD sell: {:.2}", rate.sell);
	Ok(())
}
