//! Admin account management and site settings (superadmin only).

use shelf_protocol::{CreateAdminRequest, GeneralSettings, UpdateAdminRequest};

use super::load_json;
use crate::cli::{AdminAction, SettingsAction};
use crate::context::AppContext;
use crate::output::{OutputFormat, print_json, print_table};

pub async fn run(action: AdminAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		AdminAction::List => {
			let admins = ctx.api.get_admins().await?;
			match ctx.format {
				OutputFormat::Json => print_json(&admins),
				OutputFormat::Table => {
					let rows: Vec<Vec<String>> = admins
						.iter()
						.map(|a| {
							vec![
								a.id.clone(),
								a.username.clone(),
								a.name.clone(),
								if a.is_superadmin { "superadmin".into() } else { "admin".into() },
							]
						})
						.collect();
					print_table(&["ID", "USERNAME", "NAME", "ROLE"], &[26, 20, 24, 10], &rows);
					Ok(())
				}
			}
		}
		AdminAction::Show { id } => {
			let admin = ctx.api.get_admin(&id).await?;
			print_json(&admin)
		}
		AdminAction::Create { name, username, password, superadmin } => {
			let created = ctx
				.api
				.create_admin(&CreateAdminRequest {
					name,
					username,
					password,
					is_superadmin: superadmin.then_some(true),
				})
				.await?;
			println!("Admin {} created.", created.id);
			Ok(())
		}
		AdminAction::Update { id, name, username, email, superadmin, active } => {
			let updated = ctx
				.api
				.update_admin(&id, &UpdateAdminRequest {
					name,
					username,
					email,
					is_superadmin: superadmin,
					is_active: active,
				})
				.await?;
			println!("Admin {} updated.", updated.id);
			Ok(())
		}
		AdminAction::Delete { id } => {
			ctx.api.delete_admin(&id).await?;
			println!("Admin {id} deleted.");
			Ok(())
		}
		AdminAction::SetPassword { id, password } => {
			let admin = ctx.api.change_admin_password(&id, &password).await?;
			println!("Password changed for {}.", admin.username);
			Ok(())
		}
		AdminAction::Logs => {
			let logs = ctx.api.get_logs().await?;
			match ctx.format {
				OutputFormat::Json => print_json(&logs),
				OutputFormat::Table => {
					let rows: Vec<Vec<String>> = logs
						.iter()
						.map(|log| {
							vec![
								log.created_at.clone(),
								log.admin
									.as_ref()
									.map(|a| a.username.clone())
									.unwrap_or_else(|| log.admin_id.clone()),
								format!("{:?}", log.action_type).to_lowercase(),
								format!("{:?}", log.entity_type),
							]
						})
						.collect();
					print_table(&["WHEN", "ADMIN", "ACTION", "ENTITY"], &[24, 20, 10, 12], &rows);
					Ok(())
				}
			}
		}
	}
}

pub async fn run_settings(action: SettingsAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		SettingsAction::Show => {
			let settings = ctx.api.get_general_settings().await?;
			print_json(&settings)
		}
		SettingsAction::Update { draft } => {
			let settings: GeneralSettings = load_json(&draft)?;
			let updated = ctx.api.update_general_settings(&settings).await?;
			println!("Settings updated for {}.", updated.site_name);
			Ok(())
		}
	}
}
