//! Session commands: login, logout, status, and self-service updates.

use std::io::Write as _;

use colored::Colorize;
use shelf_protocol::{PasswordUpdate, ProfileUpdate};

use crate::cli::AuthAction;
use crate::context::AppContext;

pub async fn run(action: AuthAction, ctx: &mut AppContext) -> anyhow::Result<()> {
	match action {
		AuthAction::Login { username, password } => login(ctx, &username, password).await,
		AuthAction::Logout => {
			ctx.session.logout()?;
			println!("Logged out.");
			Ok(())
		}
		AuthAction::Status => {
			status(ctx);
			Ok(())
		}
		AuthAction::UpdateProfile { username, email } => {
			let updated = ctx
				.api
				.update_my_profile(&ProfileUpdate { username, email })
				.await?;
			println!("Profile updated for {}.", updated.username);
			Ok(())
		}
		AuthAction::SetPassword { current, new } => {
			let ack = ctx
				.api
				.update_my_password(&PasswordUpdate {
					current_password: current,
					new_password: new,
				})
				.await?;
			println!("{}", ack.message);
			Ok(())
		}
	}
}

async fn login(ctx: &mut AppContext, username: &str, password: Option<String>) -> anyhow::Result<()> {
	let password = match password {
		Some(password) => password,
		None => prompt_password()?,
	};

	let session = ctx.session.login(&ctx.api, username, &password).await?;
	println!(
		"Logged in as {} ({})",
		session.username.bold(),
		if session.superadmin { "superadmin" } else { "admin" }
	);
	Ok(())
}

fn prompt_password() -> anyhow::Result<String> {
	print!("Password: ");
	std::io::stdout().flush()?;
	let mut input = String::new();
	std::io::stdin().read_line(&mut input)?;
	Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn status(ctx: &AppContext) {
	match ctx.session.session() {
		Some(session) => {
			println!("{} logged in", "●".green());
			println!("  username:   {}", session.username);
			println!("  admin id:   {}", session.admin_id);
			println!("  superadmin: {}", session.superadmin);
		}
		None => {
			println!("{} not logged in", "●".red());
			println!("  run `shelf auth login --username <name>`");
		}
	}
}
