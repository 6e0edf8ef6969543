use clap::Parser;
use colored::Colorize;
use shelf::ApiError;
use shelf_cli::cli::Cli;
use shelf_cli::context::AppContext;
use shelf_cli::{commands, logging};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	let mut ctx = match AppContext::new(&cli) {
		Ok(ctx) => ctx,
		Err(err) => {
			eprintln!("{} {err:#}", "error:".red().bold());
			std::process::exit(2);
		}
	};

	if let Err(err) = commands::dispatch(cli.command, &mut ctx).await {
		error!(target = "shelf", error = %err, "command failed");
		report(&err);
		std::process::exit(1);
	}
}

/// Prints a failure the way its classification asks for: field messages
/// for validation, the session-expired hint for 401, and the distinct
/// timeout/unreachable wording for transport failures.
fn report(err: &anyhow::Error) {
	let api_err = err
		.downcast_ref::<shelf::SaveError>()
		.map(|save| &save.source)
		.or_else(|| err.downcast_ref::<ApiError>());

	match api_err {
		Some(ApiError::Validation { messages }) => {
			eprintln!("{}", "validation failed:".red().bold());
			for message in messages {
				eprintln!("  - {message}");
			}
		}
		Some(ApiError::Unauthorized { .. }) => {
			eprintln!("{}", "Session expired. Please log in again.".red().bold());
		}
		Some(ApiError::Timeout) => {
			eprintln!("{} request timed out", "error:".red().bold());
		}
		Some(ApiError::Network(detail)) => {
			eprintln!("{} cannot reach server: {detail}", "error:".red().bold());
		}
		_ => {
			eprintln!("{} {err:#}", "error:".red().bold());
		}
	}
}
