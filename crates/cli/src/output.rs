//! Listing output: plain tables or JSON.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Table,
	Json,
}

/// Pretty-prints any serializable payload as JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Prints a fixed-width table with a separator under the header.
pub fn print_table(headers: &[&str], widths: &[usize], rows: &[Vec<String>]) {
	let mut header = String::new();
	for (text, &width) in headers.iter().zip(widths) {
		header.push_str(&format!("{text:<width$} "));
	}
	println!("{}", header.trim_end());
	println!("{}", "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1)));

	for row in rows {
		let mut line = String::new();
		for (cell, &width) in row.iter().zip(widths) {
			line.push_str(&format!("{:<width$} ", truncate(cell, width)));
		}
		println!("{}", line.trim_end());
	}
	println!();
	println!("Total: {}", rows.len());
}

fn truncate(text: &str, width: usize) -> String {
	if text.chars().count() <= width {
		return text.to_string();
	}
	let kept: String = text.chars().take(width.saturating_sub(3)).collect();
	format!("{kept}...")
}
