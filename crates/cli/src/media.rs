//! Reading local media files into upload payloads.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// A local file read and ready for multipart upload.
#[derive(Debug)]
pub struct MediaFile {
	pub path: PathBuf,
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl MediaFile {
	pub fn read(path: &Path) -> anyhow::Result<Self> {
		let bytes = std::fs::read(path)
			.with_context(|| format!("failed to read media file {}", path.display()))?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().to_string())
			.unwrap_or_else(|| "upload".to_string());
		Ok(Self {
			content_type: content_type_for(path).to_string(),
			path: path.to_path_buf(),
			file_name,
			bytes,
		})
	}

	pub fn is_video(&self) -> bool {
		self.content_type.starts_with("video/")
	}
}

/// MIME type from the file extension; unknown extensions upload as opaque
/// bytes and count as images.
pub fn content_type_for(path: &Path) -> &'static str {
	let ext = path
		.extension()
		.map(|ext| ext.to_string_lossy().to_lowercase())
		.unwrap_or_default();
	match ext.as_str() {
		"jpg" | "jpeg" => "image/jpeg",
		"png" => "image/png",
		"gif" => "image/gif",
		"webp" => "image/webp",
		"svg" => "image/svg+xml",
		"mp4" => "video/mp4",
		"webm" => "video/webm",
		"mov" => "video/quicktime",
		_ => "application/octet-stream",
	}
}
