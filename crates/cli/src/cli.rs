use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_protocol::Lang;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Admin console for the shelf product catalog")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Backend base URL (falls back to SHELF_BASE_URL)
	#[arg(long, global = true, value_name = "URL")]
	pub base_url: Option<String>,

	/// Session file location (defaults to ~/.config/shelf/session.json)
	#[arg(long, global = true, value_name = "FILE")]
	pub session_file: Option<PathBuf>,

	/// Output format for listings
	#[arg(long, global = true, value_enum, default_value = "table")]
	pub format: OutputFormat,

	/// Language used for localized columns
	#[arg(long, global = true, default_value = "uz", value_parser = parse_lang)]
	pub lang: Lang,

	#[command(subcommand)]
	pub command: Commands,
}

fn parse_lang(value: &str) -> Result<Lang, String> {
	value.parse()
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Session management
	Auth {
		#[command(subcommand)]
		action: AuthAction,
	},

	/// Products and their media files
	Products {
		#[command(subcommand)]
		action: ProductAction,
	},

	/// Top-level categories
	Categories {
		#[command(subcommand)]
		action: CategoryAction,
	},

	/// Subcategories nested under a category
	Subcategories {
		#[command(subcommand)]
		action: SubcategoryAction,
	},

	/// Units of measure
	Units {
		#[command(subcommand)]
		action: NamedAction,
	},

	/// Countries of origin
	Countries {
		#[command(subcommand)]
		action: NamedAction,
	},

	/// Storefront carousel images
	Carousel {
		#[command(subcommand)]
		action: CarouselAction,
	},

	/// Admin accounts (superadmin only)
	Admins {
		#[command(subcommand)]
		action: AdminAction,
	},

	/// Dashboard counters and recent activity
	Dashboard,

	/// Current USD exchange rate
	Currency,

	/// General site settings (superadmin only)
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
	/// Log in and persist the session
	Login {
		#[arg(short, long)]
		username: String,
		/// Password; read from stdin when omitted
		#[arg(short, long)]
		password: Option<String>,
	},
	/// Clear the persisted session
	Logout,
	/// Show the current session
	Status,
	/// Update your own profile
	UpdateProfile {
		#[arg(long)]
		username: Option<String>,
		#[arg(long)]
		email: Option<String>,
	},
	/// Change your own password
	SetPassword {
		#[arg(long)]
		current: String,
		#[arg(long)]
		new: String,
	},
}

#[derive(Subcommand, Debug)]
pub enum ProductAction {
	/// List products, optionally for one category
	List {
		#[arg(long, value_name = "CATEGORY_ID")]
		category: Option<String>,
	},
	/// Show one product with its files
	Show { id: String },
	/// Create or update a product, upload media, and persist file order
	Save {
		/// Product draft JSON file
		#[arg(long, value_name = "FILE")]
		draft: PathBuf,
		/// Product to edit; omit to create
		#[arg(long)]
		id: Option<String>,
		/// New media files, appended after existing ones
		#[arg(long = "media", value_name = "FILE")]
		media: Vec<PathBuf>,
		/// Full display order as comma-separated file ids; new files are
		/// addressed as new-1, new-2, ... in --media order
		#[arg(long, value_delimiter = ',', value_name = "IDS")]
		order: Option<Vec<String>>,
	},
	/// Soft-delete a product
	Delete { id: String },
	/// Detach and delete one media file
	RemoveFile { product_id: String, file_id: String },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
	List,
	/// Create a category; --name fills every language
	Create {
		#[arg(long)]
		name: Option<String>,
		/// Full draft JSON (overrides --name)
		#[arg(long, value_name = "FILE")]
		draft: Option<PathBuf>,
		/// Cover image
		#[arg(long, value_name = "FILE")]
		image: Option<PathBuf>,
	},
	Update {
		id: String,
		#[arg(long, value_name = "FILE")]
		draft: PathBuf,
		#[arg(long, value_name = "FILE")]
		image: Option<PathBuf>,
	},
	Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SubcategoryAction {
	List,
	/// Create a subcategory; the name fills every language
	Create {
		#[arg(long)]
		name: String,
		#[arg(long, value_name = "CATEGORY_ID")]
		category: String,
	},
	Update {
		id: String,
		#[arg(long)]
		name: String,
		#[arg(long, value_name = "CATEGORY_ID")]
		category: String,
	},
	Delete { id: String },
}

/// List/create/rename/delete for plain named records (units, countries).
#[derive(Subcommand, Debug)]
pub enum NamedAction {
	List,
	Create { name: String },
	Rename { id: String, name: String },
	Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CarouselAction {
	List,
	/// Upload a carousel image
	Add { image: PathBuf },
	Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
	List,
	Show { id: String },
	Create {
		#[arg(long)]
		name: String,
		#[arg(long)]
		username: String,
		#[arg(long)]
		password: String,
		#[arg(long)]
		superadmin: bool,
	},
	Update {
		id: String,
		#[arg(long)]
		name: Option<String>,
		#[arg(long)]
		username: Option<String>,
		#[arg(long)]
		email: Option<String>,
		/// true/false to grant or revoke
		#[arg(long)]
		superadmin: Option<bool>,
		/// true/false to enable or disable the account
		#[arg(long)]
		active: Option<bool>,
	},
	Delete { id: String },
	/// Set another admin's password
	SetPassword {
		id: String,
		#[arg(long)]
		password: String,
	},
	/// Audit log, newest first
	Logs,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
	Show,
	/// Replace settings from a JSON file
	Update {
		#[arg(long, value_name = "FILE")]
		draft: PathBuf,
	},
}
