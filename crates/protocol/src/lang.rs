//! Closed enumeration of catalog display languages.

use serde::{Deserialize, Serialize};

/// Languages the catalog carries localized text for.
///
/// Localized fields on the wire are keyed `name_uz`, `name_en`, and so on;
/// this enum is the only way to select between them, so a typo in a
/// language code is a compile error rather than a missing JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
	#[default]
	Uz,
	En,
	Ru,
	Kz,
}

impl Lang {
	/// All supported languages in display order.
	pub const ALL: [Lang; 4] = [Lang::Uz, Lang::En, Lang::Ru, Lang::Kz];

	/// The two-letter code used in wire field suffixes.
	pub fn code(self) -> &'static str {
		match self {
			Lang::Uz => "uz",
			Lang::En => "en",
			Lang::Ru => "ru",
			Lang::Kz => "kz",
		}
	}
}

impl std::fmt::Display for Lang {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.code())
	}
}

impl std::str::FromStr for Lang {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"uz" => Ok(Lang::Uz),
			"en" => Ok(Lang::En),
			"ru" => Ok(Lang::Ru),
			"kz" => Ok(Lang::Kz),
			other => Err(format!("unknown language code: {other}")),
		}
	}
}
