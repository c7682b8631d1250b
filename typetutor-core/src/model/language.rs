use serde::{Deserialize, Serialize};

/// Display metadata of one programming language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Language {
	/// Identifier used in collection paths, e.g. `"javascript"`.
	pub code: String,
	pub name: String,
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub description: String,
}

/// Every language the collection catalog offers, in persisted order.
///
/// Loaded and replaced wholesale; there is no per-entry lifecycle.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct LanguageCatalog(pub Vec<Language>);
