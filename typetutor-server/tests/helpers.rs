#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::json;

use typetutor_core::MemoryStore;
use typetutor_server::state::AppState;

pub fn fixture_store() -> MemoryStore {
	let basics = json!({
		"id": "basics",
		"name": "Basics",
		"description": "First steps",
		"icon": "📘",
		"difficulty": "beginner",
		"language": "javascript",
		"snippets": [
			{ "code": "let x = 1;", "title": "Let", "tags": ["variables"] },
			{ "code": "const y = 2;", "title": "Const", "tags": ["variables"] },
			{ "code": "console.log(x + y);", "title": "Log", "tags": ["output"], "author": "docs" }
		]
	});
	let closures = json!({
		"id": "closures",
		"name": "Closures",
		"difficulty": "advanced",
		"language": "javascript",
		"snippets": [{ "code": "const add = a => b => a + b;" }]
	});

	MemoryStore::new()
		.with(
			"trigraphs/the.txt",
			"the then there other bathe these lathe theme thesis father\nmother brother",
		)
		.with("trigraphs/ing.txt", "sing ring king")
		.with(
			"code-collections/languages.json",
			r#"[{"code":"javascript","name":"JavaScript","icon":"🟨","description":"The language of the web"}]"#,
		)
		.with("code-collections/javascript/basics.json", basics.to_string())
		.with("code-collections/javascript/closures.json", closures.to_string())
		.with("code-collections/javascript/bad.json", r#"{"id":"bad","snippets":{"code":"x"}}"#)
}

pub fn state_with(store: MemoryStore) -> web::Data<AppState> {
	web::Data::new(AppState::with_store(Arc::new(store), Some(7)))
}

pub fn state() -> web::Data<AppState> {
	state_with(fixture_store())
}

/// Fixture state whose GitHub proxy downloads from `base`.
pub fn state_with_github(base: &str) -> web::Data<AppState> {
	web::Data::new(AppState::with_store(Arc::new(fixture_store()), Some(7)).with_github_base(base))
}
