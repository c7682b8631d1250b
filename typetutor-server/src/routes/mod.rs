//! HTTP routes.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /api/trigraphs` | [`trigraphs::list_trigraphs`] |
//! | `GET /api/trigraphs/{name}?count=` | [`trigraphs::sample_trigraph`] |
//! | `GET /api/code-collections/languages` | [`collections::list_languages`] |
//! | `GET /api/code-collections/collections/{lang}` | [`collections::list_collections`] |
//! | `GET /api/code-collections/snippets/{lang}/{id}` | [`collections::get_snippets`] |
//! | `GET /api/code-collections/random-snippet/{lang}` | [`collections::random_snippet`] |
//! | `POST /api/github-content` | [`github::github_content`] |
//! | `GET /random` | [`random::greeting`] |

use actix_web::web;

pub mod collections;
pub mod github;
pub mod random;
pub mod trigraphs;

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(trigraphs::list_trigraphs)
		.service(trigraphs::missing_trigraph_name)
		.service(trigraphs::sample_trigraph)
		.service(collections::list_languages)
		.service(collections::list_collections)
		.service(collections::missing_snippet_params)
		.service(collections::get_snippets)
		.service(collections::random_snippet)
		.service(github::github_content)
		.service(random::greeting);
}
