use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Result;
use serde::Deserialize;

/// Language entry of `/api/code-collections/languages`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Collection entry of `/api/code-collections/collections/{lang}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub difficulty: String,
    pub snippet_count: usize,
}

/// Snippet entry of `/api/code-collections/snippets/{lang}/{id}`.
///
/// Only the fields the client uses; everything else is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Snippet {
    pub code: String,
    #[serde(default)]
    pub title: Option<String>,
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomSnippet {
    pub snippet: Snippet,
    pub collection_id: String,
}

/// Body of `/api/github-content`, for both success and failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubContent {
    pub success: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// REST context holding a reusable blocking HTTP client.
pub struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// The server address comes from `TYPETUTOR_API`, default `http://127.0.0.1:5000`.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        let base_url = std::env::var("TYPETUTOR_API")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a GET request and decodes a JSON body; non-2xx is an error.
    fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        self.client
            .get(self.url(path))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Sends a GET request to `/api/trigraphs`.
    pub fn get_trigraphs(&self) -> Result<Vec<String>> {
        self.get_json("/api/trigraphs")
    }

    /// Sends a GET request to `/api/trigraphs/{name}` with a `count` query parameter.
    pub fn get_trigraph_words(&self, name: &str, count: usize) -> Result<Vec<String>> {
        self.client
            .get(self.url(&format!("/api/trigraphs/{name}")))
            .query(&[("count", count)])
            .send()?
            .error_for_status()?
            .json()
    }

    pub fn get_languages(&self) -> Result<Vec<Language>> {
        self.get_json("/api/code-collections/languages")
    }

    pub fn get_collections(&self, language: &str) -> Result<Vec<CollectionSummary>> {
        self.get_json(&format!("/api/code-collections/collections/{language}"))
    }

    pub fn get_snippets(&self, language: &str, collection: &str) -> Result<Vec<Snippet>> {
        self.get_json(&format!("/api/code-collections/snippets/{language}/{collection}"))
    }

    pub fn get_random_snippet(&self, language: &str) -> Result<RandomSnippet> {
        self.get_json(&format!("/api/code-collections/random-snippet/{language}"))
    }

    /// Sends a POST request to `/api/github-content`.
    ///
    /// The server answers validation failures with a JSON body and a 400,
    /// so the body is decoded whatever the status.
    pub fn post_github_content(&self, url: &str) -> Result<GitHubContent> {
        self.client
            .post(self.url("/api/github-content"))
            .json(&serde_json::json!({ "url": url }))
            .send()?
            .json()
    }
}
