//! Catalog manifest: URL construction, preamble stripping, parsing and the
//! per-run cache.
//!
//! The catalog answers `GET <base>?family=<name>` with a guard line (e.g.
//! `)]}'`) followed by a JSON envelope whose `manifest` member lists the
//! family's inline files and external file references.

use crate::error::{Error, Result};
use crate::http::Fetcher;
use serde::Deserialize;

/// Google Fonts download-list endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fonts.google.com/download/list";

/// Top-level object returned by the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResponse {
    #[serde(default)]
    pub zip_name: Option<String>,
    pub manifest: Manifest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Text files shipped inline (license, description, ...).
    #[serde(default)]
    pub files: Vec<InlineFile>,
    /// Binaries to fetch separately.
    #[serde(default)]
    pub file_refs: Vec<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InlineFile {
    pub filename: String,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRef {
    /// Relative path, possibly with directories (`static/Foo-Bold.ttf`).
    pub filename: String,
    pub url: String,
}

/// Builds `<base>?family=<name>` with the name form-encoded (space as `+`).
pub fn manifest_url(base: &str, family: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(family.as_bytes()).collect();
    format!("{}?family={}", base, encoded)
}

/// Drops the first line (guard preamble) including its `\n`.
/// A body without any newline has nothing after the preamble.
pub fn strip_preamble(body: &str) -> &str {
    match body.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    }
}

/// Parses a raw catalog response for `family`.
pub fn parse_response(family: &str, body: &str) -> Result<ManifestResponse> {
    serde_json::from_str(strip_preamble(body)).map_err(|source| Error::Manifest {
        family: family.to_string(),
        source,
    })
}

/// Fetches the manifest for one family at most once.
#[derive(Debug)]
pub struct ManifestSource {
    family: String,
    catalog_url: String,
    cached: Option<Manifest>,
}

impl ManifestSource {
    pub fn new(family: impl Into<String>, catalog_url: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            catalog_url: catalog_url.into(),
            cached: None,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn url(&self) -> String {
        manifest_url(&self.catalog_url, &self.family)
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Returns the cached manifest, fetching and parsing it on first use.
    pub fn get(&mut self, fetcher: &Fetcher) -> Result<&Manifest> {
        let manifest = match self.cached.take() {
            Some(m) => m,
            None => self.fetch(fetcher)?,
        };
        Ok(self.cached.insert(manifest))
    }

    fn fetch(&self, fetcher: &Fetcher) -> Result<Manifest> {
        tracing::info!("Downloading manifest...");
        let body = fetcher.get_text(&self.url())?;
        let response = parse_response(&self.family, &body)?;
        if let Some(zip) = &response.zip_name {
            tracing::debug!("catalog package name {}", zip);
        }
        tracing::info!(
            "Manifest downloaded ({} files, {} file refs)",
            response.manifest.files.len(),
            response.manifest.file_refs.len()
        );
        Ok(response.manifest)
    }
}
