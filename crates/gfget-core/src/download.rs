//! Materializes one font family on disk: inline metadata first, then the
//! referenced font binaries.
//!
//! Everything is sequential and stops at the first error; files written
//! before the failure stay on disk.

use crate::error::{Error, Result};
use crate::http::Fetcher;
use crate::manifest::{ManifestSource, DEFAULT_CATALOG_URL};
use crate::skip::SkipRule;
use crate::workdir;
use std::path::{Path, PathBuf};

/// Counts for one run, logged when the run finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub meta_files: usize,
    pub font_files: usize,
    pub skipped: usize,
    pub bytes: u64,
}

/// Downloader for a single family.
#[derive(Debug)]
pub struct FontDownload {
    family: String,
    workdir: PathBuf,
    skip: SkipRule,
    fetcher: Fetcher,
    manifest: ManifestSource,
}

impl FontDownload {
    /// Output goes to a directory named after `family` in the current directory.
    pub fn new(family: impl Into<String>, skip: SkipRule) -> Self {
        let family = family.into();
        Self {
            workdir: PathBuf::from(&family),
            manifest: ManifestSource::new(family.clone(), DEFAULT_CATALOG_URL),
            family,
            skip,
            fetcher: Fetcher::default(),
        }
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    pub fn with_catalog_url(mut self, catalog_url: impl Into<String>) -> Self {
        self.manifest = ManifestSource::new(self.family.clone(), catalog_url);
        self
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Writes metadata, then fonts.
    pub fn download(&mut self) -> Result<DownloadSummary> {
        tracing::info!("Downloading {}", self.family);
        let mut summary = DownloadSummary::default();
        self.write_metafiles(&mut summary)?;
        self.download_font_files(&mut summary)?;
        tracing::info!(
            "{} done: {} meta files, {} font files ({} bytes), {} skipped, in {}",
            self.family,
            summary.meta_files,
            summary.font_files,
            summary.bytes,
            summary.skipped,
            self.workdir.display()
        );
        Ok(summary)
    }

    /// Writes every inline manifest file under the working directory.
    pub fn write_metafiles(&mut self, summary: &mut DownloadSummary) -> Result<()> {
        self.check_workdir()?;
        let manifest = self.manifest.get(&self.fetcher)?;
        tracing::info!("Writing meta files...");
        std::fs::create_dir_all(&self.workdir)
            .map_err(|e| Error::io("create directory", &self.workdir, e))?;
        for file in &manifest.files {
            let path = workdir::resolve(&self.workdir, &file.filename)?;
            workdir::write_file(&path, file.contents.as_bytes())?;
            tracing::debug!("wrote {}", path.display());
            summary.meta_files += 1;
        }
        tracing::info!("Meta files written");
        Ok(())
    }

    /// Fetches every file reference not excluded by the skip rule.
    pub fn download_font_files(&mut self, summary: &mut DownloadSummary) -> Result<()> {
        self.check_workdir()?;
        let manifest = self.manifest.get(&self.fetcher)?;
        tracing::info!("Downloading font files...");
        for file in &manifest.file_refs {
            if self.skip.matches(&file.filename) {
                tracing::debug!("skipping {}", file.filename);
                summary.skipped += 1;
                continue;
            }
            let path = workdir::resolve(&self.workdir, &file.filename)?;
            workdir::ensure_parent(&path)?;
            let data = self.fetcher.get_bytes(&file.url)?;
            workdir::write_file(&path, &data)?;
            tracing::debug!("wrote {} ({} bytes)", path.display(), data.len());
            summary.font_files += 1;
            summary.bytes += data.len() as u64;
        }
        tracing::info!("Font files downloaded");
        Ok(())
    }

    fn check_workdir(&self) -> Result<()> {
        if self.workdir.as_os_str().is_empty() {
            return Err(Error::EmptyWorkdir);
        }
        Ok(())
    }
}
