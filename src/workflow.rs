use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::cache::{CacheStats, TranslationCache};
use crate::cli::Args;
use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::rewrite::rewrite;
use crate::segment::contains_hangul;
use crate::translate::{LanguagePair, Translator, TranslatorFactory};
use crate::walker::source_files;

/// Totals reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files matching the extension filter
    pub files_seen: usize,
    /// Files written, or that would have been written in dry-run mode
    pub files_modified: usize,
    /// Segments looked up across all files
    pub segments_translated: usize,
    pub dry_run: bool,
    pub cache: CacheStats,
}

impl RunSummary {
    pub fn describe(&self) -> String {
        format!(
            "Processed {} files. {} {} file(s).",
            self.files_seen,
            if self.dry_run { "Would modify" } else { "Modified" },
            self.files_modified
        )
    }
}

/// Drives a sweep: walk the tree, rewrite each file, write or report
pub struct Workflow {
    translator: Box<dyn Translator>,
    languages: LanguagePair,
    cache: TranslationCache,
}

impl Workflow {
    pub fn new(translator: Box<dyn Translator>, languages: LanguagePair) -> Self {
        Self {
            translator,
            languages,
            cache: TranslationCache::new(),
        }
    }

    /// Fail with `RootNotFound` unless `root` exists
    ///
    /// A root that is a regular file is accepted; the walk over it finds nothing.
    pub fn validate_root(root: &Path) -> Result<PathBuf> {
        if !root.exists() {
            return Err(SweepError::RootNotFound(root.to_path_buf()));
        }
        Ok(std::path::absolute(root)?)
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Process every matching file under `root`
    ///
    /// `extensions` must already be normalized (lowercase, leading dot).
    pub async fn run(&mut self, root: &Path, extensions: &[String], dry_run: bool) -> Result<RunSummary> {
        let root = Self::validate_root(root)?;
        info!(
            "Scanning {} for {} using {} ({} -> {})",
            root.display(),
            extensions.join(" "),
            self.translator.name(),
            self.languages.source,
            self.languages.target
        );

        let mut summary = RunSummary {
            dry_run,
            ..RunSummary::default()
        };

        for path in source_files(&root, extensions)? {
            summary.files_seen += 1;
            let (modified, segments) = self.process_file(&root, &path, dry_run).await?;
            summary.segments_translated += segments;
            if modified {
                summary.files_modified += 1;
            }
        }

        summary.cache = self.cache.stats();
        info!("{}", summary.describe());
        debug!(
            "Translation cache: {} entries, {} hits, {} misses, {} failures",
            self.cache.len(),
            summary.cache.hits,
            summary.cache.misses,
            summary.cache.failures
        );

        Ok(summary)
    }

    /// Rewrite one file; returns whether it changed and how many segments it had
    pub async fn process_file(&mut self, root: &Path, path: &Path, dry_run: bool) -> Result<(bool, usize)> {
        let bytes = fs::read(path).await?;
        let original = String::from_utf8(bytes).map_err(|source| SweepError::Utf8 {
            path: path.to_path_buf(),
            source,
        })?;

        if !contains_hangul(&original) {
            return Ok((false, 0));
        }

        let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
        debug!("Translating segments in {}", rel.display());

        let result = rewrite(&original, &mut self.cache, self.translator.as_ref(), &self.languages).await;
        if !result.changed {
            return Ok((false, result.segments));
        }

        if dry_run {
            info!("[DRY-RUN] Would update {}", rel.display());
        } else {
            fs::write(path, result.text.as_bytes()).await?;
            info!("Updated {}", rel.display());
        }

        Ok((true, result.segments))
    }
}

/// Validate the root, then the translator, then sweep the tree
///
/// The root is checked first so a typo in `--root` is reported without
/// touching the network. Nothing is read or written until both checks pass.
pub async fn sweep(args: &Args, config: &Config) -> Result<RunSummary> {
    let root = Workflow::validate_root(&args.root)?;

    let translator = TranslatorFactory::create_translator(&config.translate)?;
    translator.check_availability().await?;
    info!("Using {} translator", translator.name());

    let languages = LanguagePair::new(
        config.translate.source_language.clone(),
        config.translate.target_language.clone(),
    );
    let extensions = config.scan.normalized_extensions();

    let mut workflow = Workflow::new(translator, languages);
    let summary = workflow.run(&root, &extensions, args.dry_run).await?;

    if summary.cache.failures > 0 {
        info!(
            "{} phrase(s) could not be translated and were left unchanged",
            summary.cache.failures
        );
    }

    Ok(summary)
}
