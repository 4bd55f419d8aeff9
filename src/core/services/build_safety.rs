//! Build-safety gate
//!
//! Guards against a known failure mode of the site build: the Tailwind PostCSS
//! plugin silently dropping out, after which every style disappears while the
//! build still succeeds. Three independent checks:
//!
//! - [`BuildSafetyChecker::check_critical_files`] - PostCSS config deleted or gutted
//! - [`BuildSafetyChecker::check_next_config_safety`] - build errors silenced
//! - [`BuildSafetyChecker::check_css_bundle`] - compiled CSS suspiciously small

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildSafetyConfig;
use crate::core::models::{Finding, Report};
use crate::core::ports::StagedChangeInspector;
use crate::core::services::BYPASS_HINT;
use crate::error::{GateError, Result};
use crate::paths;

/// Command name of the critical-files check
pub const CHECK_CRITICAL_FILES: &str = "check-critical-files";

/// Command name of the framework-config check
pub const CHECK_NEXT_CONFIG_SAFETY: &str = "check-next-config-safety";

/// Command name of the bundle-size check
pub const CHECK_CSS_BUNDLE: &str = "check-css-bundle";

/// Evaluates the build-safety policy for one working directory
#[derive(Debug)]
pub struct BuildSafetyChecker<I> {
    inspector: I,
    config: BuildSafetyConfig,
    root: PathBuf,
}

impl<I: StagedChangeInspector> BuildSafetyChecker<I> {
    /// Create a checker rooted at `root`, the repository's working directory
    pub fn new(inspector: I, config: BuildSafetyConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            inspector,
            config,
            root: root.into(),
        }
    }

    /// Block if the PostCSS config is staged for deletion or lost its plugin
    ///
    /// A failing deletion query is ignored: outside a repository there is
    /// nothing staged to delete. Failures while reading the content are errors.
    pub fn check_critical_files(&self) -> Result<Report> {
        let cfg = &self.config;
        let name = cfg.postcss_config.display();
        let mut report = Report::new(CHECK_CRITICAL_FILES, "Critical config protection")
            .with_remediation(BYPASS_HINT);

        let deleted = match self.inspector.list_deleted_paths() {
            Ok(deleted) => deleted.contains(&cfg.postcss_config),
            Err(e) => {
                log::debug!("skipping deletion check: {e}");
                false
            },
        };

        if deleted {
            report.push(Finding::block(format!(
                "{name} is staged for DELETION.\n   \
                 This file is REQUIRED for Tailwind CSS compilation.\n   \
                 Without it, all styles disappear ({}KB -> 4KB).",
                cfg.expected_bundle_kib
            )));
        } else if self.root.join(&cfg.postcss_config).exists() {
            let content = self.effective_content(&cfg.postcss_config)?;
            if !content.contains(&cfg.required_plugin) {
                report.push(Finding::block(format!(
                    "{name} no longer contains '{}'.\n   \
                     This plugin is REQUIRED for Tailwind CSS v4 compilation.\n   \
                     Without it, all styles disappear.",
                    cfg.required_plugin
                )));
            }
        } else {
            log::debug!("{name} not present, nothing to protect");
        }

        Ok(report)
    }

    /// Block if the framework config contains the forbidden directive
    pub fn check_next_config_safety(&self) -> Result<Report> {
        let cfg = &self.config;
        let name = cfg.next_config.display();
        let mut report =
            Report::new(CHECK_NEXT_CONFIG_SAFETY, "Build config safety").with_remediation(BYPASS_HINT);

        if !self.root.join(&cfg.next_config).exists() {
            log::debug!("{name} not present, nothing to check");
            return Ok(report);
        }

        let content = self.effective_content(&cfg.next_config)?;
        if content.contains(&cfg.forbidden_directive) {
            report.push(Finding::block(format!(
                "{name} contains '{}'.\n   \
                 This silences real build failures and ships broken code.\n   \
                 Fix the actual build error instead.",
                cfg.forbidden_directive
            )));
        }

        Ok(report)
    }

    /// Block if the compiled stylesheet bundle is below the size threshold
    ///
    /// A missing build directory only informs and an empty one only warns:
    /// neither proves the plugin is broken.
    pub fn check_css_bundle(&self) -> Result<Report> {
        let cfg = &self.config;
        let dir = paths::resolve(&self.root, &cfg.css_dir);
        let mut report = Report::new(CHECK_CSS_BUNDLE, "CSS bundle size").with_remediation(format!(
            "Check {} and globals.css.\n\n   {BYPASS_HINT}",
            cfg.postcss_config.display()
        ));

        if !dir.exists() {
            report.push(Finding::info(format!(
                "No build found in {}. Run 'npm run build' first.",
                cfg.css_dir.display()
            )));
            return Ok(report);
        }

        let Some(total) = measure_artifacts(&dir, &cfg.css_glob)? else {
            report.push(Finding::warn(format!(
                "No CSS files found in {}/.\n   Tailwind CSS may not be compiling.",
                cfg.css_dir.display()
            )));
            return Ok(report);
        };

        let size = kib(total);
        log::debug!("css bundle: {total} bytes across {}", dir.display());

        if total < cfg.min_bundle_bytes {
            report.push(Finding::block(format!(
                "Total CSS bundle is only {size:.1}KB.\n   \
                 Expected ~{}KB+ with Tailwind CSS.\n   \
                 This likely means Tailwind is NOT compiling.",
                cfg.expected_bundle_kib
            )));
        } else {
            report.push(Finding::info(format!("CSS bundle size: {size:.1}KB (OK)")));
        }

        Ok(report)
    }

    /// Staged version if the file is staged, otherwise the working copy
    fn effective_content(&self, path: &Path) -> Result<String> {
        if self.inspector.list_modified_paths()?.contains(path) {
            log::debug!("reading staged version of {}", path.display());
            return self.inspector.read_staged_blob(path);
        }

        let full = self.root.join(path);
        log::debug!("reading working copy of {}", full.display());
        fs::read_to_string(&full).map_err(|e| GateError::read(full, e))
    }
}

/// Total size of the files matching `pattern` in `dir`, or `None` if there are none
fn measure_artifacts(dir: &Path, pattern: &str) -> Result<Option<u64>> {
    let full = format!("{}/{pattern}", glob::Pattern::escape(&dir.to_string_lossy()));

    let mut found = false;
    let mut total = 0_u64;
    for entry in glob::glob(&full)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("skipping unreadable artifact: {e}");
                continue;
            },
        };
        let meta = fs::metadata(&path).map_err(|e| GateError::read(&path, e))?;
        if meta.is_file() {
            found = true;
            total += meta.len();
        }
    }

    Ok(found.then_some(total))
}

#[allow(clippy::cast_precision_loss)]
fn kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}
