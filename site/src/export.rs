//! Static export: every route pre-rendered to a file, plus the public assets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ui::{PageContext, Route, render_page};
use walkdir::WalkDir;

use crate::config::{ConfigError, SiteConfig};

#[derive(Debug, Default)]
pub struct ExportReport {
    /// Written pages, relative to the export root.
    pub pages: Vec<PathBuf>,
    pub assets: usize,
}

pub fn export(config: &SiteConfig, out_dir: &Path, year: i32) -> Result<ExportReport> {
    if !config.is_export() {
        return Err(ConfigError::NotExportMode.into());
    }
    config.check_images()?;

    let shell = config.shell(year);
    let mut report = ExportReport::default();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for route in Route::ALL {
        let path = route.path(config.trailing_slash);
        let file = route.export_file(config.trailing_slash);
        let target = out_dir.join(&file);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let html = render_page(route, PageContext::new(path.as_str()), &shell);
        fs::write(&target, html).with_context(|| format!("writing {}", target.display()))?;

        log::info!("{path} -> {}", target.display());
        report.pages.push(file);
    }

    if config.public_dir.is_dir() {
        report.assets = copy_public(&config.public_dir, out_dir)?;
    } else {
        log::debug!("no public dir at {}", config.public_dir.display());
    }

    Ok(report)
}

/// Mirror `from` into `to`, returning the number of files copied.
fn copy_public(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from) {
        let entry = entry.with_context(|| format!("walking {}", from.display()))?;
        let rel = entry.path().strip_prefix(from)?;
        let target = to.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("copying {}", entry.path().display()))?;
            copied += 1;
        }
    }

    log::info!("copied {copied} public files");
    Ok(copied)
}
