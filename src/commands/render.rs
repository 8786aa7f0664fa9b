use anyhow::{Result, bail};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::github::{GetReleases, Release};
use crate::render::{Language, render_empty, render_error, render_listing, render_page};
use crate::runtime::Runtime;
use crate::selector::ArchiveSelector;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Where to write the page; stdout when absent
    pub output: Option<PathBuf>,
    /// Archive entry to show pre-selected
    pub select: Option<usize>,
}

/// Fetches the release list and writes the complete page.
///
/// A failed fetch does not fail the command: the page then carries the
/// error panel instead of the releases.
#[tracing::instrument(skip(runtime, config, options))]
pub async fn render<R: Runtime, G: GetReleases>(
    runtime: &R,
    config: &Config<G>,
    options: &RenderOptions,
) -> Result<()> {
    let site = &config.site;

    let (content, has_archive) = match config.github.get_releases(&site.repo).await {
        Ok(releases) => {
            info!("Fetched {} release(s) for {}", releases.len(), site.repo);
            let content = render_content(&releases, options.select, site.language)?;
            (content, releases.len() > 1)
        }
        Err(e) => {
            warn!("Failed to fetch releases for {}: {}", site.repo, e);
            (render_error(&e, site.language), false)
        }
    };

    let page = render_page(site, &content, has_archive);
    write_page(runtime, options.output.as_deref(), &page)
}

/// Renders the content area for a fetched list, optionally with an archive entry selected.
pub fn render_content(
    releases: &[Release],
    select: Option<usize>,
    language: Language,
) -> Result<String> {
    let Some((latest, older)) = releases.split_first() else {
        if let Some(index) = select {
            bail!("Cannot select archived release {}: there are no releases", index);
        }
        return Ok(render_empty(language));
    };

    let mut archive = ArchiveSelector::new(older);
    if let Some(index) = select {
        archive.select(index)?;
    }

    Ok(render_listing(latest, &archive, language))
}

fn write_page<R: Runtime>(runtime: &R, output: Option<&Path>, page: &str) -> Result<()> {
    let Some(path) = output else {
        return runtime.print(page);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !runtime.exists(parent) {
            debug!("Creating output directory {}", parent.display());
            runtime.create_dir_all(parent)?;
        }
    }

    runtime.write(path, page.as_bytes())?;
    info!("Wrote release page to {}", path.display());
    Ok(())
}
