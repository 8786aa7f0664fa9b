use anyhow::{Context, Result};
use log::debug;

use crate::config::Config;
use crate::github::{GetReleases, Release};
use crate::render::{Language, format_published};
use crate::runtime::Runtime;

/// Prints one line per release, latest first. Unlike `render`, a failed fetch is an error.
#[tracing::instrument(skip(runtime, config))]
pub async fn list<R: Runtime, G: GetReleases>(runtime: &R, config: &Config<G>) -> Result<()> {
    let site = &config.site;

    let releases = config
        .github
        .get_releases(&site.repo)
        .await
        .with_context(|| format!("Failed to fetch releases for {}", site.repo))?;

    debug!("Listing {} release(s) for {}", releases.len(), site.repo);

    let mut output = format_release_lines(&releases, site.language).join("\n");
    output.push('\n');
    runtime.print(&output)
}

/// `tag - date` per release with a marker on the latest one, or the empty-state notice.
pub fn format_release_lines(releases: &[Release], language: Language) -> Vec<String> {
    let messages = language.messages();

    if releases.is_empty() {
        return vec![messages.no_releases.to_string()];
    }

    releases
        .iter()
        .enumerate()
        .map(|(index, release)| {
            let date = format_published(release.published_at.as_deref(), language);
            if index == 0 {
                format!("{} - {} {}", release.tag_name, date, messages.latest_marker)
            } else {
                format!("{} - {}", release.tag_name, date)
            }
        })
        .collect()
}
