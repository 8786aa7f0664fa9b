//! Release card view model and markup.

use html_escape::{encode_double_quoted_attribute, encode_safe};

use crate::github::Release;

use super::date::format_published;
use super::i18n::Language;
use super::markdown::render_markdown;

const MIB: f64 = 1024.0 * 1024.0;

/// Formats a byte count in mebibytes with two decimals, e.g. `1.50 MB`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    /// A file uploaded to the release
    Asset,
    /// A source archive generated by GitHub
    Source,
}

/// One entry of a card's download row.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadEntry {
    pub kind: DownloadKind,
    pub label: String,
    pub url: String,
    /// Hover text; the formatted size for assets
    pub title: Option<String>,
}

impl DownloadEntry {
    fn icon(&self) -> &'static str {
        match self.kind {
            DownloadKind::Asset => "fa-solid fa-download",
            DownloadKind::Source => "fa-solid fa-file-zipper",
        }
    }

    fn render(&self) -> String {
        let title = self
            .title
            .as_deref()
            .map(|title| format!(" title=\"{}\"", encode_double_quoted_attribute(title)))
            .unwrap_or_default();

        format!(
            "<a href=\"{}\" class=\"asset-button\"{}><i class=\"{}\"></i> {}</a>\n",
            encode_double_quoted_attribute(&self.url),
            title,
            self.icon(),
            encode_safe(&self.label)
        )
    }
}

/// Everything a release card displays, resolved from one [`Release`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseCard {
    pub is_latest: bool,
    pub badge: Option<&'static str>,
    pub display_name: String,
    pub tag_name: String,
    pub published: String,
    /// Trusted HTML produced from the Markdown body
    pub body_html: String,
    pub downloads: Vec<DownloadEntry>,
}

impl ReleaseCard {
    pub fn new(release: &Release, is_latest: bool, language: Language) -> Self {
        let messages = language.messages();

        let downloads = if release.assets.is_empty() {
            vec![
                DownloadEntry {
                    kind: DownloadKind::Source,
                    label: messages.source_zip.to_string(),
                    url: release.zipball_url.clone().unwrap_or_default(),
                    title: None,
                },
                DownloadEntry {
                    kind: DownloadKind::Source,
                    label: messages.source_tar.to_string(),
                    url: release.tarball_url.clone().unwrap_or_default(),
                    title: None,
                },
            ]
        } else {
            release
                .assets
                .iter()
                .map(|asset| DownloadEntry {
                    kind: DownloadKind::Asset,
                    label: asset.name.clone(),
                    url: asset.browser_download_url.clone(),
                    title: Some(format_size(asset.size)),
                })
                .collect()
        };

        Self {
            is_latest,
            badge: is_latest.then_some(messages.latest_badge),
            display_name: release.display_name().to_string(),
            tag_name: release.tag_name.clone(),
            published: format_published(release.published_at.as_deref(), language),
            body_html: render_markdown(release.body.as_deref(), language),
            downloads,
        }
    }

    /// Renders the card. Plain-text fields and URLs are escaped, the body is not.
    pub fn render(&self) -> String {
        let mut html = String::from("<div class=\"release-card\">\n");

        if let Some(badge) = self.badge {
            html.push_str(&format!(
                "<div class=\"latest-badge\">{}</div>\n",
                encode_safe(badge)
            ));
        }

        html.push_str("<div class=\"release-header\">\n<div class=\"release-title-group\">\n");
        html.push_str(&format!(
            "<div class=\"release-name\">{}</div>\n<span class=\"release-tag\">{}</span>\n</div>\n",
            encode_safe(&self.display_name),
            encode_safe(&self.tag_name)
        ));
        html.push_str(&format!(
            "<div class=\"release-date\"><i class=\"fa-regular fa-calendar\"></i> {}</div>\n</div>\n",
            encode_safe(&self.published)
        ));

        html.push_str(&format!(
            "<div class=\"release-body\">{}</div>\n",
            self.body_html
        ));

        html.push_str("<div class=\"assets-section\">\n");
        for entry in &self.downloads {
            html.push_str(&entry.render());
        }
        html.push_str("</div>\n</div>\n");

        html
    }
}
