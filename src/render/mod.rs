//! HTML rendering of a release list.
//!
//! Everything here is a pure function from release data to markup. The
//! renderer splits the list into the latest release, shown as a full card,
//! and the archive, offered through a dropdown.

pub mod card;
pub mod date;
pub mod i18n;
pub mod markdown;
mod page;

use html_escape::{encode_double_quoted_attribute, encode_safe};
use std::fmt::Display;

use crate::github::Release;
use crate::selector::{ArchiveSelector, Selection};

pub use card::{DownloadEntry, DownloadKind, ReleaseCard, format_size};
pub use date::{INVALID_DATE, format_date, format_published};
pub use i18n::{Language, Messages};
pub use markdown::render_markdown;
pub use page::render_page;

/// Renders the content area for a fetched release list with nothing selected.
pub fn render_releases(releases: &[Release], language: Language) -> String {
    match releases.split_first() {
        None => render_empty(language),
        Some((latest, older)) => render_listing(latest, &ArchiveSelector::new(older), language),
    }
}

/// The notice shown when the repository has no releases.
pub fn render_empty(language: Language) -> String {
    format!(
        "<div class=\"loading-container\">{}</div>\n",
        encode_safe(language.messages().no_releases)
    )
}

/// Renders the latest card followed by the archive section, if there is an archive.
pub fn render_listing(latest: &Release, archive: &ArchiveSelector<'_>, language: Language) -> String {
    let mut html = String::new();

    html.push_str("<div id=\"latest-container\">\n");
    html.push_str(&ReleaseCard::new(latest, true, language).render());
    html.push_str("</div>\n");

    if !archive.is_empty() {
        html.push_str(&render_archive(archive, language));
    }

    html
}

/// The dropdown of older releases, the display slot below it, and one
/// pre-rendered card template per entry for the in-page change handler.
fn render_archive(archive: &ArchiveSelector<'_>, language: Language) -> String {
    let messages = language.messages();
    let selection = archive.selection();
    let mut html = String::new();

    html.push_str("<div class=\"archive-section\">\n<div class=\"archive-controls\">\n");
    html.push_str(&format!(
        "<div class=\"archive-label\">{}</div>\n",
        encode_safe(messages.archive_label)
    ));
    html.push_str("<div class=\"dropdown-wrapper\">\n");
    html.push_str("<select id=\"version-select\" class=\"version-select\">\n");
    html.push_str(&format!(
        "<option value=\"\" disabled{}>{}</option>\n",
        selected_attr(selection == Selection::Unselected),
        encode_safe(messages.select_placeholder)
    ));
    for (index, release) in archive.options() {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{} - {}</option>\n",
            index,
            selected_attr(selection == Selection::Selected(index)),
            encode_safe(&release.tag_name),
            encode_safe(&format_published(release.published_at.as_deref(), language))
        ));
    }
    html.push_str("</select>\n</div>\n</div>\n");

    html.push_str("<div id=\"older-release-display\">");
    if let Some(release) = archive.selected() {
        html.push('\n');
        html.push_str(&ReleaseCard::new(release, false, language).render());
    }
    html.push_str("</div>\n");

    for (index, release) in archive.options() {
        html.push_str(&format!(
            "<template id=\"{}\">\n{}</template>\n",
            encode_double_quoted_attribute(&template_id(index)),
            ReleaseCard::new(release, false, language).render()
        ));
    }

    html.push_str("</div>\n");
    html
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

/// Element id of the card template for archive entry `index`.
pub fn template_id(index: usize) -> String {
    format!("release-{}", index)
}

/// The terminal error panel: the language's fixed message plus the raw error text.
pub fn render_error(error: &dyn Display, language: Language) -> String {
    format!(
        "<div class=\"error-container\">\n\
         <i class=\"fa-solid fa-triangle-exclamation\"></i>\n\
         <p>{}</p>\n\
         <small>{}</small>\n\
         </div>\n",
        encode_safe(language.messages().fetch_failed),
        encode_safe(&error.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::FetchError;

    fn release(tag: &str, published_at: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            name: Some(format!("Release {}", tag)),
            published_at: Some(published_at.to_string()),
            zipball_url: Some(format!("https://api.github.com/zipball/{}", tag)),
            tarball_url: Some(format!("https://api.github.com/tarball/{}", tag)),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Release> {
        vec![
            release("v3.0.0", "2024-03-01T00:00:00Z"),
            release("v2.0.0", "2024-02-01T00:00:00Z"),
            release("v1.0.0", "2024-01-01T00:00:00Z"),
        ]
    }

    fn latest_part(html: &str) -> &str {
        let end = html.find("<div class=\"archive-section\">").unwrap_or(html.len());
        &html[..end]
    }

    #[test]
    fn test_empty_list_renders_notice_only() {
        let html = render_releases(&[], Language::Tr);
        assert!(html.contains("Henüz yayınlanmış bir sürüm bulunamadı."));
        assert!(!html.contains("<select"));
        assert!(!html.contains("release-card"));
    }

    #[test]
    fn test_first_release_is_latest() {
        let releases = sample();
        let html = render_releases(&releases, Language::Tr);

        assert_eq!(html.matches("class=\"latest-badge\"").count(), 1);
        assert!(latest_part(&html).contains(r#"<span class="release-tag">v3.0.0</span>"#));
        assert!(!latest_part(&html).contains("v2.0.0"));
    }

    #[test]
    fn test_archive_options_match_older_releases() {
        let releases = sample();
        let html = render_releases(&releases, Language::En);

        // Placeholder plus one option per older release
        assert_eq!(html.matches("<option value=\"").count(), releases.len());
        assert!(html.contains(r#"<option value="" disabled selected>Select a version...</option>"#));

        let first = html.find(r#"<option value="0">v2.0.0 - February 1, 2024</option>"#);
        let second = html.find(r#"<option value="1">v1.0.0 - January 1, 2024</option>"#);
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(first < second);
    }

    #[test]
    fn test_unselected_archive_has_empty_display() {
        let html = render_releases(&sample(), Language::Tr);
        assert!(html.contains("<div id=\"older-release-display\"></div>"));
        assert!(html.contains("<template id=\"release-0\">"));
        assert!(html.contains("<template id=\"release-1\">"));
    }

    #[test]
    fn test_single_release_has_no_archive() {
        let releases = vec![release("v1.0.0", "2024-01-01T00:00:00Z")];
        let html = render_releases(&releases, Language::Tr);
        assert!(html.contains("latest-badge"));
        assert!(!html.contains("<select"));
        assert!(!html.contains("archive-section"));
    }

    #[test]
    fn test_selection_renders_chosen_card_and_keeps_latest() {
        let releases = sample();
        let (latest, older) = releases.split_first().unwrap();

        let before = render_listing(latest, &ArchiveSelector::new(older), Language::Tr);

        for index in 0..older.len() {
            let mut selector = ArchiveSelector::new(older);
            selector.select(index).unwrap();
            let after = render_listing(latest, &selector, Language::Tr);

            assert_eq!(latest_part(&before), latest_part(&after));

            let display_start = after.find("<div id=\"older-release-display\">").unwrap();
            let display = &after[display_start..];
            let display = &display[..display.find("<template").unwrap()];
            assert!(display.contains(&format!(
                "<span class=\"release-tag\">{}</span>",
                older[index].tag_name
            )));
            assert!(!display.contains("latest-badge"));
            assert!(after.contains(&format!("<option value=\"{}\" selected>", index)));
            assert!(!after.contains("disabled selected"));
        }
    }

    #[test]
    fn test_selected_card_replaces_previous() {
        let releases = sample();
        let (latest, older) = releases.split_first().unwrap();
        let mut selector = ArchiveSelector::new(older);
        selector.select(0).unwrap();
        selector.select(1).unwrap();

        let html = render_listing(latest, &selector, Language::Tr);
        let display_start = html.find("<div id=\"older-release-display\">").unwrap();
        let display = &html[display_start..];
        let display = &display[..display.find("<template").unwrap()];
        assert_eq!(display.matches("release-card").count(), 1);
        assert!(display.contains("v1.0.0"));
        assert!(!display.contains("v2.0.0"));
    }

    #[test]
    fn test_script_injection_in_name_is_inert() {
        let mut releases = sample();
        releases[0].name = Some("<script>alert(1)</script>".into());
        releases[1].tag_name = "<script>alert(2)</script>".into();

        let html = render_releases(&releases, Language::Tr);

        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(2)"));
    }

    #[test]
    fn test_error_panel_not_found() {
        let html = render_error(&FetchError::NotFound, Language::Tr);
        assert!(html.contains("error-container"));
        assert!(html.contains("Veriler alınırken bir hata oluştu."));
        assert!(html.contains("Repository not found or has no releases."));
    }

    #[test]
    fn test_error_panel_api_error() {
        let html = render_error(&FetchError::Api(500), Language::En);
        assert!(html.contains("An error occurred while fetching data."));
        assert!(html.contains("GitHub API Error: 500"));
    }

    #[test]
    fn test_error_panel_escapes_message() {
        let html = render_error(&FetchError::Network("<b>boom</b>".into()), Language::En);
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;boom"));
    }
}
