//! Fixed user-facing strings for each supported page language.

use anyhow::bail;
use chrono::Locale;
use std::fmt;
use std::str::FromStr;

/// Language of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Tr,
    En,
}

/// The static text of one language.
#[derive(Debug)]
pub struct Messages {
    /// `lang` attribute of the host document
    pub html_lang: &'static str,
    pub fetch_failed: &'static str,
    pub no_releases: &'static str,
    pub latest_badge: &'static str,
    pub latest_marker: &'static str,
    pub archive_label: &'static str,
    pub select_placeholder: &'static str,
    pub no_description: &'static str,
    pub source_zip: &'static str,
    pub source_tar: &'static str,
    pub date_locale: Locale,
    /// strftime pattern producing day, full month name and year
    pub date_format: &'static str,
}

static TR: Messages = Messages {
    html_lang: "tr",
    fetch_failed: "Veriler alınırken bir hata oluştu.",
    no_releases: "Henüz yayınlanmış bir sürüm bulunamadı.",
    latest_badge: "Son Sürüm",
    latest_marker: "(son sürüm)",
    archive_label: "Önceki Sürümler / Archive",
    select_placeholder: "Bir sürüm seçin...",
    no_description: "Açıklama belirtilmemiş.",
    source_zip: "Source (zip)",
    source_tar: "Source (tar.gz)",
    date_locale: Locale::tr_TR,
    date_format: "%-d %B %Y",
};

static EN: Messages = Messages {
    html_lang: "en",
    fetch_failed: "An error occurred while fetching data.",
    no_releases: "No releases have been published yet.",
    latest_badge: "Latest Release",
    latest_marker: "(latest)",
    archive_label: "Previous Releases / Archive",
    select_placeholder: "Select a version...",
    no_description: "No description provided.",
    source_zip: "Source (zip)",
    source_tar: "Source (tar.gz)",
    date_locale: Locale::en_US,
    date_format: "%B %-d, %Y",
};

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Tr => &TR,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Tr => write!(f, "tr"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tr" | "tr-tr" => Ok(Language::Tr),
            "en" | "en-us" => Ok(Language::En),
            _ => bail!("Unknown language: {}. Expected tr or en.", s),
        }
    }
}
