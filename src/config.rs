use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::github::{GetReleases, GitHub, GitHubRepo};
use crate::render::Language;

/// Account shown when no repository is given.
pub const DEFAULT_OWNER: &str = "xassiver";
/// Repository shown when no repository is given.
pub const DEFAULT_REPO: &str = "timeproject";
pub use crate::github::DEFAULT_API_URL;

/// What the page shows and where the data comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub repo: GitHubRepo,
    pub api_url: String,
    pub language: Language,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repo: GitHubRepo::new(DEFAULT_OWNER, DEFAULT_REPO),
            api_url: DEFAULT_API_URL.to_string(),
            language: Language::default(),
        }
    }
}

impl SiteConfig {
    /// Builds a site config from optional command-line values, falling back to the defaults.
    pub fn new(repo: Option<&str>, api_url: Option<String>, language: Option<&str>) -> Result<Self> {
        let defaults = Self::default();

        let repo = match repo {
            Some(s) => s.parse::<GitHubRepo>()?,
            None => defaults.repo,
        };
        let language = match language {
            Some(s) => s.parse::<Language>()?,
            None => defaults.language,
        };

        Ok(Self {
            repo,
            api_url: api_url.unwrap_or(defaults.api_url),
            language,
        })
    }

    pub fn releases_url(&self) -> String {
        self.repo.releases_url(&self.api_url)
    }
}

pub struct Config<G: GetReleases> {
    pub site: SiteConfig,
    pub github: G,
}

impl Config<GitHub> {
    /// Unauthenticated client, no timeout beyond the platform default.
    pub fn new(site: SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ghrel/", env!("GHREL_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        debug!("Using GitHub API at {}", site.api_url);

        let github = GitHub::new(client, Some(site.api_url.clone()));

        Ok(Self { site, github })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_site_config_defaults() {
        let site = SiteConfig::new(None, None, None).unwrap();
        assert_eq!(site.repo, GitHubRepo::new("xassiver", "timeproject"));
        assert_eq!(site.api_url, "https://api.github.com");
        assert_eq!(site.language, Language::Tr);
        assert_eq!(
            site.releases_url(),
            "https://api.github.com/repos/xassiver/timeproject/releases"
        );
    }

    #[test]
    fn test_site_config_overrides() {
        let site = SiteConfig::new(
            Some("owner/repo"),
            Some("http://localhost:8080".into()),
            Some("en"),
        )
        .unwrap();
        assert_eq!(site.repo, GitHubRepo::new("owner", "repo"));
        assert_eq!(site.language, Language::En);
        assert_eq!(
            site.releases_url(),
            "http://localhost:8080/repos/owner/repo/releases"
        );
    }

    #[test]
    fn test_site_config_invalid_values() {
        assert!(SiteConfig::new(Some("not-a-repo"), None, None).is_err());
        assert!(SiteConfig::new(None, None, Some("xx")).is_err());
    }

    #[tokio::test]
    async fn test_config_client_sends_user_agent_without_auth() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/owner/repo/releases")
            .match_header("user-agent", mockito::Matcher::Regex("^ghrel/".into()))
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let site = SiteConfig::new(Some("owner/repo"), Some(server.url()), None).unwrap();
        let config = Config::new(site).unwrap();
        let releases = config.github.get_releases(&config.site.repo).await.unwrap();

        mock.assert_async().await;
        assert!(releases.is_empty());
    }
}
