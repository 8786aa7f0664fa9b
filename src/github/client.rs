use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::error::FetchError;
use super::repo::GitHubRepo;
use super::types::Release;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetch the first page of releases, in the order the API returns them.
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>, FetchError>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>, FetchError> {
        GitHub::fetch_releases(repo, &self.client, &self.api_url).await
    }
}

impl GitHub {
    /// Issues a single GET to the releases endpoint. No pagination, no retry.
    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_releases(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<Vec<Release>, FetchError> {
        let url = repo.releases_url(api_url);

        debug!("Fetching releases from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GitHub API responded with {}", status);
            return Err(FetchError::from_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let releases: Vec<Release> = serde_json::from_str(&body)?;

        debug!("Fetched {} release(s) for {}", releases.len(), repo);

        Ok(releases)
    }
}
