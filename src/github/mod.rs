//! GitHub REST API access: repository ids, release models and the release fetcher.

mod client;
mod error;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetReleases, GitHub};
#[cfg(test)]
pub use client::MockGetReleases;
pub use error::FetchError;
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};
