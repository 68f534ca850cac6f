//! Latest-release lookups against the GitHub REST API

use std::fmt;

use adviser_core::{Credentials, FetchOptions, HttpClient, ScopedCredentials};
use futures::future::try_join_all;
use serde::Deserialize;

use crate::error::{ReleaseError, Result};
use crate::repo::RepoId;

/// Public GitHub API endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type requested from the GitHub API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// The part of a release payload we care about
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
}

/// One `NAME_VERSION=tag` assignment
///
/// A release without a tag renders as `NAME_VERSION=` with an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    pub repo: RepoId,
    pub tag: Option<String>,
}

impl fmt::Display for VersionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.repo.version_var(),
            self.tag.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone)]
pub struct ReporterOptions {
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Optional Basic-auth credential
    pub credentials: Option<Credentials>,
    pub fetch: FetchOptions,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            credentials: None,
            fetch: FetchOptions::default().with_accept(GITHUB_ACCEPT),
        }
    }
}

/// Looks up latest releases, all repositories concurrently
pub struct ReleaseReporter {
    client: HttpClient,
    api_url: String,
}

impl ReleaseReporter {
    pub fn new(options: ReporterOptions) -> Result<Self> {
        let api_url = options.api_url.trim_end_matches('/').to_string();
        let credentials = match options.credentials {
            Some(creds) => ScopedCredentials::single(&api_url, creds),
            None => ScopedCredentials::default(),
        };

        let client = HttpClient::new(options.fetch, credentials).map_err(ReleaseError::Client)?;

        Ok(Self { client, api_url })
    }

    /// Latest release tag of one repository
    ///
    /// A non-2xx answer is only logged; its body is still searched for a
    /// `tag_name`. A JSON body without one yields `None`.
    pub async fn latest_tag(&self, repo: &RepoId) -> Result<Option<String>> {
        let url = format!("{}{}", self.api_url, repo.latest_release_path());
        let fetch_error = |source| ReleaseError::Fetch {
            repo: repo.to_string(),
            source,
        };

        let response = self.client.get(&url).await.map_err(fetch_error)?;
        if !response.is_success() {
            tracing::warn!("status: {} {}", response.url, response.status.as_u16());
        }

        let release: Release = response.json().map_err(fetch_error)?;
        if release.tag_name.is_none() {
            tracing::warn!(
                "no tag_name in latest release of {} (HTTP {})",
                repo,
                response.status.as_u16()
            );
        }
        Ok(release.tag_name)
    }

    pub async fn report(&self, repo: &RepoId) -> Result<VersionLine> {
        let tag = self.latest_tag(repo).await?;
        tracing::debug!("{} latest release is {:?}", repo, tag);
        Ok(VersionLine {
            repo: repo.clone(),
            tag,
        })
    }

    /// Report every repository; lines come back in input order. A missing
    /// tag only blanks its own line, while a transport, redirect or decode
    /// failure fails the whole batch
    pub async fn report_all(&self, repos: &[RepoId]) -> Result<Vec<VersionLine>> {
        try_join_all(repos.iter().map(|repo| self.report(repo))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_display() {
        let line = VersionLine {
            repo: RepoId::parse("cloudflare/cloudflared").unwrap(),
            tag: Some("2024.6.1".to_string()),
        };
        assert_eq!(line.to_string(), "CLOUDFLARE_CLOUDFLARED_VERSION=2024.6.1");

        let untagged = VersionLine {
            repo: RepoId::parse("gone/repo").unwrap(),
            tag: None,
        };
        assert_eq!(untagged.to_string(), "GONE_REPO_VERSION=");
    }

    #[test]
    fn test_default_options() {
        let options = ReporterOptions::default();
        assert_eq!(options.api_url, GITHUB_API_URL);
        assert_eq!(options.fetch.accept.as_deref(), Some(GITHUB_ACCEPT));
        assert_eq!(options.fetch.max_redirects, 5);
        assert!(options.credentials.is_none());
    }

    #[test]
    fn test_release_payload_tolerates_missing_tag() {
        let release: Release = serde_json::from_str(r#"{"message":"Not Found"}"#).unwrap();
        assert!(release.tag_name.is_none());
    }
}
