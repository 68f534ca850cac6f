//! Query-versions command - print NAME_VERSION=tag for each repository

use adviser_core::{Credentials, FetchOptions};
use adviser_release::{GITHUB_ACCEPT, ReleaseReporter, ReporterOptions, RepoId};

use crate::error::Result;

pub async fn run(
    repos: &[String],
    api_user: Option<&str>,
    api_url: &str,
    fetch: FetchOptions,
) -> Result<()> {
    // Validate every identifier before the first request goes out
    let repos = repos
        .iter()
        .map(|repo| RepoId::parse(repo))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let credentials = api_user.and_then(Credentials::token);
    if credentials.is_none() {
        tracing::debug!("No API credentials, using anonymous GitHub access");
    }

    let reporter = ReleaseReporter::new(ReporterOptions {
        api_url: api_url.to_string(),
        credentials,
        fetch: fetch.with_accept(GITHUB_ACCEPT),
    })?;

    for line in reporter.report_all(&repos).await? {
        println!("{}", line);
    }

    Ok(())
}
