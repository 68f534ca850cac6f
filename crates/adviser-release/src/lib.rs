//! Adviser Release - latest GitHub release versions for CI
//!
//! For every `owner/name` the latest release is looked up and printed as an
//! environment assignment, ready to be appended to `$GITHUB_ENV`:
//!
//! ```text
//! CLOUDFLARE_CLOUDFLARED_VERSION=2024.6.1
//! ```
//!
//! ```rust,no_run
//! use adviser_release::{ReleaseReporter, ReporterOptions, RepoId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reporter = ReleaseReporter::new(ReporterOptions::default())?;
//! let repos = [RepoId::parse("cloudflare/cloudflared")?];
//!
//! for line in reporter.report_all(&repos).await? {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repo;
pub mod reporter;

pub use error::{ReleaseError, Result};
pub use repo::{RepoId, normalize};
pub use reporter::{
    GITHUB_ACCEPT, GITHUB_API_URL, Release, ReleaseReporter, ReporterOptions, VersionLine,
};
