//! Adviser CRD - CustomResourceDefinitions for Cloudflare resources
//!
//! Request-body schemas of the Cloudflare API are lifted out of the public
//! OpenAPI document and turned into the `spec` schemas of three CRDs:
//!
//! | Kind              | Operation                                                      |
//! |-------------------|----------------------------------------------------------------|
//! | `AccessGroup`     | `POST /accounts/{account_id}/access/groups`                    |
//! | `CFDTunnel`       | `POST /accounts/{account_id}/cfd_tunnel`                       |
//! | `CFDTunnelConfig` | `PUT /accounts/{account_id}/cfd_tunnel/{tunnel_id}/configurations` |
//!
//! The `AccessGroup` CRD is registered as `access-groups.cloudflare.adviser.com`
//! with singular `access-group`. Manifests produced by older tooling spelled
//! it `acess-group`/`acess-groups`; clusters carrying that CRD need it
//! deleted before applying the new one.
//!
//! The document is loaded once through a [`DocumentSource`], each kind is
//! extracted and resolved independently, and the results are wrapped in a
//! Kubernetes `List` ready for `kubectl apply -f -`.
//!
//! ```rust,no_run
//! use adviser_core::{FetchOptions, HttpClient};
//! use adviser_crd::{CLOUDFLARE_OPENAPI_URL, Generator, HttpSource, OutputFormat, render};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::public(FetchOptions::default())?;
//! let source = HttpSource::new(client, CLOUDFLARE_OPENAPI_URL);
//!
//! let list = Generator::default().generate_from(&source).await?;
//! println!("{}", render(&list, OutputFormat::Json)?);
//! # Ok(())
//! # }
//! ```

pub mod access_group;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod generate;
pub mod list;
pub mod names;
pub mod source;

pub use envelope::{GROUP, SPEC_SCHEMA_POINTER, VERSION, build_envelope, set_spec_schema, spec_schema};
pub use error::{CrdError, Result};
pub use extract::{Method, ResourceKind};
pub use generate::{Generator, OutputFormat, render};
pub use list::{KubeList, ListMeta};
pub use names::ResourceNames;
pub use source::{CLOUDFLARE_OPENAPI_URL, DocumentSource, FileSource, HttpSource, source_for};
