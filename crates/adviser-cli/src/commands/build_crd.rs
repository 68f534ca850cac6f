//! Build-crd command - generate the Cloudflare CRD list

use std::path::Path;

use adviser_core::{FetchOptions, HttpClient};
use adviser_crd::{Generator, OutputFormat, render, source_for};
use adviser_schema::ResolveOptions;
use console::style;

use crate::error::Result;

/// Generate the CRDs from `source` and write them to `output` or stdout
pub async fn run(
    source: &str,
    output: Option<&Path>,
    format: OutputFormat,
    max_depth: usize,
    fetch: FetchOptions,
) -> Result<()> {
    let client = HttpClient::public(fetch)?;
    let source = source_for(source, client);
    tracing::debug!("Loading OpenAPI document from {}", source.describe());

    let generator = Generator::new(ResolveOptions { max_depth });
    let list = generator.generate_from(source.as_ref()).await?;
    let rendered = render(&list, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, with_newline(rendered)).await?;
            eprintln!(
                "{} Wrote {} CRDs to {}",
                style("✓").green().bold(),
                list.len(),
                path.display()
            );
        }
        None => print!("{}", with_newline(rendered)),
    }

    Ok(())
}

fn with_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_newline() {
        assert_eq!(with_newline("{}".to_string()), "{}\n");
        assert_eq!(with_newline("a: 1\n".to_string()), "a: 1\n");
    }
}
