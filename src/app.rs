//! One generation run: generate, then write.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::SiteGenConfig;
use crate::error::Result;
use crate::generation::generate_html;
use crate::output::save_html;
use crate::provider::CompletionProvider;

/// Generate the page described by `cli.prompt` and write it to `cli.output`.
///
/// Nothing is written when generation fails. Returns the written path.
pub async fn run(
    cli: &Cli,
    config: &SiteGenConfig,
    provider: &dyn CompletionProvider,
) -> Result<PathBuf> {
    let html = generate_html(provider, config, &cli.prompt, &cli.model).await?;
    save_html(&html, &cli.output)?;
    Ok(cli.output.clone())
}

/// The line printed after a successful run.
pub fn confirmation(path: &Path) -> String {
    format!("Generated {}", path.display())
}
