//! sitegen — generate a static HTML page from a natural-language prompt.
//!
//! The prompt is sent to a chat-completion service in a fixed two-message
//! conversation, and the first completion's text is written to disk verbatim.
//!
//! # Quick Start
//!
//! ```no_run
//! use sitegen::config::SiteGenConfig;
//! use sitegen::generation::{generate_html, DEFAULT_MODEL};
//! use sitegen::provider::OpenAiProvider;
//!
//! # async fn example() -> sitegen::error::Result<()> {
//! let config = SiteGenConfig::from_env();
//! let provider = OpenAiProvider::new(config.base_url().map(str::to_string))?;
//! let html = generate_html(&provider, &config, "A sleek portfolio for a designer", DEFAULT_MODEL).await?;
//! sitegen::output::save_html(&html, std::path::Path::new("portfolio.html"))?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod output;
pub mod provider;
pub mod types;
