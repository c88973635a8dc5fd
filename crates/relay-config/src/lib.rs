#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Environment-driven settings for the Relay operations and binaries.
//!
//! Layout: `model.rs` (typed settings), `loader.rs` (environment lookup),
//! `validate.rs` (field validation), `defaults.rs`, `error.rs`.

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use defaults::{
    DEFAULT_GITHUB_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_USER_AGENT, ENV_GITHUB_API_URL,
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_USER_AGENT,
};
pub use error::{ConfigError, ConfigResult};
pub use model::RelaySettings;
