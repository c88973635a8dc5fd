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
#![allow(clippy::module_name_repetitions)]

//! File, HTTP and random-token operations, each exposed through both delivery
//! conventions.
//!
//! Every operation has a single-outcome form (`async fn` returning
//! [`OpsResult`]) and a callback form that runs on the tokio runtime and hands
//! the outcome to a final-argument notifier. The funny-file callback is the
//! exception: it reports through a single [`Delivered`](relay_delivery::Delivered)
//! slot and is re-exposed through [`funny_file_bridged`].
//!
//! Layout: `files.rs` (line extraction and suffixing), `http.rs` (`HttpOps`,
//! status and GitHub profile), `token.rs` (random tokens), `error.rs`.

pub mod error;
pub mod files;
pub mod http;
pub mod token;

pub use error::{FailureKind, OpsError, OpsResult};
pub use files::{
    FUNNY_SUFFIX, first_line, first_line_callback, funny_file, funny_file_bridged,
    funny_file_callback,
};
pub use http::{
    HttpOps, github_profile, github_profile_callback, http_status, http_status_callback,
};
pub use token::{TOKEN_BYTES, random_token, random_token_callback};
