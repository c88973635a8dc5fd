//! Command handlers grouped by concern.
//!
//! Each handler resolves to a JSON value; rendering happens in `cli.rs`.

pub(crate) mod files;
pub(crate) mod network;
pub(crate) mod settings;
pub(crate) mod token;
