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

//! Asynchronous result delivery conventions shared across the Relay workspace.
//!
//! Two conventions are supported at every operation boundary:
//! - a single eventual outcome, expressed as a future resolving to `Result<T, E>`;
//! - an error-first completion notifier, a final-argument `FnOnce` receiving a
//!   two-slot [`Completion`].
//!
//! Layout: `completion.rs` (outcome types), `notifier.rs` (one-shot completion
//! handles), `adapt.rs` (conversions between the conventions), `error.rs`.

pub mod adapt;
pub mod completion;
pub mod error;
pub mod notifier;

pub use adapt::{deliver, promisify, promisify_single_slot, spawn_delivery, spawn_single_slot};
pub use completion::{Completion, Delivered};
pub use error::DeliveryError;
pub use notifier::Notifier;
