//! Random token generation.

use rand_core::{OsRng, TryRngCore};
use relay_delivery::{Completion, spawn_delivery};
use tokio::task::{self, JoinHandle};
use tracing::{debug, instrument};

use crate::error::{OpsError, OpsResult};

/// Number of random bytes behind every token (40 hex characters).
pub const TOKEN_BYTES: usize = 20;

/// Generate [`TOKEN_BYTES`] bytes from the operating system CSPRNG and encode
/// them as lowercase hex.
///
/// The read runs on the blocking pool, so the caller is suspended rather than
/// the runtime thread.
///
/// # Errors
///
/// Returns [`OpsError::RandomSource`] if the OS generator fails, or
/// [`OpsError::Task`] if the blocking task does not complete.
#[instrument(name = "ops.random_token")]
pub async fn random_token() -> OpsResult<String> {
    let bytes = task::spawn_blocking(fill_random)
        .await
        .map_err(|source| OpsError::Task {
            operation: "ops.random_token",
            source,
        })??;
    let token = hex::encode(bytes);
    debug!(chars = token.len(), "random token generated");
    Ok(token)
}

/// Callback form of [`random_token`].
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn random_token_callback<C>(notify: C) -> JoinHandle<()>
where
    C: FnOnce(Completion<String, OpsError>) + Send + 'static,
{
    spawn_delivery(random_token(), notify)
}

fn fill_random() -> OpsResult<[u8; TOKEN_BYTES]> {
    let mut bytes = [0_u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|source| OpsError::RandomSource { source })?;
    Ok(bytes)
}
