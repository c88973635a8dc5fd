//! File-backed operations: first-line extraction and the "funny file" suffixer.

use std::path::{Path, PathBuf};

use relay_delivery::{
    Completion, Delivered, DeliveryError, promisify_single_slot, spawn_delivery,
    spawn_single_slot,
};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::error::{OpsError, OpsResult};

/// Suffix appended to every line by [`funny_file`].
pub const FUNNY_SUFFIX: &str = " lol";

/// Read `path` as UTF-8 and return the text before the first newline.
///
/// A file without a newline yields its whole content; an empty file yields an
/// empty string.
///
/// # Errors
///
/// Returns [`OpsError::Io`] carrying the platform error when the read fails.
#[instrument(name = "ops.first_line", skip_all, fields(path = %path.as_ref().display()))]
pub async fn first_line(path: impl AsRef<Path> + Send) -> OpsResult<String> {
    let contents = read_text("ops.first_line", path.as_ref()).await?;
    let line = extract_first_line(&contents).to_string();
    debug!(bytes = contents.len(), "first line extracted");
    Ok(line)
}

/// Callback form of [`first_line`].
///
/// Spawns the read on the tokio runtime; `notify` is invoked exactly once with
/// the two-slot outcome.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn first_line_callback<C>(path: impl Into<PathBuf>, notify: C) -> JoinHandle<()>
where
    C: FnOnce(Completion<String, OpsError>) + Send + 'static,
{
    let path = path.into();
    spawn_delivery(async move { first_line(&path).await }, notify)
}

/// Read `path` as UTF-8 and append [`FUNNY_SUFFIX`] to every line.
///
/// Lines are split on `\n`, so content ending in a newline produces a
/// trailing suffixed empty line (`"a\n"` becomes `"a lol\n lol"`).
///
/// # Errors
///
/// Returns [`OpsError::Io`] carrying the platform error when the read fails.
#[instrument(name = "ops.funny_file", skip_all, fields(path = %path.as_ref().display()))]
pub async fn funny_file(path: impl AsRef<Path> + Send) -> OpsResult<String> {
    let contents = read_text("ops.funny_file", path.as_ref()).await?;
    let funny = append_suffix(&contents);
    debug!(bytes = funny.len(), "funny file rendered");
    Ok(funny)
}

/// Callback form of [`funny_file`].
///
/// Unlike the other callback forms this one delivers through a single slot:
/// `notify` receives either [`Delivered::Error`] or [`Delivered::Success`].
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn funny_file_callback<C>(path: impl Into<PathBuf>, notify: C) -> JoinHandle<()>
where
    C: FnOnce(Delivered<String, OpsError>) + Send + 'static,
{
    let path = path.into();
    spawn_single_slot(async move { funny_file(&path).await }, notify)
}

/// Re-expose [`funny_file_callback`] as a single outcome.
///
/// The delivered slot is inspected explicitly rather than assumed to follow
/// the two-slot convention.
///
/// # Errors
///
/// Returns [`DeliveryError::Failed`] with the read failure, or
/// [`DeliveryError::Dropped`] if the spawned task died before notifying.
pub async fn funny_file_bridged(
    path: impl Into<PathBuf>,
) -> Result<String, DeliveryError<OpsError>> {
    let path = path.into();
    promisify_single_slot(|notifier| funny_file_callback(path, notifier.into_callback())).await
}

async fn read_text(operation: &'static str, path: &Path) -> OpsResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| OpsError::io(operation, path, source))
}

fn extract_first_line(contents: &str) -> &str {
    contents.split_once('\n').map_or(contents, |(line, _)| line)
}

fn append_suffix(contents: &str) -> String {
    contents
        .split('\n')
        .map(|line| format!("{line}{FUNNY_SUFFIX}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_delivery::promisify;
    use relay_test_support::files::TextFixture;
    use std::io;

    #[test]
    fn extract_first_line_stops_at_newline() {
        assert_eq!(extract_first_line("a\nb\nc"), "a");
        assert_eq!(extract_first_line("x"), "x");
        assert_eq!(extract_first_line(""), "");
        assert_eq!(extract_first_line("\nrest"), "");
        assert_eq!(extract_first_line("crlf\r\nnext"), "crlf\r");
    }

    #[test]
    fn append_suffix_marks_every_line() {
        assert_eq!(append_suffix("a\nb"), "a lol\nb lol");
        assert_eq!(append_suffix("a\n"), "a lol\n lol");
        assert_eq!(append_suffix(""), " lol");
    }

    #[tokio::test]
    async fn first_line_reads_fixture() -> anyhow::Result<()> {
        let fixture = TextFixture::new("lines.txt", "a\nb\nc")?;
        assert_eq!(first_line(fixture.path()).await?, "a");

        let single = TextFixture::new("single.txt", "x")?;
        assert_eq!(first_line(single.path()).await?, "x");
        Ok(())
    }

    #[tokio::test]
    async fn first_line_reports_missing_file() -> anyhow::Result<()> {
        let fixture = TextFixture::new("present.txt", "a")?;
        let missing = fixture.missing_path();
        let err = first_line(&missing)
            .await
            .err()
            .ok_or_else(|| anyhow::anyhow!("missing file should fail"))?;
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(matches!(err, OpsError::Io { ref path, .. } if *path == missing));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_utf8_is_reported_as_invalid_data() -> anyhow::Result<()> {
        let fixture = TextFixture::from_bytes("binary.txt", &[0xff, 0xfe])?;

        let direct = first_line(fixture.path())
            .await
            .err()
            .ok_or_else(|| anyhow::anyhow!("invalid utf-8 should fail"))?;
        let via_callback = promisify(|notifier| {
            first_line_callback(fixture.path().to_path_buf(), notifier.into_callback())
        })
        .await
        .err()
        .and_then(DeliveryError::into_failure);
        let funny_direct = funny_file(fixture.path()).await.err();
        let funny_bridged = funny_file_bridged(fixture.path().to_path_buf())
            .await
            .err()
            .and_then(DeliveryError::into_failure);

        assert_eq!(direct.io_kind(), Some(io::ErrorKind::InvalidData));
        for err in [via_callback, funny_direct, funny_bridged] {
            assert_eq!(
                err.and_then(|err| err.io_kind()),
                Some(io::ErrorKind::InvalidData)
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn first_line_callback_delivers_two_slots() -> anyhow::Result<()> {
        let fixture = TextFixture::new("lines.txt", "head\ntail")?;
        let line = promisify(|notifier| {
            first_line_callback(fixture.path().to_path_buf(), notifier.into_callback())
        })
        .await?;
        assert_eq!(line, "head");
        Ok(())
    }

    #[tokio::test]
    async fn funny_file_callback_uses_single_slot() -> anyhow::Result<()> {
        let fixture = TextFixture::new("funny.txt", "a\nb")?;
        let (sender, receiver) = tokio::sync::oneshot::channel();
        funny_file_callback(fixture.path().to_path_buf(), move |delivered| {
            let _ = sender.send(delivered);
        })
        .await?;

        match receiver.await? {
            Delivered::Success(text) => assert_eq!(text, "a lol\nb lol"),
            Delivered::Error(err) => anyhow::bail!("unexpected failure: {err}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn funny_file_bridged_matches_direct_form() -> anyhow::Result<()> {
        let fixture = TextFixture::new("funny.txt", "a\n")?;
        let direct = funny_file(fixture.path()).await?;
        let bridged = funny_file_bridged(fixture.path().to_path_buf()).await?;
        assert_eq!(direct, "a lol\n lol");
        assert_eq!(bridged, direct);

        let missing = funny_file_bridged(fixture.missing_path()).await;
        let failure = missing.err().and_then(DeliveryError::into_failure);
        assert_eq!(
            failure.and_then(|err| err.io_kind()),
            Some(io::ErrorKind::NotFound)
        );
        Ok(())
    }
}
