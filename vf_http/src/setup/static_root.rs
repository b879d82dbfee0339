use crate::config::DirectoryConfig;

/// Make sure the static root exists.
///
/// A failure is only logged, the API itself works fine without any static assets.
/// Returns whether the directory is available.
#[tracing::instrument(skip_all, fields(path = ?dirs.static_root))]
pub async fn prepare_static_root(dirs: &DirectoryConfig) -> bool {
    match tokio::fs::create_dir_all(&dirs.static_root).await {
        Ok(()) => {
            tracing::debug!("Static root ready");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not create static root, continuing without it");
            false
        }
    }
}
