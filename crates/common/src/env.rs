//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Check that the static UI directory exists. A missing directory is not fatal:
/// the API keeps working and only the UI routes answer 404.
pub async fn check_frontend_dir(frontend_dir: &str) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%frontend_dir, "frontend assets directory not found; static assets will 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::check_frontend_dir;

    #[tokio::test]
    async fn missing_dir_is_reported() {
        assert!(!check_frontend_dir("/definitely/not/here/frontend").await);
    }

    #[tokio::test]
    async fn existing_dir_is_accepted() {
        let dir = std::env::temp_dir();
        assert!(check_frontend_dir(dir.to_str().unwrap()).await);
    }
}
