//! Media Store
//!
//! 负责商品媒体文件的筛选、落盘、删除和路径解析

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::body::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::utils::{AppError, AppResult};

/// Allowed extensions (lowercased) and content-type subtypes
pub const ALLOWED_MEDIA: &[&str] = &["jpeg", "jpg", "png", "mp4"];

/// URL prefix the files are served under
pub const UPLOADS_PREFIX: &str = "/uploads";

/// Name clashes bump the millisecond stamp at most this many times
const MAX_NAME_ATTEMPTS: i64 = 16;

/// One uploaded file, buffered and screened but not yet written
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A file written under the uploads directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub file_name: String,
    pub path: PathBuf,
}

impl StoredMedia {
    /// Relative URL `/uploads/<file>`
    pub fn url(&self) -> String {
        format!("{UPLOADS_PREFIX}/{}", self.file_name)
    }
}

fn is_allowed(value: &str) -> bool {
    ALLOWED_MEDIA.contains(&value.to_ascii_lowercase().as_str())
}

/// `image/png; charset=binary` → `png`
fn mime_subtype(content_type: &str) -> Option<&str> {
    let essence = content_type.split(';').next()?.trim();
    let (_, subtype) = essence.split_once('/')?;
    Some(subtype.trim())
}

/// Extension including the leading dot, case preserved (`.PNG`)
fn dotted_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// 媒体文件存储
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
}

impl MediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the uploads directory if missing
    pub async fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::internal(format!(
                "Failed to create uploads directory {}: {e}",
                self.dir.display()
            ))
        })
    }

    /// Check both the extension and the declared content type against the allow-list
    pub fn screen(file_name: &str, content_type: Option<&str>) -> AppResult<()> {
        let ext_ok = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(is_allowed);
        let mime_ok = content_type.and_then(mime_subtype).is_some_and(is_allowed);

        if ext_ok && mime_ok {
            Ok(())
        } else {
            tracing::debug!(file_name, ?content_type, "Media rejected");
            Err(AppError::media_rejected())
        }
    }

    /// Write the file as `<epoch-millis><ext>`, never overwriting an existing one
    pub async fn save(&self, upload: &MediaUpload) -> AppResult<StoredMedia> {
        let ext = dotted_extension(&upload.file_name);
        let mut millis = chrono::Utc::now().timestamp_millis();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = format!("{millis}{ext}");
            let path = self.dir.join(&file_name);

            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    millis += 1;
                    continue;
                }
                Err(e) => {
                    return Err(AppError::internal(format!(
                        "Failed to create {}: {e}",
                        path.display()
                    )));
                }
            };

            let written = async {
                file.write_all(&upload.bytes).await?;
                file.flush().await
            }
            .await;

            if let Err(e) = written {
                drop(file);
                let _ = fs::remove_file(&path).await;
                return Err(AppError::internal(format!(
                    "Failed to write {}: {e}",
                    path.display()
                )));
            }

            tracing::info!(
                file_name = %file_name,
                original = %upload.file_name,
                size = upload.bytes.len(),
                "Media saved"
            );
            return Ok(StoredMedia { file_name, path });
        }

        Err(AppError::internal("Could not allocate a unique media file name"))
    }

    /// Remove a stored file; failures are logged, not returned
    pub async fn remove(&self, media: &StoredMedia) {
        match fs::remove_file(&media.path).await {
            Ok(()) => tracing::info!(file_name = %media.file_name, "Media removed"),
            Err(e) => {
                tracing::warn!(file_name = %media.file_name, error = %e, "Failed to remove media")
            }
        }
    }

    /// Map a request path (relative to `/uploads/`) to a file under the directory.
    ///
    /// Only plain path segments are accepted: `..`, absolute paths and empty
    /// paths are refused.
    pub fn resolve(&self, relative: &str) -> AppResult<PathBuf> {
        let relative = Path::new(relative);
        let mut components = relative.components().peekable();
        if components.peek().is_none() {
            return Err(AppError::invalid_request("Empty media path"));
        }
        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(AppError::invalid_request("Invalid media path"));
        }
        Ok(self.dir.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, bytes: &'static [u8]) -> MediaUpload {
        MediaUpload {
            file_name: name.into(),
            content_type: Some("image/png".into()),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[test]
    fn test_screen_requires_both_checks() {
        assert!(MediaStore::screen("a.png", Some("image/png")).is_ok());
        assert!(MediaStore::screen("a.JPG", Some("image/jpeg")).is_ok());
        assert!(MediaStore::screen("clip.mp4", Some("video/mp4")).is_ok());

        // extension fails
        assert!(MediaStore::screen("a.gif", Some("image/png")).is_err());
        assert!(MediaStore::screen("noext", Some("image/png")).is_err());
        // content type fails
        assert!(MediaStore::screen("a.png", Some("application/pdf")).is_err());
        assert!(MediaStore::screen("a.png", None).is_err());

        let err = MediaStore::screen("doc.pdf", Some("application/pdf")).unwrap_err();
        assert_eq!(err.message, "Only images and videos are allowed");
    }

    #[test]
    fn test_mime_subtype_ignores_parameters() {
        assert_eq!(mime_subtype("image/png; q=1"), Some("png"));
        assert_eq!(mime_subtype("png"), None);
        assert!(MediaStore::screen("a.png", Some("IMAGE/PNG")).is_ok());
    }

    #[tokio::test]
    async fn test_save_preserves_extension_case() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let stored = store.save(&upload("Photo.PNG", b"png-bytes")).await.unwrap();
        assert!(stored.file_name.ends_with(".PNG"));
        let stem = stored.file_name.trim_end_matches(".PNG");
        assert!(stem.parse::<i64>().is_ok());
        assert_eq!(stored.url(), format!("/uploads/{}", stored.file_name));
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let mut names = std::collections::HashSet::new();
        for _ in 0..5 {
            let stored = store.save(&upload("a.jpg", b"x")).await.unwrap();
            assert!(names.insert(stored.file_name));
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 5);
    }

    #[tokio::test]
    async fn test_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());
        let stored = store.save(&upload("a.png", b"x")).await.unwrap();
        store.remove(&stored).await;
        assert!(!stored.path.exists());
        // second remove only logs
        store.remove(&stored).await;
    }

    #[test]
    fn test_resolve_refuses_traversal() {
        let store = MediaStore::new("/srv/uploads");
        assert_eq!(
            store.resolve("1700000000000.png").unwrap(),
            PathBuf::from("/srv/uploads/1700000000000.png")
        );
        assert!(store.resolve("../secret").is_err());
        assert!(store.resolve("a/../../b").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
        assert!(store.resolve("").is_err());
    }
}
