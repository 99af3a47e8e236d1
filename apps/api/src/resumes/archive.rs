use std::future::Future;

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::document::DocumentKind;

pub fn archive_key(resume_id: Uuid, file_name: &str) -> String {
    let safe_name: String = file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    format!("resumes/{resume_id}/{safe_name}")
}

fn content_type(file_name: &str) -> &'static str {
    match DocumentKind::from_file_name(file_name) {
        Some(DocumentKind::Pdf) => "application/pdf",
        Some(DocumentKind::Docx) => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        None => "application/octet-stream",
    }
}

/// Object storage for raw uploads.
#[async_trait]
pub trait UploadArchive: Send + Sync {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// S3 / MinIO bucket backend.
pub struct S3Archive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Archive {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl UploadArchive for S3Archive {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Archived upload to s3://{}/{}", self.bucket, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 delete failed: {e}"))?;

        info!("Removed archived upload s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

/// Archiving is best-effort: a failure is logged and the resume is kept without a key.
pub async fn try_archive_upload(
    archive: &dyn UploadArchive,
    resume_id: Uuid,
    file_name: &str,
    bytes: Bytes,
) -> Option<String> {
    let key = archive_key(resume_id, file_name);
    match archive.put(&key, bytes, content_type(file_name)).await {
        Ok(()) => Some(key),
        Err(e) => {
            warn!("Could not archive upload for resume {resume_id}: {e}");
            None
        }
    }
}

/// Archives the upload, then runs `insert` with the resulting key.
///
/// When `insert` fails the archived object is removed again, so no object is
/// left without a resume row pointing at it.
pub async fn archive_then_insert<F, Fut, T>(
    archive: &dyn UploadArchive,
    resume_id: Uuid,
    file_name: &str,
    bytes: Bytes,
    insert: F,
) -> Result<T, AppError>
where
    F: FnOnce(Option<String>) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let s3_key = try_archive_upload(archive, resume_id, file_name, bytes).await;

    match insert(s3_key.clone()).await {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Some(key) = s3_key {
                if let Err(cleanup) = archive.delete(&key).await {
                    warn!("Could not remove orphaned upload {key}: {cleanup}");
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory archive that records every call.
    #[derive(Default)]
    struct RecordingArchive {
        fail_put: bool,
        stored: Mutex<Vec<String>>,
        deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UploadArchive for RecordingArchive {
        async fn put(&self, key: &str, _bytes: Bytes, _content_type: &str) -> Result<()> {
            if self.fail_put {
                anyhow::bail!("bucket unavailable");
            }
            self.stored.lock().unwrap().push(key.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.stored.lock().unwrap().retain(|k| k != key);
            self.deleted.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_archive_key_sanitizes_file_name() {
        let id = Uuid::nil();
        assert_eq!(
            archive_key(id, "my resume (final).pdf"),
            "resumes/00000000-0000-0000-0000-000000000000/my_resume__final_.pdf"
        );
    }

    #[test]
    fn test_content_type_follows_extension() {
        assert_eq!(content_type("cv.PDF"), "application/pdf");
        assert!(content_type("cv.docx").contains("wordprocessingml"));
    }

    #[tokio::test]
    async fn test_successful_insert_keeps_archived_object() {
        let archive = RecordingArchive::default();
        let id = Uuid::new_v4();

        let key = archive_then_insert(&archive, id, "cv.pdf", Bytes::from_static(b"%PDF"), |key| async move {
            Ok::<_, AppError>(key)
        })
        .await
        .unwrap();

        assert_eq!(key, Some(archive_key(id, "cv.pdf")));
        assert_eq!(archive.stored.lock().unwrap().len(), 1);
        assert!(archive.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_insert_removes_archived_object() {
        let archive = RecordingArchive::default();
        let id = Uuid::new_v4();

        let result = archive_then_insert(&archive, id, "cv.pdf", Bytes::from_static(b"%PDF"), |_key| async {
            Err::<(), _>(AppError::Database(sqlx::Error::PoolTimedOut))
        })
        .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(archive.stored.lock().unwrap().is_empty());
        assert_eq!(*archive.deleted.lock().unwrap(), vec![archive_key(id, "cv.pdf")]);
    }

    #[tokio::test]
    async fn test_archive_failure_still_inserts_without_key() {
        let archive = RecordingArchive {
            fail_put: true,
            ..Default::default()
        };

        let key = archive_then_insert(&archive, Uuid::new_v4(), "cv.docx", Bytes::new(), |key| async move {
            Ok::<_, AppError>(key)
        })
        .await
        .unwrap();

        assert_eq!(key, None);
        assert!(archive.deleted.lock().unwrap().is_empty());
    }
}
