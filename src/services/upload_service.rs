use crate::config::get_config;
use crate::error::Result;
use bytes::Bytes;
use uuid::Uuid;

/// Writes an uploaded file under the configured uploads directory and
/// returns the relative reference persisted on the record. The reference
/// matches the `/uploads` static route.
pub async fn store_upload(original_filename: &str, data: Bytes) -> Result<String> {
    let uploads_dir = &get_config().uploads_dir;
    tokio::fs::create_dir_all(uploads_dir).await?;

    let extension = std::path::Path::new(original_filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let saved_filename = format!("{}.{}", Uuid::new_v4(), extension);
    let path = format!("{}/{}", uploads_dir, saved_filename);
    tokio::fs::write(&path, &data).await?;

    Ok(format!("uploads/{}", saved_filename))
}
