use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::error::InfrastructureError;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    /// Writes already-encoded image bytes to `path`.
    pub async fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path)
            .await
            .map_err(|e| InfrastructureError::FileStorageError(format!("{}: {}", path.display(), e)))?;
        file.write_all(data)
            .await
            .map_err(|e| InfrastructureError::FileStorageError(format!("{}: {}", path.display(), e)))?;
        file.flush().await?;
        info!("Saved {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image_loader_trait::ImageLoader;
    use crate::domain::pixel_buffer::PixelBuffer;
    use crate::infrastructure::image_loader::FsImageLoader;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_image_writes_readable_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Output.png");
        let mut image = PixelBuffer::new(2, 2);
        image.set_rgba(1, 1, 5, 6, 7, 8);

        let loader = FsImageLoader::new();
        let data = loader.encode_png(&image).unwrap();
        LocalFileStorage::new().save_image(&path, &data).await.unwrap();

        assert!(loader.is_valid_image(&path));
        assert_eq!(loader.load(&path).unwrap(), image);
    }

    #[tokio::test]
    async fn test_save_image_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("Output.png");

        let result = LocalFileStorage::new().save_image(&path, &[1, 2, 3]).await;
        assert!(matches!(result, Err(InfrastructureError::FileStorageError(_))));
    }
}
