use std::io::Cursor;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use super::error::InfrastructureError;
use crate::domain::image_format::is_recognized_extension;
use crate::domain::image_loader_trait::ImageLoader;
use crate::domain::pixel_buffer::PixelBuffer;

/// [`ImageLoader`] backed by the local file system and the `image` crate.
pub struct FsImageLoader;

impl FsImageLoader {
    pub fn new() -> Self {
        Self
    }

    // 拡張子ではなく中身からフォーマットを推測する
    fn decode(&self, path: &Path) -> Result<DynamicImage, InfrastructureError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        Ok(reader.decode()?)
    }
}

impl Default for FsImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader for FsImageLoader {
    fn is_valid_image(&self, path: &Path) -> bool {
        if !path.is_file() || !is_recognized_extension(path) {
            return false;
        }
        match self.decode(path) {
            Ok(_) => true,
            Err(e) => {
                debug!("{} failed to decode: {}", path.display(), e);
                false
            }
        }
    }

    fn dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        ImageReader::open(path)
            .ok()?
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }

    fn load(&self, path: &Path) -> Result<PixelBuffer, InfrastructureError> {
        if !is_recognized_extension(path) {
            return Err(InfrastructureError::InvalidImage(path.to_path_buf()));
        }
        let image = self.decode(path)?.to_rgba8();
        Ok(PixelBuffer::from_rgba_image(&image))
    }

    fn encode_png(&self, image: &PixelBuffer) -> Result<Vec<u8>, InfrastructureError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .to_rgba_image()
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| InfrastructureError::EncodingError(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
