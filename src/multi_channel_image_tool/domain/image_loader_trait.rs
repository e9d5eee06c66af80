use std::path::Path;

use crate::domain::pixel_buffer::PixelBuffer;
use crate::infrastructure::error::InfrastructureError;

// ファイルからの画像読み込みはインフラ層で実装し、アプリケーション層はこのトレイト経由で使う
#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader {
    /// Existing file, recognized extension, and decodable content.
    fn is_valid_image(&self, path: &Path) -> bool;

    /// Natural width and height, or `None` if the image cannot be read.
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)>;

    fn load(&self, path: &Path) -> Result<PixelBuffer, InfrastructureError>;

    fn encode_png(&self, image: &PixelBuffer) -> Result<Vec<u8>, InfrastructureError>;
}
