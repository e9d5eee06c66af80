pub mod channel;
pub mod channel_source;
pub mod compositor;
pub mod error;
pub mod extractor;
pub mod image_format;
pub mod image_loader_trait;
pub mod pixel_buffer;
pub mod uniform;
