use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use super::error::ApplicationError;
use super::result_cache::{lock_slot, ResultCache, SlotCaches};
use crate::domain::channel::Channel;
use crate::domain::channel_source::{ChannelSource, Fingerprint, SlotSources};
use crate::domain::compositor;
use crate::domain::extractor::extract;
use crate::domain::image_loader_trait::ImageLoader;
use crate::domain::pixel_buffer::PixelBuffer;
use crate::domain::uniform;

/// Problems found in a set of sources before anything is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Blocking: one message per unusable slot.
    pub errors: Vec<String>,
    /// Advisory: compositing still proceeds.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CombineOutput {
    pub image: Arc<PixelBuffer>,
    pub warnings: Vec<String>,
}

/// Split and combine workflows over the channel engine, with one result
/// cache per slot plus one for the final composite.
pub struct ChannelService {
    loader: Arc<dyn ImageLoader + Send + Sync>,
    combine_slots: SlotCaches,
    composite: Mutex<ResultCache<[Fingerprint; 4]>>,
    split_slots: SlotCaches,
}

impl ChannelService {
    pub fn new(loader: Arc<dyn ImageLoader + Send + Sync>) -> Self {
        Self {
            loader,
            combine_slots: SlotCaches::new(),
            composite: Mutex::new(ResultCache::new()),
            split_slots: SlotCaches::new(),
        }
    }

    /// Channel image for `slot`, recomputed only when `source` changed since
    /// the last call for the same slot.
    pub fn channel_image(&self, slot: Channel, source: &ChannelSource) -> Arc<PixelBuffer> {
        // the slot stays locked for the whole decode; other slots are not blocked
        let (image, hit) = lock_slot(self.combine_slots.slot(slot))
            .get_or_compute_traced(source.fingerprint(), || self.render(slot, source));
        debug!("Channel {} image {}", slot, if hit { "reused from cache" } else { "computed" });
        image
    }

    fn render(&self, slot: Channel, source: &ChannelSource) -> PixelBuffer {
        match source {
            ChannelSource::UniformValue { value } => uniform::generate(slot, *value),
            ChannelSource::FromFile {
                path,
                channel_to_extract,
                invert,
            } => self.extract_from_file(path, *channel_to_extract, slot, *invert),
        }
    }

    /// Validity is not re-checked here: `load` fails on exactly the files
    /// `is_valid_image` rejects, and that failure becomes the placeholder.
    fn extract_from_file(&self, path: &Path, channel_to_extract: Channel, slot: Channel, invert: bool) -> PixelBuffer {
        match self.loader.load(path) {
            Ok(image) => {
                info!("Extracting channel {} of {} into {}", channel_to_extract, path.display(), slot);
                extract(&image, &path.to_string_lossy(), channel_to_extract, slot, invert)
            }
            Err(e) => {
                warn!("{} is not a valid image ({}), using placeholder for channel {}", path.display(), e, slot);
                PixelBuffer::placeholder()
            }
        }
    }

    pub fn validate(&self, sources: &SlotSources) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut sizes = Vec::new();

        for (slot, source) in sources.iter() {
            let ChannelSource::FromFile { path, .. } = source else {
                continue;
            };
            if !self.loader.is_valid_image(path) {
                report.errors.push(format!("No valid image has been picked for channel {}.", slot));
                continue;
            }
            if let Some(size) = self.loader.dimensions(path) {
                sizes.push((slot, size));
            }
        }

        if let Some(warning) = dimension_mismatch(&sizes) {
            report.warnings.push(warning);
        }
        report
    }

    pub fn combine(&self, sources: &SlotSources) -> Result<CombineOutput, ApplicationError> {
        let report = self.validate(sources);
        if !report.is_valid() {
            warn!("Combine rejected: {:?}", report.errors);
            return Err(ApplicationError::InvalidSources(report.errors));
        }
        for warning in &report.warnings {
            warn!("{}", warning);
        }

        let [r, g, b, a] = Channel::ALL.map(|slot| self.channel_image(slot, sources.get(slot)));
        let (image, hit) = lock_slot(&self.composite)
            .get_or_compute_traced(sources.fingerprints(), || compositor::combine(&r, &g, &b, &a));
        if !hit {
            info!("Combined channels into {}x{} image", image.width(), image.height());
        }

        Ok(CombineOutput {
            image,
            warnings: report.warnings,
        })
    }

    pub fn split_errors(&self, path: &Path) -> Vec<String> {
        if self.loader.is_valid_image(path) {
            Vec::new()
        } else {
            vec!["No valid image has been picked.".to_string()]
        }
    }

    /// Isolates `channel` of the image at `path` into the same slot.
    pub fn split(&self, path: &Path, channel: Channel, invert: bool) -> Result<Arc<PixelBuffer>, ApplicationError> {
        let errors = self.split_errors(path);
        if !errors.is_empty() {
            warn!("Split rejected for {}", path.display());
            return Err(ApplicationError::InvalidSources(errors));
        }

        let source = ChannelSource::from_file(path, channel, invert);
        let (image, hit) = lock_slot(self.split_slots.slot(channel))
            .get_or_compute_traced(source.fingerprint(), || self.extract_from_file(path, channel, channel, invert));
        debug!("Split channel {} {}", channel, if hit { "reused from cache" } else { "computed" });
        Ok(image)
    }

    pub fn encode_png(&self, image: &PixelBuffer) -> Result<Vec<u8>, ApplicationError> {
        Ok(self.loader.encode_png(image)?)
    }
}

fn dimension_mismatch(sizes: &[(Channel, (u32, u32))]) -> Option<String> {
    let distinct: BTreeSet<_> = sizes.iter().map(|(_, size)| *size).collect();
    if distinct.len() < 2 {
        return None;
    }
    let listed = sizes
        .iter()
        .map(|(slot, (w, h))| format!("{}: {}x{}", slot, w, h))
        .collect::<Vec<_>>()
        .join(", ");
    let max_w = sizes.iter().map(|(_, (w, _))| *w).max().unwrap_or(0);
    let max_h = sizes.iter().map(|(_, (_, h))| *h).max().unwrap_or(0);
    Some(format!(
        "Channel images have differing dimensions ({}); smaller images will be tiled to {}x{}.",
        listed, max_w, max_h
    ))
}
