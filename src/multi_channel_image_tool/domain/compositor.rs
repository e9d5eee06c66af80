use crate::domain::channel::Channel;
use crate::domain::pixel_buffer::PixelBuffer;

/// Merges four channel images into one RGBA image.
///
/// The output takes the largest width and height among the inputs; smaller
/// inputs repeat (coordinates wrap modulo their own size). Alpha is read from
/// the R byte of `a`, which is where both extraction and the uniform
/// generator leave the alpha magnitude. An empty input yields an empty
/// output.
pub fn combine(r: &PixelBuffer, g: &PixelBuffer, b: &PixelBuffer, a: &PixelBuffer) -> PixelBuffer {
    let sources = [r, g, b, a];
    if sources.iter().any(|s| s.is_empty()) {
        return PixelBuffer::new(0, 0);
    }

    let width = sources.iter().map(|s| s.width()).max().unwrap_or(0);
    let height = sources.iter().map(|s| s.height()).max().unwrap_or(0);

    let mut merged = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            merged.set_rgba(
                x,
                y,
                sample(r, Channel::R, x, y),
                sample(g, Channel::G, x, y),
                sample(b, Channel::B, x, y),
                // alpha previews are opaque, the magnitude lives in R
                sample(a, Channel::R, x, y),
            );
        }
    }
    merged
}

fn sample(source: &PixelBuffer, channel: Channel, x: u32, y: u32) -> u8 {
    source.pixel(x % source.width(), y % source.height())[channel.byte_offset()]
}
