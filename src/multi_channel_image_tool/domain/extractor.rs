use crate::domain::channel::Channel;
use crate::domain::image_format::has_alpha_channel;
use crate::domain::pixel_buffer::PixelBuffer;

const OPAQUE: u8 = u8::MAX;

/// Isolates `channel_to_extract` of `image` into `target_slot`.
///
/// Color targets keep the source pixel's alpha byte. The `A` target uses the
/// alpha-visualization encoding: the intensity goes to R, G and B as a gray
/// swatch and the pixel is forced opaque, so the value is read back from R.
/// Sources whose extension cannot carry alpha extract `A` as 255.
pub fn extract(
    image: &PixelBuffer,
    source_extension: &str,
    channel_to_extract: Channel,
    target_slot: Channel,
    invert: bool,
) -> PixelBuffer {
    let read_alpha = has_alpha_channel(source_extension);
    let source_offset = channel_to_extract.byte_offset();

    let mut output = image.clone();
    for px in output.pixels_mut() {
        let mut intensity = if channel_to_extract == Channel::A && !read_alpha {
            OPAQUE
        } else {
            px[source_offset]
        };
        if invert {
            intensity = OPAQUE - intensity;
        }
        write_intensity(px, target_slot, intensity);
    }
    output
}

fn write_intensity(px: &mut [u8], target_slot: Channel, intensity: u8) {
    match target_slot {
        Channel::A => {
            px[Channel::R.byte_offset()] = intensity;
            px[Channel::G.byte_offset()] = intensity;
            px[Channel::B.byte_offset()] = intensity;
            px[Channel::A.byte_offset()] = OPAQUE;
        }
        color => {
            for other in [Channel::R, Channel::G, Channel::B] {
                px[other.byte_offset()] = if other == color { intensity } else { 0 };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set_rgba(0, 0, 10, 20, 30, 40);
        buffer.set_rgba(1, 0, 250, 128, 0, 255);
        buffer.set_rgba(0, 1, 0, 1, 2, 3);
        buffer.set_rgba(1, 1, 99, 98, 97, 0);
        buffer
    }

    #[test]
    fn test_extract_red_into_red_slot_keeps_alpha() {
        let out = extract(&sample(), ".png", Channel::R, Channel::R, false);
        assert_eq!(out.rgba(0, 0), [10, 0, 0, 40]);
        assert_eq!(out.rgba(1, 0), [250, 0, 0, 255]);
        assert_eq!(out.rgba(1, 1), [99, 0, 0, 0]);
    }

    #[test]
    fn test_extract_into_other_color_slot() {
        let out = extract(&sample(), "png", Channel::R, Channel::B, false);
        assert_eq!(out.rgba(0, 0), [0, 0, 10, 40]);
        let out = extract(&sample(), "png", Channel::B, Channel::G, true);
        assert_eq!(out.rgba(0, 0), [0, 225, 0, 40]);
    }

    #[test]
    fn test_extract_alpha_uses_visualization_encoding() {
        let out = extract(&sample(), ".png", Channel::A, Channel::A, false);
        assert_eq!(out.rgba(0, 0), [40, 40, 40, 255]);
        assert_eq!(out.rgba(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_extract_alpha_from_jpeg_is_constant_opaque() {
        let out = extract(&sample(), ".jpg", Channel::A, Channel::A, false);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(out.rgba(x, y), [255, 255, 255, 255]);
            }
        }
        let inverted = extract(&sample(), ".jpeg", Channel::A, Channel::A, true);
        assert_eq!(inverted.rgba(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_double_inversion_restores_intensities() {
        let source = sample();
        for channel in [Channel::R, Channel::G, Channel::B] {
            let plain = extract(&source, ".png", channel, channel, false);
            let once = extract(&source, ".png", channel, channel, true);
            let twice = extract(&once, ".png", channel, channel, true);
            assert_eq!(twice, plain);
        }
    }

    #[test]
    fn test_output_has_input_dimensions() {
        let source = PixelBuffer::new(5, 3);
        let out = extract(&source, ".png", Channel::G, Channel::G, false);
        assert_eq!((out.width(), out.height()), (5, 3));
    }
}
