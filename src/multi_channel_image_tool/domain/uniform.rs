use crate::domain::channel::Channel;
use crate::domain::pixel_buffer::PixelBuffer;

/// 1x1 swatch for a constant channel value; the compositor tiles it.
///
/// Unlike extraction, an `A` swatch carries `value` in its own alpha byte as
/// well as in its gray color.
pub fn generate(target_slot: Channel, value: u8) -> PixelBuffer {
    let (r, g, b, a) = match target_slot {
        Channel::R => (value, 0, 0, u8::MAX),
        Channel::G => (0, value, 0, u8::MAX),
        Channel::B => (0, 0, value, u8::MAX),
        Channel::A => (value, value, value, value),
    };
    let mut swatch = PixelBuffer::new(1, 1);
    swatch.set_rgba(0, 0, r, g, b, a);
    swatch
}
