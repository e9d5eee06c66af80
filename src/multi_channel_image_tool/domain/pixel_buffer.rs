use image::{Rgba, RgbaImage};

pub const BYTES_PER_PIXEL: usize = 4;

/// 32-bit pixel storage in B, G, R, A byte order.
///
/// `bytes.len() == height * stride` and `stride >= width * 4` hold for every
/// buffer this type hands out; all accessors index through the stride so no
/// caller does its own offset arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            stride,
            bytes: vec![0; stride * height as usize],
        }
    }

    /// 1x1 transparent buffer handed out when a source cannot be used.
    pub fn placeholder() -> Self {
        Self::new(1, 1)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }

    /// Four bytes of the pixel at `(x, y)` in B, G, R, A order.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let o = self.offset(x, y);
        [
            self.bytes[o],
            self.bytes[o + 1],
            self.bytes[o + 2],
            self.bytes[o + 3],
        ]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let o = self.offset(x, y);
        &mut self.bytes[o..o + BYTES_PER_PIXEL]
    }

    /// Writes a pixel given in R, G, B, A order.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let px = self.pixel_mut(x, y);
        px[0] = b;
        px[1] = g;
        px[2] = r;
        px[3] = a;
    }

    /// Reads a pixel back in R, G, B, A order.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let [b, g, r, a] = self.pixel(x, y);
        [r, g, b, a]
    }

    /// Iterates over every pixel row by row, skipping stride padding.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let stride = self.stride.max(1);
        self.bytes
            .chunks_mut(stride)
            .flat_map(move |row| row[..row_len].chunks_exact_mut(BYTES_PER_PIXEL))
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut buffer = Self::new(width, height);
        for (x, y, Rgba([r, g, b, a])) in image.enumerate_pixels() {
            buffer.set_rgba(x, y, *r, *g, *b, *a);
        }
        buffer
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| Rgba(self.rgba(x, y)))
    }
}
