use {crate::*, base::Vec2};

/// An owned frame: `size.x` by `size.y` pixels in `format`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// A 3-channel image with every pixel set to `color` (given in `format` order).
    pub fn filled(size: Vec2<usize>, format: PixelFormat, color: [u8; 3]) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(size.area() * 3)
            .collect();
        Self { size, data, format }
    }

    /// Check that `data` holds exactly one frame for uncompressed formats.
    pub fn validate(&self) -> Result<(), ImageError> {
        if let Some(bpp) = self.format.bytes_per_pixel() {
            let expected = self.size.area() * bpp;
            if self.data.len() != expected {
                return Err(ImageError::Size(format!(
                    "{:?} {}x{} needs {} bytes, got {}",
                    self.format,
                    self.size.x,
                    self.size.y,
                    expected,
                    self.data.len()
                )));
            }
        }
        Ok(())
    }

    /// The 3 channel bytes at `(x, y)`, in `format` order.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.size.x || y >= self.size.y || self.format.bytes_per_pixel() != Some(3) {
            return None;
        }
        let idx = (y * self.size.x + x) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }
}
