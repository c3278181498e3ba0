use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed 8-bit blue, green, red.
    Bgr8,
    /// Packed 8-bit red, green, blue.
    Rgb8,
    /// YUV 4:2:2, `[Y0, U, Y1, V]` per pixel pair.
    Yuyv,
    /// Compressed JPEG (MJPEG camera frames).
    Jpeg,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<Self> {
        match fourcc {
            b"BGR3" => Some(PixelFormat::Bgr8),
            b"RGB3" => Some(PixelFormat::Rgb8),
            b"YUYV" => Some(PixelFormat::Yuyv),
            b"MJPG" => Some(PixelFormat::Jpeg),
            _ => None,
        }
    }

    pub fn as_fourcc(&self) -> &'static [u8; 4] {
        match self {
            PixelFormat::Bgr8 => b"BGR3",
            PixelFormat::Rgb8 => b"RGB3",
            PixelFormat::Yuyv => b"YUYV",
            PixelFormat::Jpeg => b"MJPG",
        }
    }

    /// Bytes per pixel for uncompressed formats.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Bgr8 | PixelFormat::Rgb8 => Some(3),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Format(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }

    /// Accept either 3-channel packed order; these are the drawable formats.
    pub fn ensure_packed_color(&self) -> Result<(), ImageError> {
        match self {
            PixelFormat::Bgr8 | PixelFormat::Rgb8 => Ok(()),
            other => Err(ImageError::Format(format!(
                "expected Bgr8 or Rgb8 format, got {:?}",
                other
            ))),
        }
    }
}
