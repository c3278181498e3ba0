use {base::Vec2, image::PixelFormat, std::path::PathBuf};

/// Configuration for camera capture.
///
/// Size, frame rate and format are requests; the device may answer with
/// something else and the backend reports what it actually got.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: Option<PathBuf>,
    index: usize,
    size: Vec2<usize>,
    frame_rate: u32,
    format: Option<PixelFormat>,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: None,
            index: 0,
            size: Vec2::new(800, 600),
            frame_rate: 30,
            format: None,
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    /// Open this device path instead of the indexed default.
    pub fn with_device(mut self, device: impl Into<PathBuf>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Set the OS video input index used when no device path is given.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Request a capture format (YUYV when unset).
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    // Getters
    pub fn device(&self) -> Option<&PathBuf> {
        self.device.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn format(&self) -> Option<PixelFormat> {
        self.format
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
