use {
    crate::{CameraConfig, FrameSource, VideoError},
    base::Vec2,
    image::{Image, PixelFormat, jpeg_to_bgr, to_bgr, yuyv_to_bgr},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

/// V4L2 camera opened by index (`/dev/video<N>`) or explicit path.
pub struct V4l2Camera {
    config: CameraConfig,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("stream", &self.stream.is_some())
            .field("size", &self.size)
            .field("format", &self.format)
            .finish()
    }
}

impl V4l2Camera {
    /// Create a closed camera; nothing touches the device until `open`.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl FrameSource for V4l2Camera {
    fn open(&mut self) -> Result<Vec2<usize>, VideoError> {
        // close stream
        self.stream.take();

        let device = match self.config.device() {
            Some(path) => Device::with_path(path)?,
            None => Device::new(self.config.index())?,
        };

        let requested = self.config.size();
        let desired_format = self.config.format().unwrap_or(PixelFormat::Yuyv);
        let actual = Capture::set_format(
            &device,
            &Format::new(
                requested.x as u32,
                requested.y as u32,
                FourCC::new(desired_format.as_fourcc()),
            ),
        )?;

        self.size = Vec2::new(actual.width as usize, actual.height as usize);
        self.format = PixelFormat::from_fourcc(&actual.fourcc.repr).ok_or_else(|| {
            VideoError::Device(format!("Unsupported pixel format: {}", actual.fourcc))
        })?;
        if self.size != requested {
            log::warn!(
                "camera: requested {}x{}, device gave {}x{}",
                requested.x,
                requested.y,
                self.size.x,
                self.size.y
            );
        }

        // frame rate is best-effort
        let params = v4l::video::capture::Parameters::with_fps(self.config.frame_rate());
        if let Err(error) = Capture::set_params(&device, &params) {
            log::warn!("camera: could not set frame rate: {}", error);
        }

        let stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, self.config.buffer_count())
                .map_err(|error| VideoError::Stream(error.to_string()))?;
        self.stream = Some(stream);

        log::info!(
            "camera: opened {}x{} {:?}",
            self.size.x,
            self.size.y,
            self.format
        );
        Ok(self.size)
    }

    fn read(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("No stream".to_string()))?;
        let (data, _metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;

        let frame = match self.format {
            PixelFormat::Yuyv => yuyv_to_bgr(self.size, data)?,
            PixelFormat::Jpeg => jpeg_to_bgr(data)?,
            format => {
                let frame_len = self.size.area() * 3;
                let bytes = data.get(..frame_len).ok_or_else(|| {
                    VideoError::Stream(format!("short frame: {} bytes", data.len()))
                })?;
                to_bgr(&Image::new(self.size, bytes.to_vec(), format))?
            }
        };
        Ok(frame)
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            log::info!("camera: released");
        }
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        self.close();
    }
}
