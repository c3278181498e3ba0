use {crate::VideoError, base::Vec2, image::Image};

/// A blocking camera handle.
///
/// The capture thread is the only owner: it calls `open` once, `read` in a
/// loop, and `close` once on the way out.
pub trait FrameSource: Send {
    /// Open the device. Returns the frame size the device actually agreed to.
    fn open(&mut self) -> Result<Vec2<usize>, VideoError>;

    /// Block until the next frame arrives. Frames are packed `Bgr8`.
    fn read(&mut self) -> Result<Image, VideoError>;

    /// Release the device. Calling this on a closed source does nothing.
    fn close(&mut self);
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn open(&mut self) -> Result<Vec2<usize>, VideoError> {
        (**self).open()
    }

    fn read(&mut self) -> Result<Image, VideoError> {
        (**self).read()
    }

    fn close(&mut self) {
        (**self).close()
    }
}
