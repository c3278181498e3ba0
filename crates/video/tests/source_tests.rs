use base::Vec2;
use image::{Image, PixelFormat};
use video::{FrameSource, VideoError};

// Mock implementation for testing
struct MockSource {
    open: bool,
    reads: usize,
}

impl FrameSource for MockSource {
    fn open(&mut self) -> Result<Vec2<usize>, VideoError> {
        self.open = true;
        Ok(Vec2::new(2, 2))
    }

    fn read(&mut self) -> Result<Image, VideoError> {
        if !self.open {
            return Err(VideoError::Stream("No stream".to_string()));
        }
        self.reads += 1;
        Ok(Image::filled(Vec2::new(2, 2), PixelFormat::Bgr8, [0, 0, 0]))
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[test]
fn test_source_lifecycle() {
    let mut source = MockSource { open: false, reads: 0 };

    assert!(source.read().is_err());
    assert_eq!(source.open().unwrap(), Vec2::new(2, 2));
    let frame = source.read().unwrap();
    assert_eq!(frame.format, PixelFormat::Bgr8);
    source.close();
    assert!(source.read().is_err());
    assert_eq!(source.reads, 1);
}

#[test]
fn test_boxed_source_polymorphism() {
    fn capture(source: &mut impl FrameSource, count: usize) -> Result<Vec<Image>, VideoError> {
        source.open()?;
        let frames = (0..count).map(|_| source.read()).collect();
        source.close();
        frames
    }

    let mut boxed: Box<dyn FrameSource> = Box::new(MockSource { open: false, reads: 0 });
    let frames = capture(&mut boxed, 3).unwrap();
    assert_eq!(frames.len(), 3);
}
