use image::ImageError;
use std::io;
use video::VideoError;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "device not found");
    let err: VideoError = io_err.into();

    match err {
        VideoError::Device(msg) => assert!(msg.contains("device not found")),
        _ => panic!("Expected VideoError::Device variant"),
    }
}

#[test]
fn test_from_image_error() {
    let err: VideoError = ImageError::Decode("invalid JPEG".to_string()).into();
    assert!(matches!(err, VideoError::Decode(_)));
    assert!(err.to_string().contains("invalid JPEG"));
}

#[test]
fn test_error_display() {
    assert!(VideoError::Device("V4L2 error".to_string()).to_string().contains("V4L2 error"));
    assert!(VideoError::Stream("streaming failed".to_string()).to_string().contains("streaming failed"));
    assert!(VideoError::Channel("channel closed".to_string()).to_string().contains("channel closed"));
}
