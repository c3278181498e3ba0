#![cfg(feature = "v4l2")]

use video::{CameraConfig, FrameSource, V4l2Camera, VideoError};

#[test]
fn test_new_does_not_open_device() {
    let camera = V4l2Camera::new(CameraConfig::default().with_device("/dev/nonexistent-scout-camera"));
    assert!(!camera.is_open());
}

#[test]
fn test_open_missing_device_fails() {
    let mut camera =
        V4l2Camera::new(CameraConfig::default().with_device("/dev/nonexistent-scout-camera"));
    match camera.open() {
        Err(VideoError::Device(_)) => {}
        other => panic!("Expected VideoError::Device, got {:?}", other.map(|_| ())),
    }
    assert!(!camera.is_open());
}

#[test]
fn test_read_before_open_fails() {
    let mut camera = V4l2Camera::new(CameraConfig::default());
    assert!(matches!(camera.read(), Err(VideoError::Stream(_))));
}

#[test]
fn test_close_is_idempotent() {
    let mut camera = V4l2Camera::new(CameraConfig::default());
    camera.close();
    camera.close();
    assert!(!camera.is_open());
}
