use base::Vec2;
use image::{Image, PixelFormat, fit_size, image_to_u32, letterbox, resize};

#[test]
fn test_fit_size_same_aspect() {
    assert_eq!(fit_size(Vec2::new(1600, 1200), Vec2::new(800, 600)), Vec2::new(800, 600));
    assert_eq!(fit_size(Vec2::new(640, 480), Vec2::new(800, 600)), Vec2::new(800, 600));
}

#[test]
fn test_fit_size_wide_source() {
    assert_eq!(fit_size(Vec2::new(1280, 720), Vec2::new(800, 600)), Vec2::new(800, 450));
}

#[test]
fn test_fit_size_tall_source() {
    assert_eq!(fit_size(Vec2::new(480, 640), Vec2::new(800, 600)), Vec2::new(450, 600));
}

#[test]
fn test_fit_size_empty() {
    assert_eq!(fit_size(Vec2::new(0, 10), Vec2::new(800, 600)), Vec2::new(0, 0));
}

#[test]
fn test_image_to_u32_rgb_and_bgr() {
    let rgb = Image::new(Vec2::new(1, 1), vec![0x12, 0x34, 0x56], PixelFormat::Rgb8);
    let bgr = Image::new(Vec2::new(1, 1), vec![0x56, 0x34, 0x12], PixelFormat::Bgr8);
    assert_eq!(image_to_u32(&rgb).unwrap(), vec![0x00123456]);
    assert_eq!(image_to_u32(&bgr).unwrap(), vec![0x00123456]);
}

#[test]
fn test_resize_keeps_format() {
    let image = Image::filled(Vec2::new(4, 4), PixelFormat::Bgr8, [0, 0, 200]);
    let resized = resize(&image, Vec2::new(2, 2)).unwrap();
    assert_eq!(resized.size, Vec2::new(2, 2));
    assert_eq!(resized.format, PixelFormat::Bgr8);
    assert_eq!(resized.data.len(), 12);
}

#[test]
fn test_letterbox_centers_vertically() {
    let image = Image::filled(Vec2::new(4, 2), PixelFormat::Rgb8, [255, 255, 255]);
    let buf = letterbox(&image, Vec2::new(4, 4)).unwrap();

    assert_eq!(buf.len(), 16);
    assert!(buf[0..4].iter().all(|&p| p == 0), "top bar should be black");
    assert!(buf[4..12].iter().all(|&p| p == 0x00FFFFFF), "image rows");
    assert!(buf[12..16].iter().all(|&p| p == 0), "bottom bar should be black");
}

#[test]
fn test_letterbox_upscales() {
    let image = Image::filled(Vec2::new(2, 1), PixelFormat::Rgb8, [200, 200, 200]);
    let buf = letterbox(&image, Vec2::new(8, 8)).unwrap();

    // fitted to 8x4, rows 2..6
    assert!(buf[0..16].iter().all(|&p| p == 0));
    assert_ne!(buf[4 * 8 + 4], 0);
    assert!(buf[48..64].iter().all(|&p| p == 0));
}
