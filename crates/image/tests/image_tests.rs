use base::Vec2;
use image::{Image, ImageError, PixelFormat};

#[test]
fn test_image_new_bgr8() {
    let size = Vec2::new(2, 3);
    let data: Vec<u8> = (0..18).collect();
    let image = Image::new(size, data.clone(), PixelFormat::Bgr8);

    assert_eq!(image.size, size);
    assert_eq!(image.data, data);
    assert!(image.validate().is_ok());
}

#[test]
fn test_image_filled() {
    let image = Image::filled(Vec2::new(3, 2), PixelFormat::Bgr8, [1, 2, 3]);
    assert_eq!(image.data.len(), 18);
    assert_eq!(image.pixel(2, 1), Some([1, 2, 3]));
}

#[test]
fn test_image_validate_rejects_short_buffer() {
    let image = Image::new(Vec2::new(4, 4), vec![0; 10], PixelFormat::Rgb8);
    assert!(matches!(image.validate(), Err(ImageError::Size(_))));
}

#[test]
fn test_image_validate_skips_jpeg() {
    let image = Image::new(Vec2::new(640, 480), vec![0xFF, 0xD8], PixelFormat::Jpeg);
    assert!(image.validate().is_ok());
}

#[test]
fn test_pixel_out_of_bounds() {
    let image = Image::filled(Vec2::new(2, 2), PixelFormat::Bgr8, [9, 9, 9]);
    assert_eq!(image.pixel(2, 0), None);
    assert_eq!(image.pixel(0, 2), None);
}

#[test]
fn test_pixel_not_available_for_yuyv() {
    let image = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    assert_eq!(image.pixel(0, 0), None);
}

#[test]
fn test_fourcc_mapping() {
    assert_eq!(PixelFormat::from_fourcc(b"YUYV"), Some(PixelFormat::Yuyv));
    assert_eq!(PixelFormat::from_fourcc(b"MJPG"), Some(PixelFormat::Jpeg));
    assert_eq!(PixelFormat::from_fourcc(b"NV12"), None);
    assert_eq!(PixelFormat::Jpeg.as_fourcc(), b"MJPG");
}

#[test]
fn test_ensure_format() {
    assert!(PixelFormat::Bgr8.ensure_format(PixelFormat::Bgr8).is_ok());
    assert!(PixelFormat::Yuyv.ensure_format(PixelFormat::Bgr8).is_err());
    assert!(PixelFormat::Jpeg.ensure_packed_color().is_err());
}
