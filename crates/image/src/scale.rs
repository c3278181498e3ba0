use {
    crate::*,
    base::Vec2,
    crates_image::{RgbImage, imageops::FilterType},
};

/// Largest size with the aspect ratio of `src` that fits inside `bounds`.
///
/// Scales up as well as down. Both components stay at least 1 unless `src`
/// or `bounds` is empty.
pub fn fit_size(src: Vec2<usize>, bounds: Vec2<usize>) -> Vec2<usize> {
    if src.x == 0 || src.y == 0 || bounds.x == 0 || bounds.y == 0 {
        return Vec2::new(0, 0);
    }
    // width-limited candidate
    let height = src.y * bounds.x / src.x;
    if height <= bounds.y {
        return Vec2::new(bounds.x, height.max(1));
    }
    let width = src.x * bounds.y / src.y;
    Vec2::new(width.max(1), bounds.y)
}

/// Resample a 3-channel image to `size` (triangle filter).
///
/// Channel order is preserved; the resampler treats the bytes as opaque.
pub fn resize(image: &Image, size: Vec2<usize>) -> Result<Image, ImageError> {
    image.format.ensure_packed_color()?;
    image.validate()?;
    if image.size == size {
        return Ok(image.clone());
    }
    let buffer = RgbImage::from_raw(image.size.x as u32, image.size.y as u32, image.data.clone())
        .ok_or_else(|| ImageError::Size("buffer does not match image size".to_string()))?;
    let resized =
        crates_image::imageops::resize(&buffer, size.x as u32, size.y as u32, FilterType::Triangle);
    Ok(Image::new(size, resized.into_raw(), image.format))
}

/// Scale `image` to fit a `surface`-sized framebuffer, preserving aspect
/// ratio, centered on black. Returns packed `0x00RRGGBB` words.
pub fn letterbox(image: &Image, surface: Vec2<usize>) -> Result<Vec<u32>, ImageError> {
    let fitted = fit_size(image.size, surface);
    let mut buf = vec![0u32; surface.area()];
    if fitted.area() == 0 {
        return Ok(buf);
    }

    let pixels = image_to_u32(&resize(image, fitted)?)?;
    let left = (surface.x - fitted.x) / 2;
    let top = (surface.y - fitted.y) / 2;
    for (row, line) in pixels.chunks_exact(fitted.x).enumerate() {
        let start = (top + row) * surface.x + left;
        buf[start..start + fitted.x].copy_from_slice(line);
    }
    Ok(buf)
}
