use {crate::*, base::Vec2};

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}

/// Convert a YUYV frame to packed `Bgr8`.
pub fn yuyv_to_bgr(size: Vec2<usize>, data: &[u8]) -> Result<Image, ImageError> {
    let expected = size.area() * 2;
    if data.len() < expected || size.x % 2 != 0 {
        return Err(ImageError::Size(format!(
            "YUYV {}x{} needs {} bytes and an even width, got {} bytes",
            size.x,
            size.y,
            expected,
            data.len()
        )));
    }

    let mut bgr = Vec::with_capacity(size.area() * 3);
    for chunk in data[..expected].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        bgr.extend_from_slice(&[b0, g0, r0, b1, g1, r1]);
    }

    Ok(Image::new(size, bgr, PixelFormat::Bgr8))
}

/// Decode a JPEG (MJPEG camera frame) into packed `Bgr8`.
pub fn jpeg_to_bgr(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut data = rgb.into_raw();
    swap_red_blue(&mut data);
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        data,
        PixelFormat::Bgr8,
    ))
}

/// Swap the first and third byte of every 3-byte pixel in place.
pub fn swap_red_blue(data: &mut [u8]) {
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

fn reorder(image: &Image, target: PixelFormat) -> Result<Image, ImageError> {
    image.format.ensure_packed_color()?;
    image.validate()?;
    let mut out = image.clone();
    if image.format != target {
        swap_red_blue(&mut out.data);
        out.format = target;
    }
    Ok(out)
}

/// Return the image in `Rgb8` channel order (BGR input is swapped).
pub fn to_rgb(image: &Image) -> Result<Image, ImageError> {
    reorder(image, PixelFormat::Rgb8)
}

/// Return the image in `Bgr8` channel order (RGB input is swapped).
pub fn to_bgr(image: &Image) -> Result<Image, ImageError> {
    reorder(image, PixelFormat::Bgr8)
}

/// 8-bit luma plane (BT.601 weights) of a packed color image.
pub fn to_luma(image: &Image) -> Result<Vec<u8>, ImageError> {
    image.format.ensure_packed_color()?;
    image.validate()?;
    let (ri, bi) = match image.format {
        PixelFormat::Rgb8 => (0, 2),
        _ => (2, 0),
    };
    Ok(image
        .data
        .chunks_exact(3)
        .map(|px| {
            let (r, g, b) = (px[ri] as u32, px[1] as u32, px[bi] as u32);
            ((77 * r + 150 * g + 29 * b) >> 8) as u8
        })
        .collect())
}
