use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack a 3-channel image into `0x00RRGGBB` words, the layout minifb draws.
pub fn image_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    image.format.ensure_packed_color()?;
    image.validate()?;
    let buf = match image.format {
        PixelFormat::Rgb8 => image
            .data
            .chunks_exact(3)
            .map(|c| pack_u32(c[0], c[1], c[2]))
            .collect(),
        _ => image
            .data
            .chunks_exact(3)
            .map(|c| pack_u32(c[2], c[1], c[0]))
            .collect(),
    };
    Ok(buf)
}
