use {
    crate::{DecodedSymbol, display_polygon},
    base::Vec2,
    image::{Image, ImageError},
};

/// Outline style for symbol polygons. `color` is in the frame's channel
/// order, so the default `[255, 0, 0]` is blue on a `Bgr8` frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub thickness: u32,
    pub color: [u8; 3],
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            thickness: 3,
            color: [255, 0, 0],
        }
    }
}

/// Edges of the closed loop through `polygon`: consecutive pairs plus the
/// wrap from the last vertex back to the first.
pub fn polygon_edges(polygon: &[Vec2<i32>]) -> Vec<(Vec2<i32>, Vec2<i32>)> {
    let n = polygon.len();
    (0..n).map(|j| (polygon[j], polygon[(j + 1) % n])).collect()
}

/// Stroke the closed outline of `polygon` onto a 3-channel frame.
pub fn draw_polygon(
    image: &mut Image,
    polygon: &[Vec2<i32>],
    stroke: &Stroke,
) -> Result<(), ImageError> {
    image.format.ensure_packed_color()?;
    image.validate()?;
    let size = image.size;
    for (from, to) in polygon_edges(polygon) {
        draw_line(&mut image.data, size, from, to, stroke);
    }
    Ok(())
}

/// Draw the display polygon of every symbol onto `image`.
pub fn annotate(
    image: &mut Image,
    symbols: &[DecodedSymbol],
    stroke: &Stroke,
) -> Result<(), ImageError> {
    for symbol in symbols {
        draw_polygon(image, &display_polygon(&symbol.boundary), stroke)?;
    }
    Ok(())
}

/// Draw a line using Bresenham's algorithm with clipping, stamping a
/// `thickness`-wide square brush at every step.
pub fn draw_line(buf: &mut [u8], size: Vec2<usize>, from: Vec2<i32>, to: Vec2<i32>, stroke: &Stroke) {
    let (width, height) = (size.x as i64, size.y as i64);
    let (mut x0, mut y0) = (from.x as i64, from.y as i64);
    let (mut x1, mut y1) = (to.x as i64, to.y as i64);

    // Cohen-Sutherland line clipping to bounds
    loop {
        let outcode0 = compute_outcode(x0, y0, width, height);
        let outcode1 = compute_outcode(x1, y1, width, height);

        if (outcode0 | outcode1) == 0 {
            break;
        } else if (outcode0 & outcode1) != 0 {
            return;
        }

        let outcode = if outcode0 != 0 { outcode0 } else { outcode1 };
        let (x, y) = clip_point(x0, y0, x1, y1, outcode, width, height);
        if outcode == outcode0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        stamp(buf, size, x0, y0, stroke);

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn stamp(buf: &mut [u8], size: Vec2<usize>, cx: i64, cy: i64, stroke: &Stroke) {
    let thickness = stroke.thickness.max(1) as i64;
    let lo = -(thickness - 1) / 2;
    let hi = thickness / 2;
    for y in (cy + lo)..=(cy + hi) {
        for x in (cx + lo)..=(cx + hi) {
            if x >= 0 && y >= 0 && (x as usize) < size.x && (y as usize) < size.y {
                let idx = (y as usize * size.x + x as usize) * 3;
                buf[idx..idx + 3].copy_from_slice(&stroke.color);
            }
        }
    }
}

// Cohen-Sutherland clipping helpers
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn compute_outcode(x: i64, y: i64, width: i64, height: i64) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

fn clip_point(
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    outcode: u8,
    width: i64,
    height: i64,
) -> (i64, i64) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if outcode & TOP != 0 {
        (x0 + dx * (0 - y0) / dy, 0)
    } else if outcode & BOTTOM != 0 {
        (x0 + dx * (height - 1 - y0) / dy, height - 1)
    } else if outcode & LEFT != 0 {
        (0, y0 + dy * (0 - x0) / dx)
    } else {
        (width - 1, y0 + dy * (width - 1 - x0) / dx)
    }
}
