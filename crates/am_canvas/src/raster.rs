use image::{GrayImage, Luma};

/// Plot a filled disc, skipping pixels outside the buffer.
pub fn fill_circle(img: &mut GrayImage, cx: i32, cy: i32, radius: i32, value: u8) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            put_clipped(img, cx + dx, cy + dy, value);
        }
    }
}

/// Plot a straight stroke of the given thickness between two points.
///
/// Bresenham along the line, stamping a disc of `thickness / 2` at each step so
/// the stroke has uniform width regardless of slope.
pub fn stroke_line(
    img: &mut GrayImage,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    value: u8,
) {
    let radius = (thickness / 2).max(0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if radius == 0 {
            put_clipped(img, x, y, value);
        } else {
            fill_circle(img, x, y, radius, value);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn put_clipped(img: &mut GrayImage, x: i32, y: i32, value: u8) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Luma([value]));
    }
}
