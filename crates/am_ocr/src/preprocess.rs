use am_canvas::Canvas;
use image::GrayImage;

/// Prepare the ink canvas for recognition.
///
/// Ink is stored light-on-dark; recognition engines expect dark strokes on a
/// light page, so the buffer is inverted before it is handed over.
pub fn prepare_for_ocr(canvas: &Canvas) -> GrayImage {
    let mut img = canvas.image().clone();
    for px in img.pixels_mut() {
        px.0[0] = 255 - px.0[0];
    }
    img
}
