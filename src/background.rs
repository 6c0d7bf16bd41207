// Base canvas the galaxy is drawn over: a solid fill or a picture cropped to size,
// then sprinkled with single-pixel stars.
// Visual: a black (or photo) backdrop with a few thousand gray specks.

use crate::error::Error;
use crate::types::{BLACK, Background, Canvas, Color};
use image::{Rgba, imageops};
use log::debug;
use rand::Rng;
use std::path::Path;

/// How many stars every render sprinkles onto its background.
pub const STAR_COUNT: usize = 4000;

/// Build the opaque base canvas for a render.
pub fn build_background(width: u32, height: u32, source: &Background) -> Result<Canvas, Error> {
    match source {
        Background::Solid(color) => Ok(solid_canvas(width, height, *color)),
        Background::Image(path) => load_cropped(path, width, height),
    }
}

/// Opaque canvas filled with one color.
pub fn solid_canvas(width: u32, height: u32, color: Color) -> Canvas {
    Canvas::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]))
}

/// Load `path` as RGBA and center-crop it to (width, height).
/// Sources smaller than the target are centered on opaque black (letterbox).
fn load_cropped(path: &Path, width: u32, height: u32) -> Result<Canvas, Error> {
    let src = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
        .to_rgba8();
    let (bw, bh) = src.dimensions();
    debug!("background image {} is {bw}x{bh}", path.display());

    // 1) Centered crop window, clipped to what the source actually has.
    let left = bw.saturating_sub(width) / 2;
    let top = bh.saturating_sub(height) / 2;
    let cw = width.min(bw);
    let ch = height.min(bh);
    let cropped = imageops::crop_imm(&src, left, top, cw, ch).to_image();

    if (cw, ch) == (width, height) {
        return Ok(cropped);
    }

    // 2) Too small in some direction: paste it into the middle of a black frame.
    let mut canvas = solid_canvas(width, height, BLACK);
    let paste_x = ((width - cw) / 2) as i64;
    let paste_y = ((height - ch) / 2) as i64;
    imageops::replace(&mut canvas, &cropped, paste_x, paste_y);
    Ok(canvas)
}

/// Set `count` random pixels to opaque gray with brightness in [120,255].
/// Later stars may land on earlier ones; the last write wins.
pub fn scatter_stars(canvas: &mut Canvas, count: usize, rng: &mut impl Rng) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    for _ in 0..count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        let v = rng.gen_range(120..=255u8);
        canvas.put_pixel(x, y, Rgba([v, v, v, 255]));
    }
}
