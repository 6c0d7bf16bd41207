// What happens to a finished canvas: color keying, naming and writing it to disk.

use crate::error::Error;
use crate::types::{Canvas, Color};
use image::{DynamicImage, Rgba};
use std::path::{Path, PathBuf};

/// Turn a user-typed name into an output path; names without an extension become JPEGs.
pub fn output_path(name: &str) -> PathBuf {
    let name = name.trim();
    let path = PathBuf::from(name);
    if path.extension().is_some() {
        path
    } else {
        PathBuf::from(format!("{name}.jpg"))
    }
}

/// Repaint every opaque pure-black pixel with `color`.
/// Visual: a black sky becomes `color`, while stars and galaxy pixels keep theirs.
pub fn replace_opaque_black(canvas: &mut Canvas, color: Color) -> usize {
    let mut replaced = 0;
    for px in canvas.pixels_mut() {
        if px.0 == [0, 0, 0, 255] {
            *px = Rgba([color[0], color[1], color[2], 255]);
            replaced += 1;
        }
    }
    replaced
}

/// Drop alpha and write the canvas; the format follows the file extension.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    rgb.save(path)
        .map_err(|e| Error::ImageSave(format!("{}: {e}", path.display())))
}
