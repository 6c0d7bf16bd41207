// "Over" compositing of the galaxy layer onto the starry background.
// Visual: translucent galaxy pixels tint the stars behind them; transparent ones
// leave the background exactly as it was.

use crate::error::Error;
use crate::types::Canvas;
use image::Rgba;

// Fixed-point bits used for the blend coefficients.
const PRECISION_BITS: u32 = 7;

/// Integer division by 255 with the shift trick (input must carry its own rounding bias).
#[inline]
fn shift_div255(v: u32) -> u32 {
    ((v >> 8) + v) >> 8
}

/// Blend one `top` pixel over one `bottom` pixel, non-premultiplied.
/// Bit-exact with the usual image-library alpha_composite integer path.
#[inline]
pub fn over(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let [tr, tg, tb, ta] = top.0.map(u32::from);
    let [br, bg, bb, ba] = bottom.0.map(u32::from);
    if ta == 0 {
        return bottom;
    }

    let blend = ba * (255 - ta);
    let out_a255 = ta * 255 + blend; // never 0 here since ta > 0
    let coef1 = ta * 255 * 255 * (1 << PRECISION_BITS) / out_a255;
    let coef2 = 255 * (1 << PRECISION_BITS) - coef1;

    let channel = |t: u32, b: u32| {
        let mixed = t * coef1 + b * coef2;
        (shift_div255(mixed + (0x80 << PRECISION_BITS)) >> PRECISION_BITS) as u8
    };

    Rgba([
        channel(tr, br),
        channel(tg, bg),
        channel(tb, bb),
        shift_div255(out_a255 + 0x80) as u8,
    ])
}

/// Composite `layer` over `background` into a fresh canvas.
pub fn alpha_composite(background: &Canvas, layer: &Canvas) -> Result<Canvas, Error> {
    if background.dimensions() != layer.dimensions() {
        return Err(Error::DimensionMismatch(format!(
            "alpha_composite: background {:?} vs layer {:?}",
            background.dimensions(),
            layer.dimensions()
        )));
    }

    let mut out = background.clone();
    for (dst, src) in out.pixels_mut().zip(layer.pixels()) {
        *dst = over(*dst, *src);
    }
    Ok(out)
}
