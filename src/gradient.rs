// Radial color + alpha ramps shared by both generators.
// Visual: the galaxy core takes the center color and fades toward the edge color
// (and toward transparency) the further a pixel sits from the middle.

use crate::types::Color;

/// Normalized distance in [0,1]. A non-positive radius has no interior, so t is 1.
#[inline]
fn ramp_t(distance: f64, max_radius: f64) -> f64 {
    if max_radius <= 0.0 {
        return 1.0;
    }
    (distance / max_radius).clamp(0.0, 1.0)
}

#[inline]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Linear blend from `center` (t=0) to `edge` (t=1), rounded per channel.
pub fn gradient_color(distance: f64, max_radius: f64, center: Color, edge: Color) -> Color {
    let t = ramp_t(distance, max_radius);
    let mix = |c: u8, e: u8| to_u8((1.0 - t) * c as f64 + t * e as f64);
    [
        mix(center[0], edge[0]),
        mix(center[1], edge[1]),
        mix(center[2], edge[2]),
    ]
}

/// 255 at the center, 0 at (and beyond) `max_radius`.
pub fn gradient_alpha(distance: f64, max_radius: f64) -> u8 {
    to_u8(255.0 * (1.0 - ramp_t(distance, max_radius)))
}
