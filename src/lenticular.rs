// Lenticular (elliptical) galaxy field.
// Visual: a soft, tilted oval that is dense and white in the middle and breaks up
// into sparse, bluish, fading specks toward its rim.

use crate::background::STAR_COUNT;
use crate::error::Error;
use crate::gradient::gradient_color;
use crate::render::render_over_background;
use crate::types::{Canvas, LenticularConfig};
use image::Rgba;
use log::debug;
use rand::Rng;

/// Inclusion probability (and alpha intensity) at elliptical metric `p`.
#[inline]
fn falloff(p: f64, edge_power: f64) -> f64 {
    (-p.powf(edge_power)).exp()
}

/// Compute the transparent-by-default galaxy layer.
/// One uniform draw per pixel, sweeping columns (x) outermost.
pub fn lenticular_layer(config: &LenticularConfig, rng: &mut impl Rng) -> Canvas {
    let canvas = &config.canvas;
    let mut layer = Canvas::new(canvas.width, canvas.height);
    let (cx, cy) = canvas.center();

    // Precompute the tilt once; the sweep only multiplies.
    let theta = config.angle.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    let a2 = config.a * config.a;
    let b2 = config.b * config.b;

    let mut included = 0usize;
    for x in 0..canvas.width {
        for y in 0..canvas.height {
            let dx = (x as i64 - cx) as f64;
            let dy = (y as i64 - cy) as f64;

            // Into the ellipse's own frame
            let x_rot = dx * cos_t + dy * sin_t;
            let y_rot = -dx * sin_t + dy * cos_t;
            let p = x_rot * x_rot / a2 + y_rot * y_rot / b2;

            let prob = falloff(p, config.edge_power);
            if rng.gen_range(0.0..1.0) > prob {
                continue;
            }

            let [r, g, b] = gradient_color(p.sqrt(), 1.0, canvas.center_color, canvas.edge_color);
            let alpha = (255.0 * prob).round().clamp(0.0, 255.0) as u8;
            layer.put_pixel(x, y, Rgba([r, g, b, alpha]));
            included += 1;
        }
    }

    debug!(
        "lenticular layer {}x{}: {included} pixels (a={}, b={}, tilt={}°)",
        canvas.width, canvas.height, config.a, config.b, config.angle
    );
    layer
}

/// Full render (background, stars, galaxy layer, composite) with the caller's RNG.
pub fn render_lenticular_with(config: &LenticularConfig, rng: &mut impl Rng) -> Result<Canvas, Error> {
    render_over_background(&config.canvas, STAR_COUNT, rng, |rng| lenticular_layer(config, rng))
}

/// Full render using the thread-local RNG (different every run).
pub fn render_lenticular(config: &LenticularConfig) -> Result<Canvas, Error> {
    render_lenticular_with(config, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CanvasConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small(a: f64, b: f64, angle: f64) -> LenticularConfig {
        LenticularConfig {
            canvas: CanvasConfig {
                width: 100,
                height: 100,
                center_color: [255, 255, 255],
                edge_color: [0, 100, 255],
                ..CanvasConfig::default()
            },
            a,
            b,
            angle,
            ..LenticularConfig::default()
        }
    }

    fn included(layer: &Canvas) -> Vec<(u32, u32)> {
        layer
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [0, 0, 0, 0])
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn falloff_is_one_at_center_and_decays() {
        assert_eq!(falloff(0.0, 1.2), 1.0);
        assert!(falloff(1.0, 1.2) < falloff(0.5, 1.2));
        assert!(falloff(50.0, 1.2) < 1e-20);
    }

    #[test_log::test]
    fn center_pixel_is_always_opaque_center_color() {
        for seed in 0..5 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let layer = lenticular_layer(&small(30.0, 10.0, 0.0), &mut rng);
            assert_eq!(layer.get_pixel(50, 50).0, [255, 255, 255, 255]);
        }
    }

    #[test]
    fn larger_axes_include_more_pixels() {
        let count = |a, b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            included(&lenticular_layer(&small(a, b, 0.0), &mut rng)).len()
        };
        let base = count(20.0, 8.0);
        assert!(count(30.0, 8.0) > base);
        assert!(count(20.0, 14.0) > base);
    }

    #[test]
    fn far_corners_stay_transparent() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layer = lenticular_layer(&small(10.0, 5.0, 0.0), &mut rng);
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(layer.get_pixel(x, y).0, [0, 0, 0, 0]);
        }
    }

    #[test]
    fn tilt_turns_the_long_axis() {
        // Mean squared offset along each screen axis tells us which way the oval points.
        let spread = |angle| {
            let mut rng = ChaCha8Rng::seed_from_u64(9);
            let pts = included(&lenticular_layer(&small(35.0, 6.0, angle), &mut rng));
            let n = pts.len() as f64;
            let sx: f64 = pts.iter().map(|&(x, _)| (x as f64 - 50.0).powi(2)).sum::<f64>() / n;
            let sy: f64 = pts.iter().map(|&(_, y)| (y as f64 - 50.0).powi(2)).sum::<f64>() / n;
            (sx, sy)
        };
        let (sx, sy) = spread(0.0);
        assert!(sx > 4.0 * sy);
        let (sx, sy) = spread(90.0);
        assert!(sy > 4.0 * sx);
    }

    #[test]
    fn alpha_tracks_probability() {
        // Every drawn pixel's alpha is round(255 * exp(-p^k)), so the core is the brightest.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let layer = lenticular_layer(&small(30.0, 10.0, 0.0), &mut rng);
        let center_alpha = layer.get_pixel(50, 50).0[3];
        assert!(layer.pixels().all(|p| p.0[3] <= center_alpha));
        // One step right of center: p = 1/900
        let p = 1.0f64 / 900.0;
        let px = layer.get_pixel(51, 50).0;
        if px != [0, 0, 0, 0] {
            assert_eq!(px[3], (255.0 * falloff(p, 1.2)).round() as u8);
        }
    }

    #[test]
    fn end_to_end_center_pixel() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let img = render_lenticular_with(&small(30.0, 10.0, 0.0), &mut rng).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
        assert_eq!(img.get_pixel(50, 50).0, [255, 255, 255, 255]);
        // Output stays fully opaque because the backdrop is.
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
