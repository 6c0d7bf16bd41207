// Spiral galaxy field.
// Visual: a bright core with N curved arms. Each accepted pixel near the core is
// twisted hard, pixels near the rim barely, and the result is stamped once per arm.

use crate::background::STAR_COUNT;
use crate::error::Error;
use crate::gradient::{gradient_alpha, gradient_color};
use crate::render::render_over_background;
use crate::types::{Canvas, SpiralConfig};
use image::Rgba;
use log::debug;
use rand::Rng;
use std::f64::consts::PI;

/// A pixel that survived the inclusion draw, already twisted into spiral space
/// (relative to the canvas center). `d_center` is its ORIGINAL distance, which
/// alone decides color and alpha for every arm copy.
#[derive(Clone, Copy, Debug)]
struct ArmSeed {
    x_rot: f64,
    y_rot: f64,
    d_center: f64,
}

/// Everything about a spiral that doesn't change from pixel to pixel.
struct SpiralField<'c> {
    config: &'c SpiralConfig,
    cx: i64,
    cy: i64,
    twist: f64,              // 0.2·π·radius; divided by distance gives the twist angle
    arm_rot: Vec<(f64, f64)>, // (sin, cos) of 2π·i/arms for every arm
}

impl<'c> SpiralField<'c> {
    fn new(config: &'c SpiralConfig) -> Self {
        let (cx, cy) = config.canvas.center();
        let arms = config.arms;
        let arm_rot = (0..arms)
            .map(|i| (2.0 * PI / arms as f64 * i as f64).sin_cos())
            .collect();
        Self { config, cx, cy, twist: 0.2 * PI * config.radius, arm_rot }
    }

    /// Run the per-pixel tests for offset (dx, dy). Draws one uniform number iff the
    /// pixel lies inside the disk.
    fn seed(&self, dx: f64, dy: f64, rng: &mut impl Rng) -> Option<ArmSeed> {
        let cfg = self.config;

        // 1) Outside the disk: nothing, and no draw.
        let d_center = dx.hypot(dy);
        if d_center > cfg.radius {
            return None;
        }

        // 2) Arms get wider toward the rim (never thinner than a pixel).
        let rim_ratio = if cfg.radius > 0.0 { d_center / cfg.radius } else { 0.0 };
        let width_factor = (cfg.arm_width * rim_ratio).max(1.0);

        // 3) Two axis-aligned falloffs, evaluated before any rotation.
        let prob = (-(dx * dx) / (cfg.arm_length * cfg.arm_length)).exp()
            * (-(dy * dy) / (width_factor * width_factor)).exp();
        if rng.gen_range(0.0..1.0) > prob {
            return None;
        }

        // 4) Odd arm counts only keep the right half.
        if cfg.arms % 2 == 1 && dx <= 0.0 {
            return None;
        }

        // 5) Twist: the closer to the core, the larger the angle.
        let angle = if d_center != 0.0 { self.twist / d_center } else { 0.0 };
        let (sin_a, cos_a) = angle.sin_cos();
        Some(ArmSeed {
            x_rot: dx * cos_a - dy * sin_a,
            y_rot: dx * sin_a + dy * cos_a,
            d_center,
        })
    }

    /// Write one copy of `seed` per arm. Off-canvas copies are dropped; a later arm
    /// overwrites an earlier one landing on the same pixel.
    fn stamp(&self, layer: &mut Canvas, seed: ArmSeed) -> usize {
        let canvas = &self.config.canvas;
        let [r, g, b] = gradient_color(seed.d_center, self.config.radius, canvas.center_color, canvas.edge_color);
        let alpha = gradient_alpha(seed.d_center, self.config.radius);
        let color = Rgba([r, g, b, alpha]);

        let (w, h) = (canvas.width as i64, canvas.height as i64);
        let mut written = 0;
        for &(sin_arm, cos_arm) in &self.arm_rot {
            // `as i64` truncates toward zero
            let fx = (self.cx as f64 + seed.x_rot * cos_arm - seed.y_rot * sin_arm) as i64;
            let fy = (self.cy as f64 + seed.x_rot * sin_arm + seed.y_rot * cos_arm) as i64;
            if (0..w).contains(&fx) && (0..h).contains(&fy) {
                layer.put_pixel(fx as u32, fy as u32, color);
                written += 1;
            }
        }
        written
    }
}

/// Compute the transparent-by-default spiral layer, sweeping columns (x) outermost.
pub fn spiral_layer(config: &SpiralConfig, rng: &mut impl Rng) -> Canvas {
    let canvas = &config.canvas;
    let field = SpiralField::new(config);
    let mut layer = Canvas::new(canvas.width, canvas.height);

    let mut seeds = 0usize;
    let mut writes = 0usize;
    for x in 0..canvas.width {
        for y in 0..canvas.height {
            let dx = (x as i64 - field.cx) as f64;
            let dy = (y as i64 - field.cy) as f64;
            if let Some(seed) = field.seed(dx, dy, rng) {
                seeds += 1;
                writes += field.stamp(&mut layer, seed);
            }
        }
    }

    debug!(
        "spiral layer {}x{}: {seeds} seeds, {writes} arm writes ({} arms, radius {})",
        canvas.width, canvas.height, config.arms, config.radius
    );
    layer
}

/// Full render (background, stars, galaxy layer, composite) with the caller's RNG.
pub fn render_spiral_with(config: &SpiralConfig, rng: &mut impl Rng) -> Result<Canvas, Error> {
    render_over_background(&config.canvas, STAR_COUNT, rng, |rng| spiral_layer(config, rng))
}

/// Full render using the thread-local RNG (different every run).
pub fn render_spiral(config: &SpiralConfig) -> Result<Canvas, Error> {
    render_spiral_with(config, &mut rand::thread_rng())
}
