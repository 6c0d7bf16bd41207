// The render pipeline both morphologies share:
// backdrop -> stars -> galaxy layer -> composite.

use crate::background::{build_background, scatter_stars};
use crate::composite::alpha_composite;
use crate::error::Error;
use crate::lenticular::render_lenticular_with;
use crate::spiral::render_spiral_with;
use crate::types::{Canvas, CanvasConfig, Galaxy};
use rand::Rng;

/// Build the background (may fail before any random draw), sprinkle `stars`,
/// paint the galaxy layer with the same RNG and composite it on top.
pub(crate) fn render_over_background<R, F>(
    canvas: &CanvasConfig,
    stars: usize,
    rng: &mut R,
    paint_layer: F,
) -> Result<Canvas, Error>
where
    R: Rng,
    F: FnOnce(&mut R) -> Canvas,
{
    let mut background = build_background(canvas.width, canvas.height, &canvas.background)?;
    scatter_stars(&mut background, stars, rng);
    let layer = paint_layer(rng);
    alpha_composite(&background, &layer)
}

impl Galaxy {
    /// Render whichever morphology this is.
    pub fn render_with(&self, rng: &mut impl Rng) -> Result<Canvas, Error> {
        match self {
            Galaxy::Lenticular(config) => render_lenticular_with(config, rng),
            Galaxy::Spiral(config) => render_spiral_with(config, rng),
        }
    }

    pub fn render(&self) -> Result<Canvas, Error> {
        self.render_with(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Background, LenticularConfig, SpiralConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tiny_canvas() -> CanvasConfig {
        CanvasConfig { width: 40, height: 30, ..CanvasConfig::default() }
    }

    #[test]
    fn same_seed_same_image() {
        let galaxy = Galaxy::Spiral(SpiralConfig {
            canvas: tiny_canvas(),
            radius: 15.0,
            arm_length: 10.0,
            arm_width: 5.0,
            ..SpiralConfig::default()
        });
        let a = galaxy.render_with(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = galaxy.render_with(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (40, 30));
    }

    #[test]
    fn zero_stars_and_empty_layer_returns_background() {
        let canvas = CanvasConfig { background: Background::Solid([3, 4, 5]), ..tiny_canvas() };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let out = render_over_background(&canvas, 0, &mut rng, |_| Canvas::new(40, 30)).unwrap();
        assert!(out.pixels().all(|p| p.0 == [3, 4, 5, 255]));
    }

    #[test]
    fn bad_background_aborts_render() {
        let galaxy = Galaxy::Lenticular(LenticularConfig {
            canvas: CanvasConfig {
                background: Background::Image("/definitely/not/here.png".into()),
                ..tiny_canvas()
            },
            ..LenticularConfig::default()
        });
        assert!(matches!(galaxy.render(), Err(Error::ImageLoad(_))));
    }
}
