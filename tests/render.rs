// End-to-end checks through the public API only.

use galaxy_gen::output::{replace_opaque_black, save_canvas};
use galaxy_gen::{
    Background, CanvasConfig, Error, Galaxy, LenticularConfig, SpiralConfig, lenticular_layer,
    render_lenticular, render_lenticular_with, render_spiral, render_spiral_with, spiral_layer,
};
use image::{Rgba, RgbaImage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn canvas(width: u32, height: u32) -> CanvasConfig {
    CanvasConfig {
        width,
        height,
        center_color: [255, 255, 255],
        edge_color: [0, 100, 255],
        ..CanvasConfig::default()
    }
}

#[test]
fn lenticular_reference_case() {
    let cfg = LenticularConfig { canvas: canvas(100, 100), a: 30.0, b: 10.0, angle: 0.0, ..LenticularConfig::default() };
    let img = render_lenticular(&cfg).unwrap();
    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(img.get_pixel(50, 50).0, [255, 255, 255, 255]);
}

#[test]
fn spiral_with_zero_radius_shows_only_background() {
    let cfg = SpiralConfig { canvas: canvas(60, 60), radius: 0.0, ..SpiralConfig::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let layer = spiral_layer(&cfg, &mut rng);
    assert!(layer.pixels().all(|p| p.0[3] == 0));

    // Whole render: black plus gray stars, nothing tinted by the galaxy.
    let img = render_spiral(&cfg).unwrap();
    for p in img.pixels() {
        let [r, g, b, a] = p.0;
        assert_eq!(a, 255);
        assert!(r == g && g == b, "non-gray pixel {:?}", p.0);
    }
}

#[test]
fn layers_are_reproducible_with_a_seed() {
    let lent = LenticularConfig { canvas: canvas(80, 60), a: 25.0, b: 12.0, angle: 30.0, ..LenticularConfig::default() };
    let a = lenticular_layer(&lent, &mut ChaCha8Rng::seed_from_u64(1));
    let b = lenticular_layer(&lent, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(a, b);
    let c = lenticular_layer(&lent, &mut ChaCha8Rng::seed_from_u64(2));
    assert_ne!(a, c);
}

#[test]
fn stars_show_through_transparent_layer_pixels() {
    // A tiny galaxy covers a handful of pixels; the 4000 stars land everywhere else.
    let cfg = LenticularConfig { canvas: canvas(64, 64), a: 4.0, b: 2.0, ..LenticularConfig::default() };
    let img = render_lenticular_with(&cfg, &mut ChaCha8Rng::seed_from_u64(12)).unwrap();
    let stars = img.pixels().filter(|p| p.0 != [0, 0, 0, 255]).count();
    assert!(stars > 100, "expected plenty of stars, got {stars}");
}

#[test]
fn image_background_is_used_and_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sky.png");
    RgbaImage::from_pixel(100, 100, Rgba([40, 0, 60, 255])).save(&path).unwrap();

    let cfg = SpiralConfig {
        canvas: CanvasConfig { background: Background::Image(path), ..canvas(200, 160) },
        radius: 5.0,
        arm_length: 4.0,
        arm_width: 2.0,
        ..SpiralConfig::default()
    };
    let img = render_spiral_with(&cfg, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    // 100x100 source centered in 200x160: x in [50,150), y in [30,130)
    assert_eq!(img.get_pixel(0, 0).0[3], 255);
    let purple = img.pixels().filter(|p| p.0 == [40, 0, 60, 255]).count();
    // Stars cover roughly an eighth of the canvas, the galaxy a few dozen pixels.
    assert!(purple > 7000, "only {purple} background pixels survived");
    let letterbox = img
        .enumerate_pixels()
        .filter(|(x, y, _)| *x < 50 || *x >= 150 || *y < 30 || *y >= 130)
        .all(|(_, _, p)| p.0 != [40, 0, 60, 255]);
    assert!(letterbox);

    let missing = Galaxy::Spiral(SpiralConfig {
        canvas: CanvasConfig { background: Background::Image(dir.path().join("gone.png")), ..canvas(10, 10) },
        ..SpiralConfig::default()
    });
    assert!(matches!(missing.render(), Err(Error::ImageLoad(_))));
}

#[test]
fn keyed_render_round_trips_through_png() {
    let cfg = LenticularConfig { canvas: canvas(40, 40), a: 8.0, b: 4.0, ..LenticularConfig::default() };
    let mut img = render_lenticular_with(&cfg, &mut ChaCha8Rng::seed_from_u64(6)).unwrap();
    replace_opaque_black(&mut img, [255, 255, 255]);
    assert!(img.pixels().all(|p| p.0 != [0, 0, 0, 255]));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("keyed.png");
    save_canvas(&img, &out).unwrap();
    let back = image::open(&out).unwrap().to_rgb8();
    assert_eq!(back.get_pixel(20, 20).0, [255, 255, 255]);
}
