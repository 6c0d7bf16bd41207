// Core types shared by the generators and the front ends.

use image::RgbaImage;
use std::path::PathBuf;

/// Width × height RGBA grid, 8 bits per channel. Alpha 0 = transparent, 255 = opaque.
/// Visual: this is the image you finally save or see in the viewer window.
pub type Canvas = RgbaImage;

/// Plain RGB triple.
pub type Color = [u8; 3];

pub const BLACK: Color = [0, 0, 0];
pub const WHITE: Color = [255, 255, 255];

/// What sits behind the galaxy before stars are sprinkled on.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Solid(Color),   // opaque fill
    Image(PathBuf), // center-cropped (or letterboxed) picture
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(BLACK)
    }
}

/// Settings every galaxy shares: canvas size, gradient endpoints, backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub center_color: Color, // color at distance 0
    pub edge_color: Color,   // color at (and past) the gradient radius
    pub background: Background,
}

impl CanvasConfig {
    /// Integer center of the canvas (what every field is measured from).
    pub fn center(&self) -> (i64, i64) {
        (self.width as i64 / 2, self.height as i64 / 2)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            center_color: WHITE,
            edge_color: [0, 100, 255],
            background: Background::default(),
        }
    }
}

/// Elliptical galaxy seen at a tilt.
#[derive(Clone, Debug, PartialEq)]
pub struct LenticularConfig {
    pub canvas: CanvasConfig,
    pub a: f64,          // semi-major axis in pixels
    pub b: f64,          // semi-minor axis in pixels
    pub edge_power: f64, // sharpness of the exp(-p^k) falloff
    pub angle: f64,      // tilt in degrees
}

impl Default for LenticularConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            a: 280.0,
            b: 100.0,
            edge_power: 1.2,
            angle: 0.0,
        }
    }
}

/// Twisted multi-arm disk.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralConfig {
    pub canvas: CanvasConfig,
    pub arms: u32,
    pub arm_length: f64, // falloff scale along x
    pub arm_width: f64,  // cross-section at the rim; shrinks toward the core
    pub radius: f64,     // disk radius; nothing is drawn beyond it
    pub edge_power: f64, // kept for parity with the lenticular config; the spiral field ignores it
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            arms: 2,
            arm_length: 200.0,
            arm_width: 100.0,
            radius: 400.0,
            edge_power: 20.0,
        }
    }
}

/// Either morphology, as handed around by the CLI, wizard and viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum Galaxy {
    Lenticular(LenticularConfig),
    Spiral(SpiralConfig),
}

impl Galaxy {
    pub fn canvas(&self) -> &CanvasConfig {
        match self {
            Galaxy::Lenticular(c) => &c.canvas,
            Galaxy::Spiral(c) => &c.canvas,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Galaxy::Lenticular(_) => "lenticular",
            Galaxy::Spiral(_) => "spiral",
        }
    }
}
