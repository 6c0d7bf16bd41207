// Color presets, color parsing and parameter validation for the front ends.
// The generators themselves accept any numbers; these checks run before them.

use crate::error::Error;
use crate::types::{Color, LenticularConfig, SpiralConfig};

/// Menu colors, in the order the wizard lists them (menu key = index + 1).
pub const COLOR_PRESETS: [(&str, Color); 10] = [
    ("White", [255, 255, 255]),
    ("Blue", [0, 100, 255]),
    ("Red", [255, 50, 50]),
    ("Yellow", [255, 255, 100]),
    ("Purple", [180, 0, 255]),
    ("Cyan", [0, 255, 255]),
    ("Orange", [255, 140, 0]),
    ("Green", [0, 200, 100]),
    ("Pink", [255, 105, 180]),
    ("Light Blue", [150, 200, 255]),
];

/// Preset picked by its 1-based menu key; anything else falls back to White.
pub fn preset_by_key(key: &str) -> Color {
    key.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| COLOR_PRESETS.get(i))
        .map_or(COLOR_PRESETS[0].1, |(_, c)| *c)
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Preset looked up by name ("light blue", "Light-Blue", "lightblue" all match).
pub fn preset_by_name(name: &str) -> Option<Color> {
    let wanted = normalize_name(name);
    COLOR_PRESETS
        .iter()
        .find(|(n, _)| normalize_name(n) == wanted)
        .map(|(_, c)| *c)
}

/// Parse `#rrggbb`, `r,g,b` or a preset name.
pub fn parse_color(s: &str) -> Result<Color, Error> {
    let s = s.trim();
    let bad = || Error::ConfigValidation(format!("'{s}' is not a color (use #rrggbb, r,g,b or a preset name)"));

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            *c = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).map_err(|_| bad())?;
        }
        return Ok(out);
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        let mut out = [0u8; 3];
        for (c, p) in out.iter_mut().zip(parts) {
            *c = p.parse().map_err(|_| bad())?;
        }
        return Ok(out);
    }

    preset_by_name(s).ok_or_else(bad)
}

fn positive(name: &str, v: f64) -> Result<(), Error> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(Error::ConfigValidation(format!("{name} must be a positive number, got {v}")))
    }
}

fn finite(name: &str, v: f64) -> Result<(), Error> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Error::ConfigValidation(format!("{name} must be finite, got {v}")))
    }
}

fn canvas_size(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::ConfigValidation(format!("canvas must be non-empty, got {width}x{height}")));
    }
    Ok(())
}

impl LenticularConfig {
    /// Reject configs the ellipse metric can't handle (a or b of zero divides by zero).
    pub fn validate(&self) -> Result<(), Error> {
        canvas_size(self.canvas.width, self.canvas.height)?;
        positive("a", self.a)?;
        positive("b", self.b)?;
        positive("edge_power", self.edge_power)?;
        finite("angle", self.angle)
    }
}

impl SpiralConfig {
    pub fn validate(&self) -> Result<(), Error> {
        canvas_size(self.canvas.width, self.canvas.height)?;
        if self.arms == 0 {
            return Err(Error::ConfigValidation("arms must be at least 1".into()));
        }
        positive("arm_length", self.arm_length)?;
        positive("arm_width", self.arm_width)?;
        positive("radius", self.radius)
    }
}
