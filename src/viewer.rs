// Live viewer window.
// What you SEE:
// • The current galaxy, re-rendered whenever you change a setting.
// • L / S switch lenticular / spiral. Left/Right tilt the lenticular by 5°.
// • Up/Down grow/shrink the radius. A/D remove/add a spiral arm.
// • C / E cycle the center / edge color. ESC quits.
// • The window title doubles as the status bar.

use crate::config::COLOR_PRESETS;
use crate::error::Error;
use crate::types::{Canvas, CanvasConfig, Galaxy, LenticularConfig, SpiralConfig};
use log::info;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use rand::Rng;

const VIEW_SIZE: u32 = 800;
const RADIUS_RANGE: (u32, u32) = (50, 1000);
const RADIUS_STEP: i32 = 10;
const ARMS_RANGE: (u32, u32) = (1, 10);
const TILT_STEP: i32 = 5;

/// Pixels in the layout minifb wants: one u32 per pixel, 0x00RRGGBB.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Pack a canvas for the window. Alpha is dropped (renders are opaque anyway).
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let (w, h) = canvas.dimensions();
        let pixels = canvas
            .pixels()
            .map(|p| {
                let [r, g, b, _] = p.0;
                ((r as u32) << 16) | ((g as u32) << 8) | b as u32
            })
            .collect();
        Self { width: w as usize, height: h as usize, pixels }
    }
}

/// Something the user asked for with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    ShowLenticular,
    ShowSpiral,
    TiltBy(i32),
    RadiusBy(i32),
    ArmsBy(i32),
    NextCenterColor,
    NextEdgeColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Lenticular,
    Spiral,
}

/// The knobs the viewer exposes. Everything else comes from the config defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    kind: Kind,
    radius: u32,
    tilt: i32,     // degrees, kept in [0, 360)
    arms: u32,
    center: usize, // index into COLOR_PRESETS
    edge: usize,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { kind: Kind::Lenticular, radius: 400, tilt: 0, arms: 2, center: 0, edge: 1 }
    }
}

impl ViewerState {
    /// Apply one action; returns true if the picture needs re-rendering.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        let before = self.clone();
        match action {
            ViewerAction::ShowLenticular => self.kind = Kind::Lenticular,
            ViewerAction::ShowSpiral => self.kind = Kind::Spiral,
            // Tilt only means something for the oval
            ViewerAction::TiltBy(d) if self.kind == Kind::Lenticular => {
                self.tilt = (self.tilt + d).rem_euclid(360);
            }
            ViewerAction::TiltBy(_) => {}
            ViewerAction::RadiusBy(d) => {
                let r = (self.radius as i64 + d as i64).clamp(RADIUS_RANGE.0 as i64, RADIUS_RANGE.1 as i64);
                self.radius = r as u32;
            }
            ViewerAction::ArmsBy(d) if self.kind == Kind::Spiral => {
                let n = (self.arms as i64 + d as i64).clamp(ARMS_RANGE.0 as i64, ARMS_RANGE.1 as i64);
                self.arms = n as u32;
            }
            ViewerAction::ArmsBy(_) => {}
            ViewerAction::NextCenterColor => self.center = (self.center + 1) % COLOR_PRESETS.len(),
            ViewerAction::NextEdgeColor => self.edge = (self.edge + 1) % COLOR_PRESETS.len(),
        }
        *self != before
    }

    /// The galaxy these settings describe. The oval uses a = radius, b = radius / 2.
    pub fn galaxy(&self) -> Galaxy {
        let canvas = CanvasConfig {
            width: VIEW_SIZE,
            height: VIEW_SIZE,
            center_color: COLOR_PRESETS[self.center].1,
            edge_color: COLOR_PRESETS[self.edge].1,
            ..CanvasConfig::default()
        };
        match self.kind {
            Kind::Lenticular => Galaxy::Lenticular(LenticularConfig {
                canvas,
                a: self.radius as f64,
                b: (self.radius / 2) as f64,
                angle: self.tilt as f64,
                ..LenticularConfig::default()
            }),
            Kind::Spiral => Galaxy::Spiral(SpiralConfig {
                canvas,
                arms: self.arms,
                radius: self.radius as f64,
                ..SpiralConfig::default()
            }),
        }
    }

    /// One-line summary for the title bar.
    pub fn status(&self) -> String {
        let mut s = format!(
            "Rendered {} galaxy | Radius: {} | Center: {} | Edge: {}",
            self.galaxy().kind(),
            self.radius,
            COLOR_PRESETS[self.center].0,
            COLOR_PRESETS[self.edge].0,
        );
        match self.kind {
            Kind::Lenticular => s.push_str(&format!(" | Tilt: {}°", self.tilt)),
            Kind::Spiral => s.push_str(&format!(" | Arms: {}", self.arms)),
        }
        s
    }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(30);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn set_status(&mut self, status: &str) {
        self.window.set_title(status);
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Key presses since the last frame, as viewer actions. Arrows repeat while held.
    pub fn actions(&self) -> Vec<ViewerAction> {
        let once = |k| self.window.is_key_pressed(k, KeyRepeat::No);
        let held = |k| self.window.is_key_pressed(k, KeyRepeat::Yes);
        [
            (once(Key::L), ViewerAction::ShowLenticular),
            (once(Key::S), ViewerAction::ShowSpiral),
            (held(Key::Left), ViewerAction::TiltBy(-TILT_STEP)),
            (held(Key::Right), ViewerAction::TiltBy(TILT_STEP)),
            (held(Key::Up), ViewerAction::RadiusBy(RADIUS_STEP)),
            (held(Key::Down), ViewerAction::RadiusBy(-RADIUS_STEP)),
            (once(Key::A), ViewerAction::ArmsBy(-1)),
            (once(Key::D), ViewerAction::ArmsBy(1)),
            (once(Key::C), ViewerAction::NextCenterColor),
            (once(Key::E), ViewerAction::NextEdgeColor),
        ]
        .into_iter()
        .filter_map(|(pressed, action)| pressed.then_some(action))
        .collect()
    }
}

fn render_frame(state: &ViewerState, rng: &mut impl Rng) -> Result<FrameBuffer, Error> {
    let canvas = state.galaxy().render_with(rng)?;
    info!("{}", state.status());
    Ok(FrameBuffer::from_canvas(&canvas))
}

/// Open the window and run until it is closed or ESC is pressed.
pub fn run_viewer(rng: &mut impl Rng) -> Result<(), Error> {
    let mut state = ViewerState::default();
    let mut drawer = Drawer::new("Galaxy Viewer", VIEW_SIZE as usize, VIEW_SIZE as usize)?;
    let mut screen = render_frame(&state, rng)?;
    drawer.set_status(&state.status());

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let mut dirty = false;
        for action in drawer.actions() {
            dirty |= state.apply(action);
        }
        if dirty {
            screen = render_frame(&state, rng)?;
            drawer.set_status(&state.status());
        }
        drawer.present(&screen)?;
    }
    Ok(())
}
