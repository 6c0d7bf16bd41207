// Interactive terminal wizard: asks for galaxy type, background, colors and the
// shape parameter, then the output name. Works on any reader/writer pair so it can
// be driven from stdin/stdout or from a script in tests.

use crate::config::{COLOR_PRESETS, preset_by_key};
use crate::error::Error;
use crate::output::output_path;
use crate::types::{
    BLACK, Background, CanvasConfig, Color, Galaxy, LenticularConfig, SpiralConfig, WHITE,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Canvas size the wizard always renders at.
pub const WIZARD_SIZE: u32 = 800;

/// Everything the wizard collected.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardPlan {
    pub galaxy: Galaxy,
    /// Solid backdrop picked from the menu: render on black, then repaint black with this.
    pub key_color: Option<Color>,
    pub output: PathBuf,
}

pub struct Wizard<R, W> {
    input: R,
    out: W,
}

fn io_err(e: std::io::Error) -> Error {
    Error::Input(e.to_string())
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn say(&mut self, line: &str) -> Result<(), Error> {
        writeln!(self.out, "{line}").map_err(io_err)
    }

    /// Print `prompt` (no newline), read one line. End of input is an error.
    fn ask(&mut self, prompt: &str) -> Result<String, Error> {
        write!(self.out, "{prompt}").map_err(io_err)?;
        self.out.flush().map_err(io_err)?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(io_err)?;
        if n == 0 {
            return Err(Error::Input(format!("no answer for '{}'", prompt.trim())));
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking until the answer parses and passes `accept`.
    fn ask_number<T: FromStr>(
        &mut self,
        prompt: &str,
        hint: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T, Error> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(v) if accept(&v) => return Ok(v),
                _ => self.say(&format!("'{answer}' is not valid: {hint}"))?,
            }
        }
    }

    fn choose_color(&mut self, title: &str) -> Result<Color, Error> {
        self.say(&format!("\n{title}"))?;
        for (i, (name, _)) in COLOR_PRESETS.iter().enumerate() {
            self.say(&format!("{}. {name}", i + 1))?;
        }
        let choice = self.ask("Select option: ")?;
        Ok(preset_by_key(&choice))
    }

    /// Returns the backdrop to render over plus the color to key black into, if any.
    fn choose_background(&mut self) -> Result<(Background, Option<Color>), Error> {
        self.say("\nBackground options:")?;
        self.say("1. Black")?;
        self.say("2. White")?;
        self.say("3. Image file")?;
        let choice = self.ask("Select option: ")?;
        Ok(match choice.as_str() {
            "2" => (Background::Solid(BLACK), Some(WHITE)),
            "3" => {
                let path = self.ask("Enter image file path: ")?;
                (Background::Image(PathBuf::from(path)), None)
            }
            // "1" and anything unrecognised
            _ => (Background::Solid(BLACK), None),
        })
    }

    pub fn run(&mut self) -> Result<WizardPlan, Error> {
        self.say("===================================")?;
        self.say("     Galaxy Generator (CLI)")?;
        self.say("===================================")?;
        self.say("\nSelect galaxy type:")?;
        self.say("1. Lenticular")?;
        self.say("2. Spiral")?;
        let kind = self.ask("Enter choice: ")?;
        if kind != "1" && kind != "2" {
            return Err(Error::ConfigValidation(format!("invalid galaxy type '{kind}'")));
        }

        let (background, key_color) = self.choose_background()?;
        let canvas = CanvasConfig {
            width: WIZARD_SIZE,
            height: WIZARD_SIZE,
            center_color: self.choose_color("Select center color:")?,
            edge_color: self.choose_color("Select edge color:")?,
            background,
        };

        let galaxy = if kind == "1" {
            let angle: i64 = self.ask_number(
                "\nEnter tilt angle (degrees): ",
                "enter a whole number of degrees",
                |_| true,
            )?;
            Galaxy::Lenticular(LenticularConfig {
                canvas,
                a: 280.0,
                b: 100.0,
                angle: angle as f64,
                ..LenticularConfig::default()
            })
        } else {
            let arms: u32 = self.ask_number(
                "\nEnter number of arms: ",
                "enter a whole number of at least 1",
                |&n| n >= 1,
            )?;
            Galaxy::Spiral(SpiralConfig {
                canvas,
                arms,
                arm_length: 300.0,
                arm_width: 100.0,
                radius: 400.0,
                ..SpiralConfig::default()
            })
        };

        let name = loop {
            let name = self.ask("\nEnter output file name: ")?;
            if !name.is_empty() {
                break name;
            }
            self.say("the file name can't be empty")?;
        };

        Ok(WizardPlan { galaxy, key_color, output: output_path(&name) })
    }
}
