// Command line front end.
// • `render lenticular|spiral`: one image from flags, no questions asked.
// • `wizard`: the same, but asks for everything on the terminal.
// • `view`: a live window you can steer with the keyboard.

use clap::{Args, Parser, Subcommand};
use galaxy_gen::config::parse_color;
use galaxy_gen::output::{output_path, replace_opaque_black, save_canvas};
#[cfg(feature = "viewer")]
use galaxy_gen::viewer::run_viewer;
use galaxy_gen::wizard::Wizard;
use galaxy_gen::{Background, CanvasConfig, Error, Galaxy, LenticularConfig, SpiralConfig};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Procedural galaxy image generator")]
struct Cli {
    /// Seed for reproducible output (random every run when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one galaxy straight from command line flags
    Render {
        #[command(subcommand)]
        shape: Shape,
    },
    /// Ask for the settings interactively, then render and save
    Wizard,
    /// Open a window and tweak the galaxy live
    #[cfg(feature = "viewer")]
    View,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// Tilted elliptical galaxy
    Lenticular {
        #[command(flatten)]
        common: CommonArgs,
        /// Semi-major axis in pixels
        #[arg(long, default_value_t = 280.0)]
        a: f64,
        /// Semi-minor axis in pixels
        #[arg(long, default_value_t = 100.0)]
        b: f64,
        /// Tilt in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        angle: f64,
        /// Falloff sharpness
        #[arg(long, default_value_t = 1.2)]
        edge_power: f64,
    },
    /// Multi-arm spiral galaxy
    Spiral {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, default_value_t = 2)]
        arms: u32,
        #[arg(long, default_value_t = 300.0)]
        arm_length: f64,
        #[arg(long, default_value_t = 100.0)]
        arm_width: f64,
        /// Disk radius in pixels
        #[arg(long, default_value_t = 400.0)]
        radius: f64,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 800)]
    height: u32,
    /// Core color: #rrggbb, r,g,b or a preset name
    #[arg(long, default_value = "white")]
    center: String,
    /// Rim color: #rrggbb, r,g,b or a preset name
    #[arg(long, default_value = "blue")]
    edge: String,
    /// A color, or a path to an image to crop behind the galaxy
    #[arg(long)]
    background: Option<String>,
    /// Output file; names without an extension are saved as .jpg
    #[arg(long, short, default_value = "galaxy.png")]
    output: String,
}

impl CommonArgs {
    fn canvas(&self) -> Result<CanvasConfig, Error> {
        // Anything that parses as a color is a fill; everything else is taken as a path.
        let background = match self.background.as_deref() {
            None => Background::default(),
            Some(s) => parse_color(s).map_or_else(|_| Background::Image(PathBuf::from(s)), Background::Solid),
        };
        Ok(CanvasConfig {
            width: self.width,
            height: self.height,
            center_color: parse_color(&self.center)?,
            edge_color: parse_color(&self.edge)?,
            background,
        })
    }
}

fn render_from_flags(shape: Shape, rng: &mut impl Rng) -> Result<(), Error> {
    let (galaxy, output) = match shape {
        Shape::Lenticular { common, a, b, angle, edge_power } => {
            let cfg = LenticularConfig { canvas: common.canvas()?, a, b, angle, edge_power };
            cfg.validate()?;
            (Galaxy::Lenticular(cfg), common.output)
        }
        Shape::Spiral { common, arms, arm_length, arm_width, radius } => {
            let cfg = SpiralConfig {
                canvas: common.canvas()?,
                arms,
                arm_length,
                arm_width,
                radius,
                ..SpiralConfig::default()
            };
            cfg.validate()?;
            (Galaxy::Spiral(cfg), common.output)
        }
    };

    info!("Generating {} galaxy...", galaxy.kind());
    let image = galaxy.render_with(rng)?;
    let path = output_path(&output);
    save_canvas(&image, &path)?;
    info!("Galaxy saved as: {}", path.display());
    Ok(())
}

fn run_wizard(rng: &mut impl Rng) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let plan = Wizard::new(stdin.lock(), std::io::stdout()).run()?;

    println!("\nGenerating galaxy...");
    let mut image = plan.galaxy.render_with(rng)?;
    if let Some(color) = plan.key_color {
        let n = replace_opaque_black(&mut image, color);
        info!("keyed {n} background pixels to {color:?}");
    }
    save_canvas(&image, &plan.output)?;

    println!("\nGalaxy saved as: {}", plan.output.display());
    println!("Done.");
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    /* --- RNG ---
       Seeded runs are reproducible; otherwise every run looks different. */
    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    match cli.command {
        Command::Render { shape } => render_from_flags(shape, &mut rng),
        Command::Wizard => run_wizard(&mut rng),
        #[cfg(feature = "viewer")]
        Command::View => run_viewer(&mut rng),
    }
}
