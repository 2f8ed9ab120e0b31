#![deny(unsafe_code)]
//! CLI binary for the poster engine.
//!
//! Subcommands:
//! - `render`: plan and render a poster, write PNG
//! - `plan`: print the planned layers without rendering
//! - `seed`: print a fresh random seed
//! - `list`: print available styles, shapes, and palette modes

mod error;

use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env};
use error::CliError;
use log::debug;
use poster_core::{
    plan_layers, random_seed, PaletteMode, PosterConfig, ShapeKind, Srgb, Style,
};
use poster_render::{export_png, write_png, ExportOptions};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "poster", about = "Generative poster CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a poster and write it as PNG.
    Render {
        #[command(flatten)]
        poster: PosterArgs,

        /// Export resolution in dots per inch.
        #[arg(long, default_value_t = 300.0)]
        dpi: f64,

        /// Background-colored margin around the poster, in inches.
        #[arg(long, default_value_t = 0.1)]
        pad: f64,

        /// Output file path. Defaults to poster_<style>_<shape>_<seed>.png.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the planned layers without rendering.
    Plan {
        #[command(flatten)]
        poster: PosterArgs,
    },
    /// Print a fresh random seed.
    Seed,
    /// List available styles, shapes, and palette modes.
    List,
}

#[derive(Args)]
struct PosterArgs {
    /// Poster style (standard, glowing).
    #[arg(long, default_value = "standard")]
    style: String,

    /// Shape (blob, heart). Defaults to blob for standard, heart for glowing.
    #[arg(long)]
    shape: Option<String>,

    /// Number of layers (1-30).
    #[arg(short = 'n', long, default_value_t = 8)]
    layers: usize,

    /// Palette mode (pastel, vivid, mono, random). Unknown names mean random.
    #[arg(short, long, default_value = "pastel")]
    palette: String,

    /// Wobble for the standard style (0.01-0.3).
    #[arg(long, default_value_t = 0.15)]
    wobble: f64,

    /// PRNG seed. Omit for a fresh random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Background color as hex. Defaults to the style's background.
    #[arg(long)]
    background: Option<String>,
}

impl PosterArgs {
    /// Builds and validates the config, filling unset options from the style defaults.
    fn to_config(&self) -> Result<PosterConfig, CliError> {
        let style: Style = self.style.parse()?;
        let mut config = PosterConfig::for_style(style)
            .with_layer_count(self.layers)
            .with_palette_mode(PaletteMode::from(self.palette.as_str()))
            .with_wobble(self.wobble)
            .with_seed(self.seed.unwrap_or_else(random_seed));
        if let Some(shape) = &self.shape {
            config = config.with_shape(shape.parse::<ShapeKind>()?);
        }
        if let Some(hex) = &self.background {
            config = config.with_background(Srgb::from_hex(hex)?);
        }
        config.validate()?;
        debug!("resolved config: {config:?}");
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let styles: Vec<&str> = Style::ALL.iter().map(|s| s.name()).collect();
            let shapes: Vec<&str> = ShapeKind::ALL.iter().map(|s| s.name()).collect();
            let palettes: Vec<&str> = PaletteMode::ALL.iter().map(|m| m.name()).collect();
            if cli.json {
                let info = serde_json::json!({
                    "styles": styles,
                    "shapes": shapes,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Styles:   {}", styles.join(", "));
                println!("Shapes:   {}", shapes.join(", "));
                println!("Palettes: {}", palettes.join(", "));
            }
        }
        Command::Seed => {
            let seed = random_seed();
            if cli.json {
                println!("{}", serde_json::json!({ "seed": seed }));
            } else {
                println!("{seed}");
            }
        }
        Command::Plan { poster } => {
            let config = poster.to_config()?;
            let layers = plan_layers(&config);
            if cli.json {
                let planned: Vec<serde_json::Value> = layers
                    .iter()
                    .map(|layer| {
                        let center = layer.outline().centroid().unwrap_or_default();
                        serde_json::json!({
                            "depth": layer.depth(),
                            "color": layer.color(),
                            "alpha": layer.alpha(),
                            "centroid": [center.x, center.y],
                            "points": layer.outline().len(),
                        })
                    })
                    .collect();
                let info = serde_json::json!({ "config": config, "layers": planned });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} (seed {})", config.title(), config.seed);
                for layer in &layers {
                    let center = layer.outline().centroid().unwrap_or_default();
                    println!(
                        "  depth {:>2}  {}  alpha {:.3}  at ({:.3}, {:.3})",
                        layer.depth(),
                        layer.color().to_hex(),
                        layer.alpha(),
                        center.x,
                        center.y
                    );
                }
            }
        }
        Command::Render {
            poster,
            dpi,
            pad,
            output,
        } => {
            let config = poster.to_config()?;
            let options = ExportOptions {
                dpi,
                pad_inches: pad,
            };
            let output = output.unwrap_or_else(|| PathBuf::from(config.file_name()));

            let bytes = export_png(&config, &options)?;
            write_png(&bytes, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "dpi": dpi,
                    "pad": pad,
                    "bytes": bytes.len(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} {} x{} (seed {}, {dpi} dpi) -> {}",
                    config.style,
                    config.shape,
                    config.layer_count,
                    config.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("poster").chain(args.iter().copied())).unwrap()
    }

    fn poster_args(cli: Cli) -> PosterArgs {
        match cli.command {
            Command::Plan { poster } | Command::Render { poster, .. } => poster,
            _ => panic!("expected a poster subcommand"),
        }
    }

    #[test]
    fn glowing_defaults_to_hearts_on_dark_background() {
        let args = poster_args(parse(&["plan", "--style", "glowing", "--seed", "7"]));
        let config = args.to_config().unwrap();
        assert_eq!(config.style, Style::Glowing);
        assert_eq!(config.shape, ShapeKind::Heart);
        assert_eq!(config.background.to_hex(), "#262633");
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn explicit_options_override_style_defaults() {
        let args = poster_args(parse(&[
            "render",
            "--shape",
            "heart",
            "-n",
            "3",
            "--palette",
            "mono",
            "--background",
            "#101820",
            "--seed",
            "1",
        ]));
        let config = args.to_config().unwrap();
        assert_eq!(config.shape, ShapeKind::Heart);
        assert_eq!(config.layer_count, 3);
        assert_eq!(config.palette_mode, PaletteMode::Mono);
        assert_eq!(config.background.to_hex(), "#101820");
    }

    #[test]
    fn unknown_palette_falls_back_to_random() {
        let args = poster_args(parse(&["plan", "--palette", "sepia", "--seed", "1"]));
        assert_eq!(args.to_config().unwrap().palette_mode, PaletteMode::Random);
    }

    #[test]
    fn bad_inputs_map_to_input_exit_code() {
        for argv in [
            &["plan", "--style", "neon"][..],
            &["plan", "--shape", "star"][..],
            &["plan", "--background", "teal"][..],
        ] {
            let err = poster_args(parse(argv)).to_config().err().unwrap();
            assert_eq!(err.exit_code(), 12, "argv {argv:?}");
        }
    }

    #[test]
    fn out_of_range_layers_map_to_poster_exit_code() {
        let err = poster_args(parse(&["plan", "-n", "31", "--seed", "1"]))
            .to_config()
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn missing_seed_draws_a_random_one() {
        let config = poster_args(parse(&["plan"])).to_config().unwrap();
        assert!(config.seed <= poster_core::config::MAX_RANDOM_SEED);
    }

    #[test]
    fn render_writes_png_to_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let cli = parse(&[
            "render",
            "--seed",
            "3",
            "--dpi",
            "10",
            "-o",
            out.to_str().unwrap(),
        ]);
        run(cli).unwrap_or_else(|e| panic!("render failed: {e}"));
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
