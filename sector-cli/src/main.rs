//! Renders sector decompositions from the command line.
//!
//! Provides:
//! - SVG output of the original and rearranged panels
//! - JSON output of the computed polygons
//! - A convergence table of width/height against slice count

mod colormap;
mod render;

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use sector_core::{limits, Decomposition, Params, DEFAULT_SAMPLES};

use render::{render_svg, RenderConfig};

#[derive(Parser)]
#[command(name = "sector")]
#[command(about = "Slice a circular sector and rearrange it into a near-rectangle", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SECTOR_BUILD_SHA"), ")"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParamArgs {
    /// Sector angle in degrees (10-360)
    #[arg(short, long, default_value_t = Params::default().angle)]
    angle: f64,

    /// Number of slices (2-100)
    #[arg(short = 'n', long, default_value_t = Params::default().segments)]
    segments: usize,

    /// Radius (1-10)
    #[arg(short, long, default_value_t = Params::default().radius)]
    radius: f64,

    /// Read parameters from a JSON file (`{"angle": .., "segments": .., "radius": ..}`) instead
    #[arg(short, long, conflicts_with_all = ["angle", "segments", "radius"])]
    params: Option<PathBuf>,

    /// Snap out-of-range or off-step values onto the slider grid instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Arc points per slice
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,
}

impl ParamArgs {
    fn params(&self) -> Result<Params> {
        let params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing params from {}", path.display()))?
            }
            None => Params::new(self.angle, self.segments, self.radius),
        };
        Ok(if self.clamp { params.clamped() } else { params })
    }

    fn decompose(&self) -> Result<Decomposition> {
        let params = self.params()?;
        Decomposition::new(params, self.samples).with_context(|| format!("decomposing {}", params))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render both panels to SVG
    Render {
        #[command(flatten)]
        params: ParamArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the background grid
        #[arg(long)]
        no_grid: bool,

        /// Omit the formula caption
        #[arg(long)]
        no_caption: bool,
    },

    /// Write the computed polygons, views and limits as JSON
    Json {
        #[command(flatten)]
        params: ParamArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print
        #[arg(long)]
        pretty: bool,
    },

    /// Show how the rearranged width and height approach ½rθ and r as the slice count grows
    Convergence {
        #[command(flatten)]
        params: ParamArgs,

        /// Slice counts to tabulate (the --segments value is ignored)
        #[arg(short, long, value_delimiter = ',', default_value = "2,12,100")]
        counts: Vec<usize>,
    },
}

fn write_output(output: Option<&PathBuf>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(contents.as_bytes())?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { params, output, no_grid, no_caption } => {
            let d = params.decompose()?;
            let config = RenderConfig {
                grid: !no_grid,
                caption: !no_caption,
                ..RenderConfig::default()
            };
            let svg = render_svg(&d, &config).context("rendering SVG")?;
            write_output(output.as_ref(), &svg)?;
        }
        Commands::Json { params, output, pretty } => {
            let d = params.decompose()?;
            let mut json = if pretty {
                serde_json::to_string_pretty(&d)?
            } else {
                serde_json::to_string(&d)?
            };
            json.push('\n');
            write_output(output.as_ref(), &json)?;
        }
        Commands::Convergence { params, counts } => {
            let base = params.params()?;
            let limit = limits(&base);
            println!("{}: width → {:.4}, height → {:.4}", base, limit.width, limit.height);
            println!("{:>5}  {:>10}  {:>10}  {:>10}  {:>10}", "n", "width", "Δwidth", "height", "Δheight");
            for n in counts {
                let d = Decomposition::new(Params { segments: n, ..base }, params.samples)
                    .with_context(|| format!("decomposing with {} segments", n))?;
                let width = d.rearranged.final_width;
                let height = d.rearranged.vertical_extent();
                println!(
                    "{:>5}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}",
                    n,
                    width,
                    width - limit.width,
                    height,
                    height - limit.height
                );
            }
        }
    }
    Ok(())
}
