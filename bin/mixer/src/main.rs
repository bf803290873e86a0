//! Print the paint mixes for a color given on the command line.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use pigmix::{parse_input, Mix, MixReport, Model, Models, RatioOptions};

#[derive(Parser)]
#[command(name = "pigmix")]
#[command(about = "Work out which paints to mix for a color", long_about = None)]
struct Cli {
    /// Color as #rrggbb, 0xrrggbb, three RGB components or HSV with decimals
    #[arg(required = true, num_args = 1..)]
    color: Vec<String>,

    /// Pigment models to show
    #[arg(short, long, value_enum, value_delimiter = ',')]
    models: Vec<ModelArg>,

    /// JSON file with ratio options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of parts used for CMYW ratios
    #[arg(long)]
    scale: Option<u32>,

    /// Paints below this percentage are left out of ratios
    #[arg(long)]
    threshold: Option<f64>,

    /// Number of parts CMYKW and RYBKW mixes are scaled to
    #[arg(long)]
    target: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    Cmyw,
    Cmykw,
    Rybkw,
    Ncol,
}

impl From<ModelArg> for Models {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Cmyw => Models::CMYW,
            ModelArg::Cmykw => Models::CMYKW,
            ModelArg::Rybkw => Models::RYBKW,
            ModelArg::Ncol => Models::NCOL,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = ratio_options(&cli)?;
    debug!("ratio options: {options:?}");

    let models = if cli.models.is_empty() {
        Models::all()
    } else {
        cli.models.iter().copied().map(Models::from).collect()
    };

    let input = cli.color.join(" ");
    let rgb = parse_input(&input)?;
    let report = MixReport::new(rgb, models, &options)
        .with_context(|| format!("can not mix {input:?}"))?;

    let output = if cli.json {
        render_json(&report)?
    } else {
        render(&report)?
    };
    print!("{output}");

    Ok(())
}

fn ratio_options(cli: &Cli) -> Result<RatioOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => RatioOptions::default(),
    };

    if let Some(scale) = cli.scale {
        options.scale = scale;
    }
    if let Some(threshold) = cli.threshold {
        options.threshold = threshold as pigmix::Component;
    }
    if let Some(target) = cli.target {
        options.target = target;
    }

    Ok(options)
}

fn load_options(path: &Path) -> Result<RatioOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid options in {}", path.display()))
}

fn render_json(report: &MixReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

fn render(report: &MixReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let rgb = &report.rgb;
    writeln!(
        out,
        "{} (rgb {}, {}, {})",
        report.hex, rgb.red, rgb.green, rgb.blue
    )?;

    if let Some(ncol) = &report.ncol {
        writeln!(out, "NCol: {ncol}")?;
    }
    if let Some(cmyw) = &report.cmyw {
        render_mix(&mut out, "CMYW", cmyw, |v| format!("{:.1}%", v * 100.0))?;
    }
    if let Some(cmykw) = &report.cmykw {
        render_mix(&mut out, "CMYKW", cmykw, |v| format!("{v:.2}%"))?;
    }
    if let Some(rybkw) = &report.rybkw {
        render_mix(&mut out, "RYBKW", rybkw, |v| format!("{v:.2}%"))?;
    }

    Ok(out)
}

fn render_mix<M: Model<Value = pigmix::Component>>(
    out: &mut String,
    title: &str,
    mix: &Mix<M>,
    format_value: impl Fn(pigmix::Component) -> String,
) -> fmt::Result {
    writeln!(out, "\n{title}")?;
    for (name, value) in mix.mix.channels() {
        writeln!(out, "  {name:<8} {}", format_value(value))?;
    }
    writeln!(out, "  Ratio    {}", mix.ratio)
}
