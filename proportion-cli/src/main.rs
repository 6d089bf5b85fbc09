use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use proportion::{
    Balancer, BalancerConfig, BalancerPreset, CurveType, DensityMode, DimensionConfig,
    DimensionPreset, GeneratedToken, NamingConvention, OutputUnit, RoundingStrategy,
    SAMPLE_LOGOS, evaluate_curve_at, generate_scale,
};
use tracing::level_filters::LevelFilter;

mod config;
mod probe;

#[derive(Parser, Debug)]
#[command(name = "proportion", version)]
struct Cli {
    /// Increase log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Size one logo inside a square cell.
    Balance(BalanceArgs),
    /// Size a row of logos and compare their perceived weight.
    Lane(LaneArgs),
    /// Generate a dimension token scale.
    Scale(ScaleArgs),
    /// Sample the shaped progression curve of a scale config.
    Curve(CurveArgs),
    /// List built-in balancer and scale presets.
    Presets,
}

#[derive(Parser, Debug)]
struct BalancerSource {
    /// Start from a named preset (equal-width, equal-area, optical, equal-height).
    #[arg(long, default_value = "optical")]
    preset: BalancerPreset,

    /// Balancer config JSON; replaces the preset.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Override the exponent.
    #[arg(long)]
    exponent: Option<f64>,

    /// Cell edge length.
    #[arg(long, default_value_t = 160.0)]
    cell: f64,
}

impl BalancerSource {
    fn balancer(&self) -> anyhow::Result<Balancer> {
        let mut cfg: BalancerConfig = match &self.config_path {
            Some(path) => config::load_balancer_config(path)?,
            None => self.preset.config(),
        };
        if let Some(exponent) = self.exponent {
            cfg = cfg.with_exponent(exponent);
        }
        Ok(Balancer::new(cfg, self.cell)?)
    }
}

#[derive(Parser, Debug)]
struct BalanceArgs {
    #[command(flatten)]
    source: BalancerSource,

    /// Logo aspect ratio (width / height).
    #[arg(long, conflicts_with = "logo", required_unless_present = "logo")]
    ratio: Option<f64>,

    /// SVG or raster logo to probe for its aspect ratio.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Print every intermediate of the computation.
    #[arg(long)]
    explain: bool,
}

#[derive(Parser, Debug)]
struct LaneArgs {
    #[command(flatten)]
    source: BalancerSource,

    /// Aspect ratios; the built-in sample logos when neither ratios nor logos are given.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    ratios: Vec<f64>,

    /// Logo files to probe.
    #[arg(long = "logo")]
    logos: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScaleSource {
    /// Start from a named preset (tailwind, material, golden, bootstrap, linear-8).
    #[arg(long)]
    preset: Option<DimensionPreset>,

    /// Scale config JSON; replaces the preset.
    #[arg(long = "config", conflicts_with = "preset")]
    config_path: Option<PathBuf>,

    #[arg(long)]
    base: Option<f64>,

    #[arg(long)]
    steps: Option<usize>,

    #[arg(long)]
    factor: Option<f64>,

    /// Curve id (linear, exponential, ease-in, ease-out, ease-in-out, custom).
    #[arg(long, value_parser = parse_serde_enum::<CurveType>)]
    curve: Option<CurveType>,

    /// Progression bias in `[-1, 1]`.
    #[arg(long, allow_hyphen_values = true)]
    bias: Option<f64>,

    #[arg(long, value_parser = parse_serde_enum::<NamingConvention>)]
    naming: Option<NamingConvention>,

    #[arg(long, value_parser = parse_serde_enum::<RoundingStrategy>)]
    rounding: Option<RoundingStrategy>,

    /// Decimal places kept by `--rounding`.
    #[arg(long)]
    precision: Option<u32>,

    #[arg(long)]
    snap: Option<f64>,

    /// Lower bound of generated values.
    #[arg(long)]
    min: Option<f64>,

    /// Upper bound of generated values.
    #[arg(long)]
    max: Option<f64>,

    /// Optical compensation for small values, `[0, 1]`.
    #[arg(long)]
    optical: Option<f64>,

    /// CSS variable prefix (`--{prefix}-{name}`).
    #[arg(long)]
    prefix: Option<String>,

    /// Token names for `--naming custom`, comma separated.
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,

    #[arg(long, value_parser = parse_serde_enum::<DensityMode>)]
    density: Option<DensityMode>,

    #[arg(long, value_parser = parse_serde_enum::<OutputUnit>)]
    unit: Option<OutputUnit>,

    #[arg(long)]
    fluid: bool,

    #[arg(long)]
    harmonic: bool,

    #[arg(long)]
    negative: bool,

    /// Lock a token, `INDEX=VALUE`; repeatable.
    #[arg(long = "lock", value_parser = parse_lock)]
    locks: Vec<(usize, f64)>,
}

impl ScaleSource {
    fn dimension_config(&self) -> anyhow::Result<DimensionConfig> {
        let mut cfg = match (&self.config_path, self.preset) {
            (Some(path), _) => config::load_dimension_config(path)?,
            (None, Some(preset)) => preset.config(),
            (None, None) => DimensionConfig::default(),
        };

        if let Some(v) = self.base {
            cfg.base = v;
        }
        if let Some(v) = self.steps {
            cfg.steps = v;
        }
        if let Some(v) = self.factor {
            cfg.scale_factor = v;
        }
        if let Some(v) = self.curve {
            cfg.curve_type = v;
        }
        if let Some(v) = self.bias {
            cfg.progression_bias = v;
        }
        if let Some(v) = self.naming {
            cfg.naming_convention = v;
        }
        if let Some(v) = self.rounding {
            cfg.rounding_strategy = v;
        }
        if let Some(v) = self.precision {
            cfg.rounding_precision = v;
        }
        if let Some(v) = self.snap {
            cfg.snap_to_grid = v;
        }
        if let Some(v) = self.min {
            cfg.min_value = v;
        }
        if let Some(v) = self.max {
            cfg.max_value = v;
        }
        if let Some(v) = self.optical {
            cfg.optical_compensation = v;
        }
        if let Some(v) = &self.prefix {
            cfg.token_prefix = v.clone();
        }
        if !self.names.is_empty() {
            cfg.custom_names = self.names.clone();
        }
        if let Some(v) = self.unit {
            cfg.output_unit = v;
        }
        if let Some(mode) = self.density {
            cfg = cfg.with_density(mode);
        }
        cfg.fluid |= self.fluid;
        cfg.harmonic_alignment |= self.harmonic;
        cfg.negative_scale |= self.negative;
        for &(index, value) in &self.locks {
            cfg = cfg.with_lock(index, value);
        }

        cfg.validate().context("invalid scale config")?;
        Ok(cfg)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    #[command(flatten)]
    source: ScaleSource,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct CurveArgs {
    #[command(flatten)]
    source: ScaleSource,

    /// Number of evenly spaced samples over `[0, 1]`.
    #[arg(long, default_value_t = 11)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Balance(args) => cmd_balance(args),
        Command::Lane(args) => cmd_lane(args),
        Command::Scale(args) => cmd_scale(args),
        Command::Curve(args) => cmd_curve(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_balance(args: BalanceArgs) -> anyhow::Result<()> {
    let balancer = args.source.balancer()?;
    let ratio = match (&args.logo, args.ratio) {
        (Some(path), _) => probe::probe_logo(path)?.ratio(),
        (None, Some(ratio)) => ratio,
        (None, None) => anyhow::bail!("either --ratio or --logo is required"),
    };

    let out = if args.explain {
        serde_json::to_string_pretty(&balancer.explain(ratio))?
    } else {
        serde_json::to_string_pretty(&balancer.rendered_size(ratio))?
    };
    println!("{out}");
    Ok(())
}

fn cmd_lane(args: LaneArgs) -> anyhow::Result<()> {
    let balancer = args.source.balancer()?;

    let mut rows: Vec<(String, f64)> = Vec::new();
    for path in &args.logos {
        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        rows.push((label, probe::probe_logo(path)?.ratio()));
    }
    rows.extend(args.ratios.iter().map(|r| (format!("{r}"), *r)));
    if rows.is_empty() {
        rows.extend(SAMPLE_LOGOS.iter().map(|l| (l.name.to_string(), l.ratio)));
    }

    let ratios = rows.iter().map(|(_, r)| *r).collect::<Vec<_>>();
    let lane = balancer.lane(&ratios);

    println!(
        "{:<16} {:>8} {:>9} {:>9} {:>9} {:>7}",
        "logo", "ratio", "width", "height", "weight", "rel"
    );
    for ((label, _), entry) in rows.iter().zip(&lane) {
        println!(
            "{:<16} {:>8.3} {:>9.2} {:>9.2} {:>9.2} {:>7.3}",
            label,
            entry.ratio,
            entry.size.width,
            entry.size.height,
            entry.perceived_weight,
            entry.relative_weight
        );
    }
    Ok(())
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let cfg = args.source.dimension_config()?;
    let tokens = generate_scale(&cfg)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
        OutputFormat::Table => print_token_table(&tokens),
    }
    Ok(())
}

fn print_token_table(tokens: &[GeneratedToken]) {
    println!(
        "{:>3} {:<8} {:>10} {:>10} {:<20} {}",
        "#", "name", "raw", "value", "display", "formula"
    );
    for t in tokens {
        let marker = if t.locked { " *" } else { "" };
        println!(
            "{:>3} {:<8} {:>10.3} {:>10} {:<20} {}{marker}",
            t.index, t.name, t.raw_value, t.value, t.display_value, t.formula
        );
        if let Some(fluid) = &t.fluid_value_expression {
            println!("{:>3} {:<8} {fluid}", "", "");
        }
    }
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let cfg = args.source.dimension_config()?;
    let last = args.samples.saturating_sub(1).max(1) as f64;
    for i in 0..args.samples {
        let t = i as f64 / last;
        println!("{t:.3}\t{:.6}", evaluate_curve_at(t, &cfg));
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("balancer presets:");
    for preset in BalancerPreset::ALL {
        let cfg = preset.config();
        println!(
            "  {:<13} exponent {:<5} {}",
            preset.id(),
            cfg.exponent,
            preset.description()
        );
    }
    println!("scale presets:");
    for preset in DimensionPreset::ALL {
        println!("  {:<13} {}", preset.id(), preset.description());
    }
    Ok(())
}

/// Parse a value through the type's serde representation, so flags accept the same ids as
/// config files.
fn parse_serde_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| format!("unknown value '{s}': {e}"))
}

fn parse_lock(s: &str) -> Result<(usize, f64), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got '{s}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad lock index '{index}': {e}"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad lock value '{value}': {e}"))?;
    Ok((index, value))
}
