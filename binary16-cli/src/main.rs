//! b16 - inspect, convert and compute IEEE 754 half-precision values

mod config;
mod output;

use anyhow::{Context as _, Result, bail};
use binary16::compare;
use binary16::narrow::narrow_best_effort;
use binary16::{ArithmeticMode, BinaryOp, ConversionMode, FloatContext, Half, RoundingMode};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use config::{CliConfig, ModeFlags};
use output::{CalcReport, CompareReport, ConversionReport, ValueReport, render};

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned human-readable lines (default)
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Narrowing conversion mode
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum ConversionArg {
    Ieee,
    Strict,
    Fast,
    Exact,
}

impl From<ConversionArg> for ConversionMode {
    fn from(arg: ConversionArg) -> Self {
        match arg {
            ConversionArg::Ieee => Self::Ieee,
            ConversionArg::Strict => Self::Strict,
            ConversionArg::Fast => Self::Fast,
            ConversionArg::Exact => Self::Exact,
        }
    }
}

/// Arithmetic mode
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum ArithmeticArg {
    Ieee,
    Fast,
    Exact,
}

impl From<ArithmeticArg> for ArithmeticMode {
    fn from(arg: ArithmeticArg) -> Self {
        match arg {
            ArithmeticArg::Ieee => Self::Ieee,
            ArithmeticArg::Fast => Self::Fast,
            ArithmeticArg::Exact => Self::Exact,
        }
    }
}

/// Rounding direction
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum RoundingArg {
    /// Round to nearest, ties to even
    #[value(alias = "rne")]
    NearestEven,
    /// Round to nearest, ties away from zero
    #[value(alias = "rna")]
    NearestAway,
    /// Round toward zero
    #[value(alias = "rtz")]
    TowardZero,
    /// Round toward +infinity
    #[value(alias = "rtp")]
    TowardPositive,
    /// Round toward -infinity
    #[value(alias = "rtn")]
    TowardNegative,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::NearestEven => Self::NearestEven,
            RoundingArg::NearestAway => Self::NearestAway,
            RoundingArg::TowardZero => Self::TowardZero,
            RoundingArg::TowardPositive => Self::TowardPositive,
            RoundingArg::TowardNegative => Self::TowardNegative,
        }
    }
}

/// Inspect, convert and compute IEEE 754 binary16 values
#[derive(Parser, Debug)]
#[command(name = "b16")]
#[command(version)]
#[command(about = "Inspect, convert and compute IEEE 754 half-precision values")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file (default: <config dir>/binary16/config.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Narrowing conversion mode
    #[arg(long, value_enum, global = true)]
    conversion: Option<ConversionArg>,

    /// Arithmetic mode
    #[arg(long, value_enum, global = true)]
    arithmetic: Option<ArithmeticArg>,

    /// Rounding direction
    #[arg(short, long, value_enum, global = true)]
    rounding: Option<RoundingArg>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the fields, class and value of each operand
    Inspect {
        /// Bit pattern (0xHHHH) or decimal number
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Narrow decimal numbers to binary16
    Convert {
        /// Decimal numbers, including inf and nan
        #[arg(required = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },
    /// Compute `A OP B` with OP one of + - * /
    Calc {
        #[arg(allow_hyphen_values = true)]
        a: String,
        op: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Evaluate every comparison predicate on two operands
    Compare {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
}

impl Args {
    fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            conversion: self.conversion.map(Into::into),
            arithmetic: self.arithmetic.map(Into::into),
            rounding: self.rounding.map(Into::into),
        }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Parse an operand: `0x`-prefixed bit pattern, or a decimal narrowed under
/// `ctx`. Narrowing errors are fatal here.
fn parse_operand(text: &str, ctx: &FloatContext) -> Result<Half> {
    let trimmed = text.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        let bits = u16::from_str_radix(hex, 16)
            .with_context(|| format!("invalid bit pattern '{text}'"))?;
        return Ok(Half::from_bits(bits));
    }
    let wide = parse_decimal(trimmed)?;
    ctx.narrow_f64(wide)
        .with_context(|| format!("cannot represent '{text}' under {} conversion", ctx.conversion))
}

fn parse_decimal(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .with_context(|| format!("invalid number '{text}'"))
}

fn inspect(values: &[String], ctx: &FloatContext) -> Result<Vec<ValueReport>> {
    values
        .iter()
        .map(|text| parse_operand(text, ctx).map(ValueReport::new))
        .collect()
}

fn convert(numbers: &[String], ctx: &FloatContext) -> Result<Vec<ConversionReport>> {
    let wide = numbers
        .iter()
        .map(|text| parse_decimal(text.trim()))
        .collect::<Result<Vec<f64>>>()?;
    let reports = numbers
        .iter()
        .zip(wide)
        .map(|(text, x)| {
            let (value, error) = narrow_best_effort(x, ctx.conversion, ctx.rounding);
            ConversionReport {
                input: text.clone(),
                result: ValueReport::new(value),
                error: error.map(|e| e.kind),
            }
        })
        .collect();
    Ok(reports)
}

fn calc(a: &str, op: &str, b: &str, ctx: &FloatContext) -> Result<CalcReport> {
    let Some(op) = BinaryOp::parse(op) else {
        bail!("unknown operator '{op}' (expected one of + - * /)");
    };
    let x = parse_operand(a, ctx)?;
    let y = parse_operand(b, ctx)?;
    let (value, error) = op.apply_best_effort(x, y, ctx.arithmetic, ctx.rounding);
    debug!(%op, a = %x, b = %y, result = %value, "computed");
    Ok(CalcReport {
        expression: format!("{x} {op} {y}"),
        result: ValueReport::new(value),
        error: error.map(|e| e.kind),
    })
}

fn compare_pair(a: &str, b: &str, ctx: &FloatContext) -> Result<CompareReport> {
    let x = parse_operand(a, ctx)?;
    let y = parse_operand(b, ctx)?;
    Ok(CompareReport {
        a: format!("{x:#06x} ({x})"),
        b: format!("{y:#06x} ({y})"),
        equal: compare::equal(x, y),
        less: compare::less(x, y),
        less_equal: compare::less_equal(x, y),
        greater: compare::greater(x, y),
        greater_equal: compare::greater_equal(x, y),
        unordered: compare::partial_cmp(x, y).is_none(),
        total_order: format!("{:?}", compare::total_cmp(x, y)),
        min: format!("{:#06x}", compare::min(x, y)),
        max: format!("{:#06x}", compare::max(x, y)),
    })
}

/// Run a subcommand, returning the rendered output and whether any
/// element reported an error.
fn run(command: &Command, ctx: &FloatContext, format: OutputFormat) -> Result<(String, bool)> {
    match command {
        Command::Inspect { values } => Ok((render(&inspect(values, ctx)?, format)?, false)),
        Command::Convert { numbers } => {
            let reports = convert(numbers, ctx)?;
            let failed = reports.iter().filter(|r| r.error.is_some()).count();
            if failed > 0 {
                info!(failed, total = reports.len(), "some conversions reported errors");
            }
            Ok((render(&reports, format)?, failed > 0))
        }
        Command::Calc { a, op, b } => {
            let report = calc(a, op, b, ctx)?;
            let failed = report.error.is_some();
            Ok((render(&[report], format)?, failed))
        }
        Command::Compare { a, b } => Ok((render(&[compare_pair(a, b, ctx)?], format)?, false)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let ctx = config.merge_with_args(args.mode_flags());
    let format = args.format.or(config.format).unwrap_or(OutputFormat::Text);
    debug!(?ctx, ?format, "resolved context");

    match run(&args.command, &ctx, format) {
        Ok((output, failed)) => {
            println!("{output}");
            if failed {
                ExitCode::from(3)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binary16::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "b16", "calc", "1", "+", "-2", "--rounding", "rtz", "--arithmetic", "exact", "-vv",
        ])
        .unwrap();
        assert_eq!(args.rounding, Some(RoundingArg::TowardZero));
        assert_eq!(args.arithmetic, Some(ArithmeticArg::Exact));
        assert_eq!(args.log_level(), Level::DEBUG);
        let flags = args.mode_flags();
        assert_eq!(flags.rounding, Some(RoundingMode::TowardZero));
        assert!(flags.conversion.is_none());
        assert!(matches!(args.command, Command::Calc { ref b, .. } if b == "-2"));
    }

    #[test]
    fn test_parse_operand() {
        let ctx = FloatContext::IEEE;
        assert_eq!(parse_operand("0x3c00", &ctx).unwrap().to_bits(), 0x3C00);
        assert_eq!(parse_operand("0XFBFF", &ctx).unwrap().to_bits(), 0xFBFF);
        assert_eq!(parse_operand("-2.5", &ctx).unwrap().to_bits(), 0xC100);
        assert_eq!(parse_operand("inf", &ctx).unwrap().to_bits(), 0x7C00);
        assert!(parse_operand("0x10000", &ctx).is_err());
        assert!(parse_operand("two", &ctx).is_err());
        assert!(parse_operand("1e10", &FloatContext::STRICT).is_err());
    }

    #[test]
    fn test_convert_reports_per_value() {
        let numbers = ["1".to_string(), "1e10".to_string(), "0.1".to_string()];
        let reports = convert(&numbers, &FloatContext::STRICT).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].error, None);
        assert_eq!(reports[1].error, Some(ErrorKind::Overflow));
        assert_eq!(reports[1].result.bits, "0x7c00");
        assert_eq!(reports[2].result.bits, "0x2e66");
        assert!(convert(&["abc".to_string()], &FloatContext::IEEE).is_err());
    }

    #[test]
    fn test_calc() {
        let ctx = FloatContext::IEEE;
        let report = calc("1", "+", "2", &ctx).unwrap();
        assert_eq!(report.result.bits, "0x4200");
        let report = calc("0x0000", "/", "0x0000", &FloatContext::STRICT).unwrap();
        assert_eq!(report.error, Some(ErrorKind::InvalidOperation));
        assert!(calc("1", "%", "2", &ctx).is_err());
    }

    #[test]
    fn test_compare_pair() {
        let report = compare_pair("0x7e00", "1", &FloatContext::IEEE).unwrap();
        assert!(report.unordered && !report.equal && !report.less);
        assert_eq!(report.min, "0x3c00");
        let report = compare_pair("0x8000", "0", &FloatContext::IEEE).unwrap();
        assert!(report.equal && report.less_equal && !report.less);
        assert_eq!(report.total_order, "Less");
        assert_eq!(report.min, "0x8000");
        assert_eq!(report.max, "0x0000");
    }
}
