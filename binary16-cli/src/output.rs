//! Report types and their text/JSON rendering

use anyhow::Result;
use binary16::{ErrorKind, FpClass, Half};
use serde::Serialize;
use std::fmt::Write as _;

use crate::OutputFormat;

/// Field breakdown of a single value
#[derive(Debug, Clone, Serialize)]
pub struct ValueReport {
    pub bits: String,
    pub sign: u8,
    pub exponent: u16,
    pub mantissa: u16,
    pub class: FpClass,
    /// Exact decimal value; `null` in JSON for NaN and infinities.
    pub value: Option<f64>,
    pub display: String,
}

impl ValueReport {
    pub fn new(h: Half) -> Self {
        let (sign, exponent, mantissa) = h.decompose();
        Self {
            bits: format!("{h:#06x}"),
            sign: u8::from(sign),
            exponent,
            mantissa,
            class: h.classify(),
            value: h.is_finite().then(|| h.to_f64()),
            display: h.to_string(),
        }
    }

    fn text(&self) -> String {
        format!(
            "{}  sign={} exponent={:>2} mantissa={:#05x}  {:<18} {}",
            self.bits,
            self.sign,
            self.exponent,
            self.mantissa,
            self.class.as_str(),
            self.display
        )
    }
}

/// Result of narrowing one input
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: String,
    #[serde(flatten)]
    pub result: ValueReport,
    pub error: Option<ErrorKind>,
}

/// Result of one arithmetic operation
#[derive(Debug, Clone, Serialize)]
pub struct CalcReport {
    pub expression: String,
    #[serde(flatten)]
    pub result: ValueReport,
    pub error: Option<ErrorKind>,
}

/// Every comparator predicate for one pair
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub a: String,
    pub b: String,
    pub equal: bool,
    pub less: bool,
    pub less_equal: bool,
    pub greater: bool,
    pub greater_equal: bool,
    pub unordered: bool,
    pub total_order: String,
    pub min: String,
    pub max: String,
}

/// Anything the CLI can print in either format
pub trait Render: Serialize {
    fn render_text(&self) -> String;
}

impl Render for ValueReport {
    fn render_text(&self) -> String {
        self.text()
    }
}

impl Render for ConversionReport {
    fn render_text(&self) -> String {
        let mut line = format!("{:>14} -> {}", self.input, self.result.text());
        if let Some(error) = self.error {
            let _ = write!(line, "  [error: {error}]");
        }
        line
    }
}

impl Render for CalcReport {
    fn render_text(&self) -> String {
        let mut line = format!("{} = {}", self.expression, self.result.text());
        if let Some(error) = self.error {
            let _ = write!(line, "  [error: {error}]");
        }
        line
    }
}

impl Render for CompareReport {
    fn render_text(&self) -> String {
        let mut out = format!("a = {}, b = {}\n", self.a, self.b);
        for (name, value) in [
            ("a == b", self.equal),
            ("a < b", self.less),
            ("a <= b", self.less_equal),
            ("a > b", self.greater),
            ("a >= b", self.greater_equal),
            ("unordered", self.unordered),
        ] {
            let _ = writeln!(out, "  {name:<10} {value}");
        }
        let _ = writeln!(out, "  {:<10} {}", "total", self.total_order);
        let _ = writeln!(out, "  {:<10} {}", "min", self.min);
        let _ = write!(out, "  {:<10} {}", "max", self.max);
        out
    }
}

/// Render a list of reports.
pub fn render<T: Render>(reports: &[T], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => reports
            .iter()
            .map(Render::render_text)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
    })
}
