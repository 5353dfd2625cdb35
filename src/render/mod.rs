use crate::chart::Chart;
use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub mod csv_export;
pub mod json;
pub mod pdf;

pub use self::csv_export::CsvWriter;
pub use self::json::JsonWriter;
pub use self::pdf::PdfWriter;

/// Encodes a laid-out chart into one output artifact.
pub trait ChartWriter {
    fn encode(&self, chart: &Chart) -> RenderResult<Vec<u8>>;

    /// Encode the whole chart, then write it to `path` in one step.
    fn write_chart(&self, chart: &Chart, path: &Path) -> RenderResult<()> {
        let bytes = self.encode(chart)?;
        write_atomically(path, &bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Json,
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Pdf, OutputFormat::Json, OutputFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn writer(&self) -> Box<dyn ChartWriter> {
        match self {
            OutputFormat::Pdf => Box::new(PdfWriter::default()),
            OutputFormat::Json => Box::new(JsonWriter),
            OutputFormat::Csv => Box::new(CsvWriter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{other}' (expected pdf, json or csv)")),
        }
    }
}

/// Write to a sibling `.partial` file and rename it over `path`, so a failed run never leaves
/// a truncated document behind.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    let mut partial: OsString = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = Path::new(&partial);

    if let Err(err) = fs::write(partial, bytes) {
        let _ = fs::remove_file(partial);
        return Err(RenderError::Io(err));
    }
    fs::rename(partial, path).map_err(|err| {
        let _ = fs::remove_file(partial);
        RenderError::Io(err)
    })
}
