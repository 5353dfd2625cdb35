pub mod calendar;
pub mod chart;
pub mod chore;
pub mod config;
pub mod error;
pub mod extract;
pub mod layout;
pub mod logging;
pub mod partition;
pub mod render;

pub use calendar::WeekRange;
pub use chart::{Chart, PageSummary, generate};
pub use chore::{ChoreRecord, DAY_COLUMNS, FillPattern, Frequency};
pub use config::{ChartConfig, Palette, Rgb};
pub use error::{ChartError, ChartResult, ConfigError, ConfigResult, RenderError, RenderResult};
pub use extract::{extract_records, load_chore_list, parse_chore_list};
pub use layout::{CellFill, LayoutRow, PageLayout, layout_page, layout_pages, wrap_text};
pub use partition::{Page, partition};
pub use render::{ChartWriter, CsvWriter, JsonWriter, OutputFormat, PdfWriter};
