use crate::calendar::WeekRange;
use crate::chore::ChoreRecord;
use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::extract::load_chore_list;
use crate::layout::{PageLayout, layout_pages};
use crate::partition::{Page, partition};
use crate::render::OutputFormat;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

/// A fully partitioned and laid-out chart, ready for a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub week: WeekRange,
    pub pages: Vec<Page>,
    pub layouts: Vec<PageLayout>,
    /// Page size in inches.
    pub page_size: (f32, f32),
}

impl Chart {
    /// Partition `records` and lay out every page for the week containing `today`.
    pub fn build(records: &[ChoreRecord], config: &ChartConfig, today: NaiveDate) -> ChartResult<Self> {
        config.validate()?;
        let week = WeekRange::containing(today);
        let pages = partition(records, config.rows_per_page);
        let layouts = layout_pages(&pages, config, &week);
        info!(
            "{} chores split into {} page(s) for week {}",
            records.len(),
            pages.len(),
            week
        );
        Ok(Self {
            week,
            pages,
            layouts,
            page_size: config.page_size,
        })
    }

    pub fn from_config(config: &ChartConfig, today: NaiveDate) -> ChartResult<Self> {
        let records = load_chore_list(&config.input_path)?;
        Self::build(&records, config, today)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn record_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    pub fn records(&self) -> impl Iterator<Item = &ChoreRecord> {
        self.pages.iter().flat_map(|page| page.records().iter())
    }

    pub fn summary(&self) -> Vec<PageSummary> {
        self.pages
            .iter()
            .enumerate()
            .map(|(idx, page)| PageSummary {
                page: idx + 1,
                rooms: page.rooms().iter().map(|r| r.to_string()).collect(),
                records: page.len(),
                rows: page.row_count(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub page: usize,
    pub rooms: Vec<String>,
    pub records: usize,
    pub rows: usize,
}

/// Load, partition, lay out and write the chart described by `config`. Nothing is written
/// unless every step before the write succeeded.
pub fn generate(config: &ChartConfig, format: OutputFormat, today: NaiveDate) -> ChartResult<Chart> {
    let chart = Chart::from_config(config, today)?;
    format
        .writer()
        .write_chart(&chart, &config.output_path)?;
    info!(
        "wrote {} page(s) as {} to {}",
        chart.page_count(),
        format,
        config.output_path.display()
    );
    Ok(chart)
}
