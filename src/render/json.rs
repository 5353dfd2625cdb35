use super::ChartWriter;
use crate::calendar::WeekRange;
use crate::chart::Chart;
use crate::error::RenderResult;
use crate::layout::PageLayout;
use serde::Serialize;

/// Writes the page descriptions themselves, for backends other than the built-in PDF one.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

#[derive(Serialize)]
struct ChartSnapshot<'a> {
    week: &'a WeekRange,
    page_size: (f32, f32),
    pages: &'a [PageLayout],
}

impl ChartWriter for JsonWriter {
    fn encode(&self, chart: &Chart) -> RenderResult<Vec<u8>> {
        let snapshot = ChartSnapshot {
            week: &chart.week,
            page_size: chart.page_size,
            pages: &chart.layouts,
        };
        Ok(serde_json::to_vec_pretty(&snapshot)?)
    }
}
