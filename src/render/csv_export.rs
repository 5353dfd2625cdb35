use super::ChartWriter;
use crate::chart::Chart;
use crate::chore::ChoreRecord;
use crate::error::{RenderError, RenderResult};
use serde::Serialize;

/// Flat `page,room,chore,frequency` table of every record in emission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

#[derive(Serialize)]
struct ChoreCsvRecord<'a> {
    page: usize,
    room: &'a str,
    chore: &'a str,
    frequency: &'a str,
}

impl<'a> ChoreCsvRecord<'a> {
    fn new(page: usize, record: &'a ChoreRecord) -> Self {
        Self {
            page,
            room: &record.room,
            chore: &record.chore,
            frequency: record.frequency.as_str(),
        }
    }
}

impl ChartWriter for CsvWriter {
    fn encode(&self, chart: &Chart) -> RenderResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for (idx, page) in chart.pages.iter().enumerate() {
            for record in page.records() {
                writer.serialize(ChoreCsvRecord::new(idx + 1, record))?;
            }
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|err| RenderError::CsvBuffer(err.to_string()))
    }
}
