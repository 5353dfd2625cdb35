use crate::chore::ChoreRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Rows a room is assumed to need on top of its chores: the header and a spacer.
const ROOM_OVERHEAD_ROWS: usize = 2;

/// A contiguous run of records printed on one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    records: Vec<ChoreRecord>,
}

impl Page {
    pub fn new(records: Vec<ChoreRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ChoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Chore rows plus one header row each time the room changes.
    pub fn row_count(&self) -> usize {
        self.records.len() + self.room_runs().count()
    }

    /// Room names in the order their header rows appear on this page.
    pub fn rooms(&self) -> Vec<&str> {
        self.room_runs().collect()
    }

    fn room_runs(&self) -> impl Iterator<Item = &str> {
        let mut last: Option<&str> = None;
        self.records.iter().filter_map(move |record| {
            let room = record.room.as_str();
            if last == Some(room) {
                None
            } else {
                last = Some(room);
                Some(room)
            }
        })
    }
}

/// Total chores per room across the whole input.
fn room_totals(records: &[ChoreRecord]) -> HashMap<&str, usize> {
    let mut totals = HashMap::new();
    for record in records {
        *totals.entry(record.room.as_str()).or_insert(0) += 1;
    }
    totals
}

/// Greedily split `records` into pages of at most `rows_per_page` records.
///
/// When a new room starts, its whole-input chore count plus two overhead rows is compared with
/// the space left in the buffer; if it would not fit, the buffer is flushed so the room starts
/// on a fresh page. A room that does not fit on any page is still appended and is split only
/// when the buffer reaches the budget. No record is ever dropped or reordered.
pub fn partition(records: &[ChoreRecord], rows_per_page: usize) -> Vec<Page> {
    let totals = room_totals(records);
    let mut pages = Vec::new();
    let mut buffer: Vec<ChoreRecord> = Vec::new();
    let mut current_room: Option<&str> = None;

    for record in records {
        let room = record.room.as_str();
        if current_room != Some(room) {
            let required = totals.get(room).copied().unwrap_or(0) + ROOM_OVERHEAD_ROWS;
            if !buffer.is_empty() && buffer.len() + required > rows_per_page {
                debug!(
                    "room '{room}' needs {required} rows, {} already used; starting page {}",
                    buffer.len(),
                    pages.len() + 2
                );
                pages.push(Page::new(std::mem::take(&mut buffer)));
            }
        }

        buffer.push(record.clone());
        current_room = Some(room);

        if buffer.len() >= rows_per_page {
            debug!("page {} full at {} records", pages.len() + 1, buffer.len());
            pages.push(Page::new(std::mem::take(&mut buffer)));
            current_room = None;
        }
    }

    if !buffer.is_empty() {
        pages.push(Page::new(buffer));
    }
    pages
}
