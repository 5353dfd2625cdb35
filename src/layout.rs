//! Grid geometry for one page of the chart.
//!
//! Coordinates are in grid units: column `x` spans `x..x + 1` and row `y` spans `y..y + 1`,
//! with `y` growing downwards. Columns 0 and 1 hold the room and chore labels, the data
//! columns follow in [`DAY_COLUMNS`] order.

use crate::calendar::WeekRange;
use crate::chore::{DAY_COLUMNS, FillPattern, Frequency};
use crate::config::{ChartConfig, Rgb};
use crate::partition::Page;
use serde::{Deserialize, Serialize};

pub const LABEL_COLUMNS: usize = 2;
pub const GRID_COLUMNS: usize = LABEL_COLUMNS + DAY_COLUMNS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellFill {
    /// The chore is due in this column.
    Active { color: Rgb },
    Inapplicable { color: Rgb },
}

impl CellFill {
    pub fn is_active(&self) -> bool {
        matches!(self, CellFill::Active { .. })
    }

    pub fn color(&self) -> Rgb {
        match self {
            CellFill::Active { color } | CellFill::Inapplicable { color } => *color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutRow {
    RoomHeader {
        y: usize,
        room: String,
        color: Rgb,
    },
    Chore {
        y: usize,
        room: String,
        /// Chore text already wrapped; all lines share the row.
        lines: Vec<String>,
        frequency: Frequency,
        pattern: FillPattern,
        cells: Vec<CellFill>,
    },
}

impl LayoutRow {
    pub fn y(&self) -> usize {
        match self {
            LayoutRow::RoomHeader { y, .. } | LayoutRow::Chore { y, .. } => *y,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, LayoutRow::RoomHeader { .. })
    }
}

/// Everything a backend needs to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub columns: Vec<String>,
    pub rows: Vec<LayoutRow>,
    pub caption: String,
    pub grid_line: Rgb,
}

impl PageLayout {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn chore_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(|row| !row.is_header())
    }

    pub fn header_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(|row| row.is_header())
    }
}

/// Lay out one page. `week` only affects the caption.
pub fn layout_page(page: &Page, config: &ChartConfig, week: &WeekRange) -> PageLayout {
    let palette = &config.palette;
    let mut rows = Vec::with_capacity(page.row_count());
    let mut prev_room: Option<&str> = None;

    for record in page.records() {
        if prev_room != Some(record.room.as_str()) {
            rows.push(LayoutRow::RoomHeader {
                y: rows.len(),
                room: record.room.clone(),
                color: palette.room_header,
            });
            prev_room = Some(record.room.as_str());
        }

        let pattern = record.frequency.fill_pattern();
        let active = palette.for_frequency(&record.frequency);
        let cells = pattern
            .mask()
            .iter()
            .map(|&on| {
                if on {
                    CellFill::Active { color: active }
                } else {
                    CellFill::Inapplicable {
                        color: palette.inapplicable,
                    }
                }
            })
            .collect();

        rows.push(LayoutRow::Chore {
            y: rows.len(),
            room: record.room.clone(),
            lines: wrap_text(&record.chore, config.wrap_width),
            frequency: record.frequency.clone(),
            pattern,
            cells,
        });
    }

    PageLayout {
        columns: DAY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        caption: week.caption(),
        grid_line: palette.grid_line,
    }
}

pub fn layout_pages(pages: &[Page], config: &ChartConfig, week: &WeekRange) -> Vec<PageLayout> {
    pages
        .iter()
        .map(|page| layout_page(page, config, week))
        .collect()
}

/// Break `text` into lines of at most `width` characters at whitespace. Words are never split,
/// so a single word longer than `width` gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
