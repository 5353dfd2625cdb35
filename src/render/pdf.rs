use super::ChartWriter;
use crate::chart::Chart;
use crate::config::Rgb;
use crate::error::RenderResult;
use crate::layout::{GRID_COLUMNS, LABEL_COLUMNS, LayoutRow, PageLayout};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb as PdfRgb,
};
use tracing::debug;

const MM_PER_INCH: f32 = 25.4;
const MM_PER_PT: f32 = 0.352_778;

/// Page geometry in millimetres. Rows shrink to fit but never grow past `max_row_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfStyle {
    pub margin: f32,
    pub heading_band: f32,
    pub caption_band: f32,
    pub max_row_height: f32,
    pub line_width: f32,
    pub room_font_size: f32,
    pub chore_font_size: f32,
    pub heading_font_size: f32,
    pub caption_font_size: f32,
}

impl Default for PdfStyle {
    fn default() -> Self {
        Self {
            margin: 12.7,
            heading_band: 10.0,
            caption_band: 14.0,
            max_row_height: 9.0,
            line_width: 0.25,
            room_font_size: 10.0,
            chore_font_size: 8.0,
            heading_font_size: 8.0,
            caption_font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter {
    pub style: PdfStyle,
}

struct Fonts {
    room: IndirectFontRef,
    chore: IndirectFontRef,
    heading: IndirectFontRef,
    caption: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> RenderResult<Self> {
        Ok(Self {
            room: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
            chore: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
            heading: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            caption: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
        })
    }
}

/// Where the grid sits on a page of a given size.
struct Frame {
    left: f32,
    top: f32,
    column_width: f32,
    row_height: f32,
    page_width: f32,
}

impl Frame {
    fn new(style: &PdfStyle, width: f32, height: f32, rows: usize) -> Self {
        let top = height - style.margin - style.heading_band;
        let bottom = style.margin + style.caption_band;
        let available = (top - bottom).max(0.0);
        let row_height = if rows == 0 {
            style.max_row_height
        } else {
            (available / rows as f32).min(style.max_row_height)
        };
        Self {
            left: style.margin,
            top,
            column_width: (width - 2.0 * style.margin) / GRID_COLUMNS as f32,
            row_height,
            page_width: width,
        }
    }

    fn x(&self, column: usize) -> f32 {
        self.left + column as f32 * self.column_width
    }

    fn right(&self) -> f32 {
        self.x(GRID_COLUMNS)
    }

    /// Top edge of grid row `y`.
    fn y(&self, row: usize) -> f32 {
        self.top - row as f32 * self.row_height
    }
}

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}

fn fill_rect(layer: &PdfLayerReference, rgb: Rgb, llx: f32, lly: f32, urx: f32, ury: f32) {
    layer.set_fill_color(color(rgb));
    layer.add_rect(Rect::new(Mm(llx), Mm(lly), Mm(urx), Mm(ury)));
}

/// Baseline that vertically centres text of `font_size` points around `center`.
fn baseline(center: f32, font_size: f32) -> f32 {
    center - font_size * MM_PER_PT * 0.35
}

const LINE_SPACING: f32 = 1.15;

/// Largest size up to `preferred` at which `lines` lines of text fit in `row_height` millimetres.
fn fit_font_size(preferred: f32, row_height: f32, lines: usize) -> f32 {
    if lines == 0 {
        return preferred;
    }
    let fitted = row_height / (lines as f32 * MM_PER_PT * LINE_SPACING);
    preferred.min(fitted)
}

/// Rough Helvetica advance width, used only to centre short labels.
fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * MM_PER_PT * 0.5
}

impl PdfWriter {
    fn draw_page(&self, layer: &PdfLayerReference, fonts: &Fonts, layout: &PageLayout, size: (f32, f32)) {
        let style = &self.style;
        let frame = Frame::new(style, size.0, size.1, layout.height());
        let text = Rgb::BLACK;

        for row in &layout.rows {
            let top = frame.y(row.y());
            let bottom = top - frame.row_height;
            let center = top - frame.row_height / 2.0;
            match row {
                LayoutRow::RoomHeader { room, color: fill, .. } => {
                    fill_rect(layer, *fill, frame.x(0), bottom, frame.right(), top);
                    layer.set_fill_color(color(text));
                    layer.use_text(
                        room.as_str(),
                        style.room_font_size,
                        Mm(frame.x(0) + 0.04 * frame.column_width),
                        Mm(baseline(center, style.room_font_size)),
                        &fonts.room,
                    );
                }
                LayoutRow::Chore { lines, cells, .. } => {
                    for (idx, cell) in cells.iter().enumerate() {
                        let x = frame.x(LABEL_COLUMNS + idx);
                        fill_rect(layer, cell.color(), x, bottom, x + frame.column_width, top);
                    }
                    layer.set_fill_color(color(text));
                    let font_size = fit_font_size(style.chore_font_size, frame.row_height, lines.len());
                    let line_height = font_size * MM_PER_PT * LINE_SPACING;
                    let first = center + line_height * (lines.len() as f32 - 1.0) / 2.0;
                    for (idx, line) in lines.iter().enumerate() {
                        layer.use_text(
                            line.as_str(),
                            font_size,
                            Mm(frame.x(0) + 0.1 * frame.column_width),
                            Mm(baseline(first - idx as f32 * line_height, font_size)),
                            &fonts.chore,
                        );
                    }
                }
            }
        }

        self.draw_grid(layer, &frame, layout);

        layer.set_fill_color(color(text));
        for (idx, heading) in layout.columns.iter().enumerate() {
            let center = frame.x(LABEL_COLUMNS + idx) + frame.column_width / 2.0;
            layer.use_text(
                heading.as_str(),
                style.heading_font_size,
                Mm(center - text_width(heading, style.heading_font_size) / 2.0),
                Mm(frame.top + style.heading_band / 3.0),
                &fonts.heading,
            );
        }

        let caption_x = frame.page_width / 2.0 - text_width(&layout.caption, style.caption_font_size) / 2.0;
        layer.use_text(
            layout.caption.as_str(),
            style.caption_font_size,
            Mm(caption_x),
            Mm(style.margin + style.caption_band / 3.0),
            &fonts.caption,
        );
    }

    fn draw_grid(&self, layer: &PdfLayerReference, frame: &Frame, layout: &PageLayout) {
        if layout.height() == 0 {
            return;
        }
        let half = self.style.line_width / 2.0;
        let bottom = frame.y(layout.height());
        for row in 0..=layout.height() {
            let y = frame.y(row);
            fill_rect(layer, layout.grid_line, frame.x(0), y - half, frame.right(), y + half);
        }
        for column in LABEL_COLUMNS..=GRID_COLUMNS {
            let x = frame.x(column);
            fill_rect(layer, layout.grid_line, x - half, bottom, x + half, frame.top);
        }
    }
}

impl ChartWriter for PdfWriter {
    fn encode(&self, chart: &Chart) -> RenderResult<Vec<u8>> {
        let width = chart.page_size.0 * MM_PER_INCH;
        let height = chart.page_size.1 * MM_PER_INCH;
        let title = format!("Chore Chart {}", chart.week);
        let (doc, first_page, first_layer) = PdfDocument::new(title, Mm(width), Mm(height), "chart");
        let fonts = Fonts::load(&doc)?;

        // printpdf always creates the first page; an empty chart keeps it with only the caption.
        if chart.layouts.is_empty() {
            let empty = PageLayout {
                columns: Vec::new(),
                rows: Vec::new(),
                caption: chart.week.caption(),
                grid_line: Rgb::DARK_GRAY,
            };
            let layer = doc.get_page(first_page).get_layer(first_layer);
            self.draw_page(&layer, &fonts, &empty, (width, height));
        }

        for (idx, layout) in chart.layouts.iter().enumerate() {
            let (page, layer) = if idx == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(width), Mm(height), "chart")
            };
            let layer = doc.get_page(page).get_layer(layer);
            self.draw_page(&layer, &fonts, layout, (width, height));
            debug!("drew page {} with {} rows", idx + 1, layout.height());
        }

        Ok(doc.save_to_bytes()?)
    }
}
