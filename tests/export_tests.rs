use chrono::NaiveDate;
use chore_chart::{
    Chart, ChartConfig, ChartError, ChartWriter, ConfigError, CsvWriter, JsonWriter,
    OutputFormat, PdfWriter, RenderError, generate, load_chore_list,
};
use chore_chart::config::{DEFAULT_PAGE_SIZE, DEFAULT_ROWS_PER_PAGE, DEFAULT_WRAP_WIDTH};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const FIXTURE: &str = "tests/fixtures/chore-list.yaml";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn fixture_chart(rows_per_page: usize) -> Chart {
    let config = ChartConfig {
        rows_per_page,
        ..ChartConfig::default()
    };
    let records = load_chore_list(FIXTURE).unwrap();
    Chart::build(&records, &config, today()).unwrap()
}

fn leftovers(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".partial"))
        .collect()
}

/// Counts `/Type /Page` dictionaries, skipping the `/Type /Pages` tree node.
fn pdf_page_count(bytes: &[u8]) -> usize {
    let key = b"/Type";
    let mut count = 0;
    for start in 0..bytes.len() {
        if !bytes[start..].starts_with(key) {
            continue;
        }
        let mut at = start + key.len();
        while at < bytes.len() && bytes[at].is_ascii_whitespace() {
            at += 1;
        }
        if bytes[at..].starts_with(b"/Page")
            && !bytes.get(at + 5).is_some_and(|b| b.is_ascii_alphanumeric())
        {
            count += 1;
        }
    }
    count
}

#[test]
fn chart_build_keeps_every_record() {
    let chart = fixture_chart(28);
    assert_eq!(chart.page_count(), 1);
    assert_eq!(chart.record_count(), 9);
    assert_eq!(chart.layouts.len(), chart.pages.len());

    let chart = fixture_chart(4);
    assert!(chart.page_count() > 1);
    assert_eq!(chart.record_count(), 9);
    let records: Vec<_> = chart.records().cloned().collect();
    assert_eq!(records, load_chore_list(FIXTURE).unwrap());
}

#[test]
fn zero_row_budget_is_rejected() {
    let config = ChartConfig {
        rows_per_page: 0,
        ..ChartConfig::default()
    };
    let records = load_chore_list(FIXTURE).unwrap();
    let err = Chart::build(&records, &config, today()).unwrap_err();
    assert!(matches!(err, ChartError::Config(ConfigError::Settings(_))), "got {err:?}");
}

#[test]
fn generate_rejects_a_bad_config_before_writing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("chart.pdf");
    let config = ChartConfig {
        wrap_width: 0,
        ..ChartConfig::with_paths(FIXTURE, &output)
    };
    let err = generate(&config, OutputFormat::Pdf, today()).unwrap_err();
    assert!(matches!(err, ChartError::Config(ConfigError::Settings(_))), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn default_config_carries_the_printed_layout() {
    let config = ChartConfig::default();
    assert_eq!(config.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    assert_eq!(config.wrap_width, DEFAULT_WRAP_WIDTH);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!((DEFAULT_ROWS_PER_PAGE, DEFAULT_WRAP_WIDTH), (28, 30));
    assert!(config.validate().is_ok());
}

#[test]
fn summary_lists_rooms_records_and_rows_per_page() {
    let summary = fixture_chart(28).summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].page, 1);
    assert_eq!(summary[0].rooms, vec!["Kitchen", "Bathroom", "Living Room"]);
    assert_eq!(summary[0].records, 9);
    assert_eq!(summary[0].rows, 12);
}

#[test]
fn json_writer_emits_page_descriptions() {
    let chart = fixture_chart(28);
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.json");
    JsonWriter.write_chart(&chart, &path).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["caption"], "10/11/2026 - 10/17/2026");
    assert_eq!(pages[0]["columns"][0], "Sunday");
    assert_eq!(pages[0]["columns"][8], "Monthly");

    let rows = pages[0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["kind"], "room_header");
    assert_eq!(rows[0]["room"], "Kitchen");
    assert_eq!(rows[1]["kind"], "chore");
    assert_eq!(rows[1]["frequency"], "Daily");
    assert_eq!(rows[1]["pattern"], "all_weekdays");
    assert_eq!(rows[1]["cells"][0]["kind"], "active");
    assert_eq!(rows[1]["cells"][7]["kind"], "inapplicable");
    assert_eq!(value["page_size"][0], 11.0);
    assert!(leftovers(dir.path()).is_empty());
}

#[test]
fn csv_writer_tags_records_with_their_page() {
    let chart = fixture_chart(4);
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.csv");
    CsvWriter.write_chart(&chart, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["page", "room", "chore", "frequency"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][1], "Kitchen");
    assert_eq!(&rows[0][2], "Wash dishes");
    assert_eq!(&rows[8][3], "Biweekly");
    let last_page: usize = rows[8][0].parse().unwrap();
    assert_eq!(last_page, chart.page_count());
}

#[test]
fn pdf_writer_produces_a_pdf_document() {
    let chart = fixture_chart(4);
    let bytes = PdfWriter::default().encode(&chart).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(chart.page_count() > 1);
    assert_eq!(pdf_page_count(&bytes), chart.page_count());

    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.pdf");
    PdfWriter::default().write_chart(&chart, &path).unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
    assert!(leftovers(dir.path()).is_empty());
}

#[test]
fn pdf_writer_handles_an_empty_chart() {
    let chart = Chart::build(&[], &ChartConfig::default(), today()).unwrap();
    assert_eq!(chart.page_count(), 0);
    let bytes = PdfWriter::default().encode(&chart).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(pdf_page_count(&bytes), 1);
}

#[test]
fn single_page_chart_yields_a_single_pdf_page() {
    let chart = fixture_chart(28);
    let bytes = PdfWriter::default().encode(&chart).unwrap();
    assert_eq!(pdf_page_count(&bytes), 1);
}

#[test]
fn failed_write_leaves_no_output_behind() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let output = missing.join("chart.pdf");
    let config = ChartConfig::with_paths(FIXTURE, &output);

    let err = generate(&config, OutputFormat::Pdf, today()).unwrap_err();
    assert!(matches!(err, ChartError::Render(RenderError::Io(_))), "got {err:?}");
    assert!(!output.exists());
    assert!(!missing.join("chart.pdf.partial").exists());
    assert!(leftovers(dir.path()).is_empty());
}

#[test]
fn generate_writes_the_requested_format() {
    let dir = tempdir().unwrap();
    for format in OutputFormat::ALL {
        let output = dir.path().join(format!("chart.{format}"));
        let config = ChartConfig::with_paths(FIXTURE, &output);
        let chart = generate(&config, format, today()).unwrap();
        assert_eq!(chart.record_count(), 9);
        assert!(output.exists(), "{format} output missing");
    }
    assert!(leftovers(dir.path()).is_empty());
}

#[test]
fn generate_writes_nothing_when_the_input_is_invalid() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("chores.yaml");
    let output = dir.path().join("chart.pdf");
    fs::write(&input, "Kitchen: [not, a, mapping]\n").unwrap();

    let config = ChartConfig::with_paths(&input, &output);
    let err = generate(&config, OutputFormat::Pdf, today()).unwrap_err();
    assert!(matches!(err, ChartError::Config(ConfigError::Schema(_))), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn generate_reports_a_missing_input() {
    let dir = tempdir().unwrap();
    let config = ChartConfig::with_paths(dir.path().join("missing.yaml"), dir.path().join("out.pdf"));
    let err = generate(&config, OutputFormat::Pdf, today()).unwrap_err();
    assert!(matches!(err, ChartError::Config(ConfigError::NotFound { .. })), "got {err:?}");
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn output_format_parses_case_insensitively() {
    assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(" csv ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert!("docx".parse::<OutputFormat>().is_err());
}
