use anyhow::{Context, Result};
use chore_chart::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use chore_chart::{ChartConfig, OutputFormat, PageSummary, generate, logging};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn render_summary_as_text_table(summary: &[PageSummary]) -> String {
    let headers = ["page", "rooms", "records", "rows"];
    let cells: Vec<[String; 4]> = summary
        .iter()
        .map(|s| {
            [
                s.page.to_string(),
                s.rooms.join(", "),
                s.records.to_string(),
                s.rows.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, values: &[&str]| {
        out.push('|');
        for (ci, value) in values.iter().enumerate() {
            out.push(' ');
            out.push_str(value);
            let pad = widths[ci].saturating_sub(value.chars().count());
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &headers);
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &values);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn main() -> Result<()> {
    logging::init();
    let defaults = ChartConfig::default();

    let matches = Command::new("chore-chart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a household chore list into a printable weekly chart")
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("PATH")
                .help("Chore list (room -> frequency -> chores)")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT_PATH),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .help("Where to write the chart")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT_PATH),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .default_value("pdf")
                .value_parser(["pdf", "json", "csv"]),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print how the chores were split into pages")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches.get_one::<PathBuf>("input").cloned().unwrap_or(defaults.input_path);
    let output = matches.get_one::<PathBuf>("output").cloned().unwrap_or(defaults.output_path);
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let config = ChartConfig::with_paths(input, output);
    let today = chrono::Local::now().date_naive();
    let chart = generate(&config, format, today).with_context(|| {
        format!(
            "failed to build chore chart from {}",
            config.input_path.display()
        )
    })?;

    if matches.get_flag("summary") {
        print!("{}", render_summary_as_text_table(&chart.summary()));
    }
    if chart.page_count() == 0 {
        println!(
            "No chores found; wrote an empty chart to {}",
            config.output_path.display()
        );
    } else {
        println!(
            "Wrote {} page(s) to {}",
            chart.page_count(),
            config.output_path.display()
        );
    }
    Ok(())
}
