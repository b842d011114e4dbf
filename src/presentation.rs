// src/presentation.rs
use std::io::{self, Write};

use livecount_domain::{CountMode, DisplayStatistic, DocumentDisplay, SelectionDisplay, SelectionStatistic};
use serde::Serialize;

use crate::cli::CliOutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Status,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Status => OutputFormat::Status,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Everything shown for one document at one point in time.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    /// Edit-script step this report follows; `None` outside a replay.
    pub batch: Option<usize>,
    pub count: CountMode,
    pub document: DocumentDisplay,
    pub selection: SelectionDisplay,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    batch: Option<usize>,
    count: CountMode,
    document: Option<DisplayStatistic>,
    selection: Option<SelectionStatistic>,
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        let document = match report.document {
            DocumentDisplay::Shown(stat) => Some(stat),
            DocumentDisplay::Disabled => None,
        };
        let selection = match report.selection {
            SelectionDisplay::Shown(stat) => Some(stat),
            SelectionDisplay::Hidden | SelectionDisplay::Disabled => None,
        };
        Self { name: &report.name, batch: report.batch, count: report.count, document, selection }
    }
}

/// `wc (all): ( L | W | S )`, or `wc (all): ( - )` when toggled off.
pub fn document_status(display: &DocumentDisplay) -> String {
    match display {
        DocumentDisplay::Shown(stat) => format!("wc (all): {stat}"),
        DocumentDisplay::Disabled => "wc (all): ( - )".to_string(),
    }
}

/// `wc (sel): ( L | W | S )` with a `(N selections)` suffix for more than one range.
pub fn selection_status(display: &SelectionDisplay) -> Option<String> {
    match display {
        SelectionDisplay::Hidden => None,
        SelectionDisplay::Disabled => Some("wc (sel): ( - )".to_string()),
        SelectionDisplay::Shown(selection) if selection.selections > 1 => Some(format!(
            "wc (sel): {} ({} selections)",
            selection.statistic, selection.selections
        )),
        SelectionDisplay::Shown(selection) => Some(format!("wc (sel): {}", selection.statistic)),
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Status => write_status(out, report),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JsonReport::from(report))?;
            writeln!(out)
        }
    }
}

fn write_status<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let suffix = report.batch.map(|batch| format!(" #{batch}")).unwrap_or_default();
    writeln!(out, "{} {}{suffix}", document_status(&report.document), report.name)?;
    if let Some(line) = selection_status(&report.selection) {
        writeln!(out, "{line} {}{suffix}", report.name)?;
    }
    Ok(())
}
