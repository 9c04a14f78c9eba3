//! Local CSV preview: head of the file plus a column check against the
//! headers the backend expects. Missing columns warn, never fail; the
//! backend stays the structural authority.

use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;
use std::path::Path;

pub const EXPECTED_COLUMNS: [&str; 5] = [
    "Equipment Name",
    "Type",
    "Flowrate",
    "Pressure",
    "Temperature",
];

pub const MAX_PREVIEW_ROWS: usize = 100;

pub fn render(path: &Path, rows: usize) -> AppResult<()> {
    let rows = rows.clamp(1, MAX_PREVIEW_ROWS);

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let missing: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .filter(|expected| {
            !headers
                .iter()
                .any(|h| h.trim().eq_ignore_ascii_case(expected))
        })
        .copied()
        .collect();

    messages::header(format!("Preview: {}", path.display()));

    if missing.is_empty() {
        messages::success("All expected columns present");
    } else {
        messages::warning(format!(
            "Missing expected columns: {} (the backend will reject this file)",
            missing.join(", ")
        ));
    }

    let mut table = Table::new(headers.iter().collect::<Vec<&str>>());
    let mut total = 0usize;
    for record in reader.records() {
        let record = record?;
        total += 1;
        if total <= rows {
            table.add_row(record.iter().map(str::to_string).collect());
        }
    }

    println!("{}", table.render());
    println!("Showing first {} of {} data rows", total.min(rows), total);
    Ok(())
}
