//! Terminal rendering of an upload summary: stat lines, average-value bars,
//! equipment-type distribution and the raw-row preview table (when present).

use crate::models::UploadSummary;
use crate::ui::messages;
use crate::utils::format;
use crate::utils::table::Table;
use ansi_term::Colour;

const BAR_WIDTH: usize = 40;
const PREVIEW_ROWS: usize = 10;

/// Scale `value` against `max` into a bar of at most `width` cells.
/// Non-zero values always get at least one cell.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

pub fn render(summary: &UploadSummary) {
    messages::header(format!("Summary #{}: {}", summary.id, summary.filename));

    println!("📄 File     : {}", summary.filename);
    println!("🕒 Uploaded : {}", format::timestamp(&summary.uploaded_at));
    println!("🔢 Total Equipment Count : {}", summary.total_equipment_count);
    println!();

    render_averages(summary);
    render_distribution(summary);
    render_raw_rows(summary);
}

fn render_averages(summary: &UploadSummary) {
    let stats = [
        ("Average Flowrate", summary.avg_flowrate),
        ("Average Pressure", summary.avg_pressure),
        ("Average Temperature", summary.avg_temperature),
    ];
    let max = stats
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    println!("{}", Colour::Cyan.bold().paint("Average Readings"));
    for (label, value) in stats {
        println!(
            "  {:<20} {:>10}  {}",
            label,
            format::stat(value),
            Colour::Cyan.paint(bar(value, max, BAR_WIDTH))
        );
    }
    println!();
}

fn render_distribution(summary: &UploadSummary) {
    if summary.equipment_type_distribution.is_empty() {
        return;
    }

    let label_width = summary
        .equipment_type_distribution
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    let max_count = summary
        .equipment_type_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);

    println!("{}", Colour::Green.bold().paint("Equipment Type Distribution"));
    for (equipment_type, count) in &summary.equipment_type_distribution {
        println!(
            "  {:<width$} {:>4}  ({:>6})  {}",
            equipment_type,
            count,
            format::percent(*count, summary.total_equipment_count),
            Colour::Green.paint(bar(*count as f64, max_count as f64, BAR_WIDTH)),
            width = label_width
        );
    }
    println!();
}

fn render_raw_rows(summary: &UploadSummary) {
    // Raw rows only exist in a direct upload response; fetched summaries
    // come back without them and the table is simply omitted.
    if summary.raw_data.is_empty() {
        return;
    }

    println!("{}", Colour::Yellow.bold().paint("Data Preview"));
    let mut table = Table::new(vec![
        "Equipment Name",
        "Type",
        "Flowrate",
        "Pressure",
        "Temperature",
    ]);
    for row in summary.raw_data.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            row.name.clone(),
            row.equipment_type.clone(),
            format::stat(row.flowrate),
            format::stat(row.pressure),
            format::stat(row.temperature),
        ]);
    }
    println!("{}", table.render());

    let total = summary.raw_data.len();
    if total > PREVIEW_ROWS {
        println!("(+{} more rows)", total - PREVIEW_ROWS);
        println!();
    }
}
