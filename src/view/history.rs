//! Terminal rendering of the upload history list.

use crate::models::UploadSummary;
use crate::ui::messages;
use crate::utils::format;
use crate::utils::table::Table;

pub fn render(entries: &[UploadSummary]) {
    if entries.is_empty() {
        messages::info("No uploads yet. Run 'chemeq upload <file.csv>' to create one.");
        return;
    }

    messages::header("Upload History (last 5)");

    let mut table = Table::new(vec![
        "ID",
        "File",
        "Uploaded",
        "Equipment",
        "Avg Flowrate",
        "Avg Pressure",
        "Avg Temperature",
    ]);
    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.filename.clone(),
            format::timestamp(&entry.uploaded_at),
            entry.total_equipment_count.to_string(),
            format::stat(entry.avg_flowrate),
            format::stat(entry.avg_pressure),
            format::stat(entry.avg_temperature),
        ]);
    }
    println!("{}", table.render());
    println!("Use 'chemeq show <ID>' to re-display a summary, 'chemeq report <ID>' for the PDF.");
}
