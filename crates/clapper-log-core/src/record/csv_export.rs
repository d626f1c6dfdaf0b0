use crate::{CoreResult, ShootError, record::RecordLog};

use std::panic::Location;

use error_location::ErrorLocation;

/// Byte-order mark so spreadsheet applications detect UTF-8.
pub const UTF8_BOM: char = '\u{feff}';

const HEADER_WITH_SETUP: [&str; 7] = [
    "date",
    "scene",
    "setup_duration",
    "start_time",
    "end_time",
    "duration",
    "notes",
];

const HEADER_WITHOUT_SETUP: [&str; 6] = [
    "date",
    "scene",
    "start_time",
    "end_time",
    "duration",
    "notes",
];

impl RecordLog {
    /// Render the log as BOM-prefixed CSV, one quoted row per record.
    ///
    /// `include_setup` adds the setup-duration column after the scene.
    #[track_caller]
    pub fn export_csv(&self, date_label: &str, include_setup: bool) -> CoreResult<String> {
        if self.is_empty() {
            return Err(ShootError::NothingToExport {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let header: &[&str] = if include_setup {
            &HEADER_WITH_SETUP
        } else {
            &HEADER_WITHOUT_SETUP
        };

        let mut lines = Vec::with_capacity(self.len() + 1);
        lines.push(csv_row(header.iter().copied()));

        for record in self.records() {
            let mut fields = vec![date_label, record.scene.as_str()];
            if include_setup {
                fields.push(record.setup_duration.as_deref().unwrap_or_default());
            }
            fields.extend([
                record.start_time.as_str(),
                record.end_time.as_str(),
                record.duration.as_str(),
                record.notes.as_str(),
            ]);
            lines.push(csv_row(fields));
        }

        let mut csv = String::new();
        csv.push(UTF8_BOM);
        csv.push_str(&lines.join("\n"));

        Ok(csv)
    }
}

fn csv_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
