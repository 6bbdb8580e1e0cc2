//! Export formats for sorted display lists.

use std::io::Write;

use serde_json::{Value as JsonValue, json};
use strum::{Display, EnumString};

use crate::error::Result;
use crate::listing::{DisplayEntry, DisplayList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Tsv,
    Json,
}

pub fn format_tsv_header() -> String {
    ["position", "id", "title", "composer", "category"].join("\t")
}

/// Generate one TSV row; `position` is 1-based.
pub fn format_tsv_row(position: usize, entry: &DisplayEntry<'_>) -> String {
    [
        position.to_string(),
        entry.track.id().to_string(),
        sanitize_field(entry.title),
        sanitize_field(entry.track.composer()),
        sanitize_field(entry.track.category()),
    ]
    .join("\t")
}

pub fn format_tsv(list: &DisplayList<'_>) -> String {
    let mut lines = vec![format_tsv_header()];
    lines.extend(
        list.iter()
            .enumerate()
            .map(|(i, entry)| format_tsv_row(i + 1, entry)),
    );
    lines.join("\n")
}

pub fn format_json(list: &DisplayList<'_>) -> JsonValue {
    let tracks: Vec<JsonValue> = list
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            json!({
                "position": i + 1,
                "id": entry.track.id(),
                "title": entry.title,
                "composer": entry.track.composer(),
                "category": entry.track.category(),
            })
        })
        .collect();

    json!({
        "language": list.language().as_str(),
        "tracks": tracks,
    })
}

/// Write a display list in the given format, ending with a newline.
pub fn write_listing<W: Write>(
    writer: &mut W,
    list: &DisplayList<'_>,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Tsv => writeln!(writer, "{}", format_tsv(list))?,
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &format_json(list))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
