//! CSV renderer over the discovered row set.

use ga4d_core::DiscoveredPropertyRow;

/// Full column set, matching the destination table shape.
const HEADER: [&str; 7] = [
    "domain",
    "property_id",
    "display_name",
    "category",
    "currency_code",
    "time_zone",
    "is_active",
];

/// Compact column set for quick human review in a spreadsheet.
const COMPACT_HEADER: [&str; 4] = ["domain", "property_id", "display_name", "account"];

/// Renders the full CSV artifact (header + one line per property).
/// Quoting and escaping of embedded commas/quotes is handled by the writer.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub(crate) fn render_csv(rows: &[DiscoveredPropertyRow]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            row.domain.as_str(),
            row.property_id.as_str(),
            row.display_name.as_str(),
            row.category.as_str(),
            row.currency_code.as_str(),
            row.time_zone.as_str(),
            "true",
        ])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

/// Renders the compact review CSV (domain, property ID, name, account).
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub(crate) fn render_csv_compact(rows: &[DiscoveredPropertyRow]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COMPACT_HEADER)?;
    for row in rows {
        writer.write_record([
            row.domain.as_str(),
            row.property_id.as_str(),
            row.display_name.as_str(),
            row.account.as_str(),
        ])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
