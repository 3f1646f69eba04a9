//! SQL renderer: one idempotent upsert statement per discovered property.

use chrono::Utc;
use ga4d_core::DiscoveredPropertyRow;

/// Renders the full SQL artifact: header comments followed by one
/// `INSERT ... ON CONFLICT (domain) DO UPDATE` statement per row. Applying
/// the output twice leaves the destination table in the same state as
/// applying it once.
pub(crate) fn render_sql(rows: &[DiscoveredPropertyRow]) -> String {
    let mut lines = vec![
        "-- Auto-discovered GA4 properties".to_string(),
        format!("-- Generated: {}", Utc::now().to_rfc3339()),
        format!("-- Total: {} properties", rows.len()),
        String::new(),
        "-- Clear existing data (comment out if you want to keep existing)".to_string(),
        "-- DELETE FROM ga4_properties;".to_string(),
        String::new(),
        "-- Insert discovered properties".to_string(),
        String::new(),
    ];

    for row in rows {
        lines.push(render_upsert(row));
    }

    lines.join("\n")
}

/// Renders the upsert statement for one row, prefixed with a provenance
/// comment. All string fields are escaped by doubling single quotes, and
/// the comment text is flattened to a single line so an odd display name
/// cannot leak raw text into the statement below it.
fn render_upsert(row: &DiscoveredPropertyRow) -> String {
    format!(
        "-- {display_name} ({account})\n\
         INSERT INTO ga4_properties (domain, property_id, description, category, is_active)\n\
         VALUES ('{domain}', '{property_id}', '{description}', '{category}', true)\n\
         ON CONFLICT (domain) DO UPDATE SET\n\
         \x20   property_id = EXCLUDED.property_id,\n\
         \x20   description = EXCLUDED.description,\n\
         \x20   category = EXCLUDED.category,\n\
         \x20   updated_at = NOW();\n",
        display_name = comment_text(&row.display_name),
        account = comment_text(&row.account),
        domain = sql_escape(&row.domain),
        property_id = sql_escape(&row.property_id),
        description = sql_escape(&row.display_name),
        category = row.category,
    )
}

/// Escape a string literal for single-quoted SQL by doubling embedded quotes.
fn sql_escape(s: &str) -> String {
    s.replace('\'', "''")
}

/// Flatten text destined for a `--` comment onto one line.
fn comment_text(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
