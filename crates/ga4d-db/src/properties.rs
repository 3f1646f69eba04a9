//! Database operations for the `ga4_properties` table.

use chrono::{DateTime, Utc};
use ga4d_core::DiscoveredPropertyRow;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `ga4_properties` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Ga4PropertyRow {
    pub id: i64,
    pub domain: String,
    pub property_id: String,
    pub description: Option<String>,
    pub category: String,
    pub currency_code: Option<String>,
    pub time_zone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Upserts one discovered property, keyed on `domain`.
///
/// Repeated runs over unchanged API data are a no-op apart from bumping
/// `updated_at`. Postgres does not report whether the statement inserted or
/// updated, so callers count a single combined "upserted" total.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn upsert_ga4_property(
    pool: &PgPool,
    row: &DiscoveredPropertyRow,
) -> Result<Ga4PropertyRow, DbError> {
    let stored = sqlx::query_as::<_, Ga4PropertyRow>(
        "INSERT INTO ga4_properties \
           (domain, property_id, description, category, currency_code, time_zone, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6, true) \
         ON CONFLICT (domain) DO UPDATE SET \
           property_id   = EXCLUDED.property_id, \
           description   = EXCLUDED.description, \
           category      = EXCLUDED.category, \
           currency_code = EXCLUDED.currency_code, \
           time_zone     = EXCLUDED.time_zone, \
           updated_at    = NOW() \
         RETURNING id, domain, property_id, description, category, currency_code, time_zone, \
                   is_active, created_at, updated_at",
    )
    .bind(&row.domain)
    .bind(&row.property_id)
    .bind(&row.display_name)
    .bind(row.category.as_str())
    .bind(&row.currency_code)
    .bind(&row.time_zone)
    .fetch_one(pool)
    .await?;
    Ok(stored)
}

/// Returns the total number of registered properties, for post-import
/// verification narration.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_ga4_properties(pool: &PgPool) -> Result<i64, DbError> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ga4_properties")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
