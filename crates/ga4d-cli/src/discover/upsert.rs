//! Direct-upsert sink: one keyed upsert per row against `ga4_properties`.

use ga4d_core::DiscoveredPropertyRow;

/// Aggregate counts from an upsert batch. Postgres upserts do not report
/// insert-vs-update, so successes are a single combined total.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct UpsertTotals {
    pub upserted: i32,
    pub errors: i32,
}

/// Upserts every row, isolating failures per row: a failed upsert is logged
/// and counted, never aborting the rest of the batch.
pub(crate) async fn upsert_rows(
    pool: &sqlx::PgPool,
    rows: &[DiscoveredPropertyRow],
) -> UpsertTotals {
    let mut totals = UpsertTotals::default();

    for row in rows {
        match ga4d_db::upsert_ga4_property(pool, row).await {
            Ok(_) => {
                totals.upserted = totals.upserted.saturating_add(1);
                println!("  [OK] Upserted: {}", row.domain);
            }
            Err(e) => {
                totals.errors = totals.errors.saturating_add(1);
                tracing::warn!(
                    domain = %row.domain,
                    error = %e,
                    "failed to upsert property row"
                );
            }
        }
    }

    totals
}
