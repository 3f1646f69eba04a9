//! The three discovery stages: enumeration, domain resolution, row building.

use ga4d_admin::normalize;
use ga4d_admin::{Account, AdminClient, Property};
use ga4d_core::{categorize, DiscoveredPropertyRow, DEFAULT_CURRENCY_CODE, DEFAULT_TIME_ZONE};

/// Walks every visible account, keeps the ordinary (GA4) properties, and
/// produces one normalized row per property.
///
/// A failure to list one account's properties is logged and the account is
/// skipped; the remaining accounts are still processed.
///
/// # Errors
///
/// Returns an error only if the top-level account listing fails; with no
/// accounts there is nothing to discover.
pub(crate) async fn discover_rows(
    client: &AdminClient,
) -> anyhow::Result<Vec<DiscoveredPropertyRow>> {
    let accounts = client
        .list_accounts()
        .await
        .map_err(|e| anyhow::anyhow!("failed to list accounts: {e}"))?;

    let mut rows = Vec::new();
    for account in &accounts {
        println!("Scanning account: {} ({})", account.display_name, account.name);

        let properties = match client.list_properties(&account.name).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    account = %account.name,
                    error = %e,
                    "failed to list properties, skipping account"
                );
                continue;
            }
        };

        let ordinary: Vec<&Property> = properties.iter().filter(|p| p.is_ordinary()).collect();
        if ordinary.is_empty() {
            println!("  (no GA4 properties in this account)");
            continue;
        }

        for property in ordinary {
            let domain = resolve_domain(client, property).await;
            let row = build_row(account, property, domain);
            println!("  [OK] {} -> {}", row.display_name, row.domain);
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Resolves a human-meaningful domain for one property. Total: always
/// returns something.
///
/// Strategy order: the first data stream exposing a non-empty web default
/// URI is authoritative; on any error or empty yield, fall back to the
/// display-name slug placeholder.
pub(crate) async fn resolve_domain(client: &AdminClient, property: &Property) -> String {
    match client.list_data_streams(&property.name).await {
        Ok(streams) => {
            for stream in &streams {
                let derived = stream
                    .web_stream_data
                    .as_ref()
                    .and_then(|web| web.default_uri.as_deref())
                    .and_then(normalize::domain_from_uri);
                if let Some(domain) = derived {
                    return domain;
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                property = %property.name,
                error = %e,
                "failed to list data streams, falling back to display-name slug"
            );
        }
    }

    let slug = normalize::display_name_slug(&property.display_name);
    if !normalize::is_domain_like(&slug) {
        tracing::info!(
            property = %property.name,
            slug = %slug,
            "domain is a display-name placeholder; review before trusting it as a key"
        );
    }
    slug
}

/// Assembles the canonical row from an account/property pair and its
/// resolved domain. Missing currency/time zone get the GA4 defaults.
pub(crate) fn build_row(
    account: &Account,
    property: &Property,
    domain: String,
) -> DiscoveredPropertyRow {
    let category = categorize(&property.display_name, &domain);
    DiscoveredPropertyRow {
        property_id: normalize::property_id_from_name(&property.name).to_string(),
        display_name: property.display_name.clone(),
        category,
        currency_code: property
            .currency_code
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string()),
        time_zone: property
            .time_zone
            .clone()
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
        account: account.display_name.clone(),
        account_id: account.name.clone(),
        domain,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
