//! Access-granting command: bind a fixed service-account identity as Viewer
//! on every discovered GA4 property.
//!
//! Every per-property failure is recorded and skipped: `ALREADY_EXISTS` is
//! success-equivalent, `PERMISSION_DENIED` and anything else are counted
//! errors, so the run always proceeds through the full property set.

use std::path::PathBuf;

use clap::Args;

use ga4d_admin::credentials::ANALYTICS_MANAGE_USERS_SCOPE;
use ga4d_admin::AdminClient;
use ga4d_core::AppConfig;

/// Arguments for `ga4d-cli grant-access`.
#[derive(Debug, Args)]
pub struct GrantArgs {
    /// Path to the service-account JSON key (overrides GA4_CREDENTIALS_PATH)
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Email to grant access to (overrides GA4D_GRANT_SERVICE_ACCOUNT)
    #[arg(long)]
    pub service_account: Option<String>,

    /// Predefined role to grant (overrides GA4D_GRANT_ROLE)
    #[arg(long)]
    pub role: Option<String>,
}

/// Aggregate outcome of a grant run.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct GrantTotals {
    pub properties: i32,
    pub granted: i32,
    pub already: i32,
    pub errors: i32,
}

/// Grants the configured identity Viewer access to every ordinary property
/// the credentials can see, then prints the summary counts.
///
/// # Errors
///
/// Returns an error if credentials are missing or the account listing fails;
/// individual binding failures are counted, not propagated.
pub async fn run_grant_access(config: &AppConfig, args: &GrantArgs) -> anyhow::Result<()> {
    let email = args
        .service_account
        .as_deref()
        .unwrap_or(&config.grant_service_account);
    let role = args.role.as_deref().unwrap_or(&config.grant_role);

    println!("GA4 access granting");
    println!("  Service account: {email}");
    println!("  Role:            {role}\n");

    let client = crate::discover::build_client(
        config,
        args.credentials.as_deref(),
        ANALYTICS_MANAGE_USERS_SCOPE,
    )
    .await?;

    let totals = grant_all(&client, email, role).await?;

    println!("\nSummary:");
    println!("  Properties processed: {}", totals.properties);
    println!("  Access granted:       {}", totals.granted);
    println!("  Already had access:   {}", totals.already);
    println!("  Errors:               {}", totals.errors);

    if totals.granted > 0 {
        println!("\nNext steps:");
        println!("  1. Wait 1-2 minutes for permissions to propagate");
        println!("  2. Re-run the data sync");
    } else if totals.already > 0 {
        println!("\nService account already had access everywhere; if dashboards still show zeros, the properties may simply have no data.");
    } else {
        println!("\nNo access was granted. Check the errors above.");
    }

    Ok(())
}

/// Walks every ordinary property and ensures the identity is bound.
///
/// The existing-binding check is best-effort: if it fails, the create is
/// attempted anyway and the API's `ALREADY_EXISTS` answer is trusted.
pub(crate) async fn grant_all(
    client: &AdminClient,
    email: &str,
    role: &str,
) -> anyhow::Result<GrantTotals> {
    let accounts = client
        .list_accounts()
        .await
        .map_err(|e| anyhow::anyhow!("failed to list accounts: {e}"))?;

    let user = format!("user:{email}");
    let roles = vec![role.to_string()];
    let mut totals = GrantTotals::default();

    for (idx, account) in accounts.iter().enumerate() {
        println!(
            "[{}/{}] Processing account: {}",
            idx + 1,
            accounts.len(),
            account.display_name
        );

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

        for property in properties.iter().filter(|p| p.is_ordinary()) {
            totals.properties = totals.properties.saturating_add(1);

            let already_bound = match client.list_access_bindings(&property.name).await {
                Ok(bindings) => bindings.iter().any(|b| b.user.as_deref() == Some(&user)),
                Err(e) => {
                    tracing::warn!(
                        property = %property.name,
                        error = %e,
                        "could not check existing bindings; attempting create anyway"
                    );
                    false
                }
            };

            if already_bound {
                totals.already = totals.already.saturating_add(1);
                println!("  [SKIP] {} already has access", property.display_name);
                continue;
            }

            match client.create_access_binding(&property.name, &user, &roles).await {
                Ok(_) => {
                    totals.granted = totals.granted.saturating_add(1);
                    println!("  [OK] Granted access to {}", property.display_name);
                }
                Err(e) if e.is_already_exists() => {
                    totals.already = totals.already.saturating_add(1);
                    println!("  [SKIP] {} already has access", property.display_name);
                }
                Err(e) if e.is_permission_denied() => {
                    totals.errors = totals.errors.saturating_add(1);
                    tracing::warn!(
                        property = %property.name,
                        "permission denied, the credentials may not be admin on this property"
                    );
                }
                Err(e) => {
                    totals.errors = totals.errors.saturating_add(1);
                    tracing::warn!(
                        property = %property.name,
                        error = %e,
                        "failed to create access binding"
                    );
                }
            }
        }
    }

    Ok(totals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "grant_test.rs"]
mod tests;
