//! Offline unit tests for ga4d-db pool configuration and row types.
//! These tests do not require a live database connection.

use ga4d_core::{AppConfig, Environment};
use ga4d_db::{Ga4PropertyRow, PoolConfig};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: Some("postgres://example".to_string()),
        env: Environment::Test,
        log_level: "info".to_string(),
        ga4_credentials_path: None,
        ga4_credentials_json: None,
        request_timeout_secs: 30,
        grant_service_account: "robot@example.iam.gserviceaccount.com".to_string(),
        grant_role: "predefinedRoles/viewer".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_defaults() {
    let pool_config = PoolConfig::default();
    assert_eq!(pool_config.max_connections, 10);
    assert_eq!(pool_config.min_connections, 1);
    assert_eq!(pool_config.acquire_timeout_secs, 10);
}

/// Compile-time smoke test: confirm that [`Ga4PropertyRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn ga4_property_row_has_expected_fields() {
    use chrono::Utc;

    let row = Ga4PropertyRow {
        id: 1_i64,
        domain: "example.com".to_string(),
        property_id: "123456789".to_string(),
        description: Some("Example Site".to_string()),
        category: "website".to_string(),
        currency_code: Some("USD".to_string()),
        time_zone: Some("America/Los_Angeles".to_string()),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    assert_eq!(row.id, 1);
    assert_eq!(row.domain, "example.com");
    assert_eq!(row.property_id, "123456789");
    assert_eq!(row.category, "website");
    assert!(row.is_active);
}
