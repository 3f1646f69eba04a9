use clap::Parser;

use super::*;
use crate::discover::OutputMode;

#[test]
fn parses_discover_defaults() {
    let cli = Cli::try_parse_from(["ga4d-cli", "discover"]).expect("expected valid cli args");
    let Commands::Discover(args) = cli.command else {
        panic!("expected discover subcommand");
    };
    assert_eq!(args.output, OutputMode::Sql);
    assert_eq!(
        args.sql_file.to_str(),
        Some("discovered-ga4-properties.sql")
    );
    assert_eq!(
        args.csv_file.to_str(),
        Some("discovered-ga4-properties.csv")
    );
    assert!(!args.csv_compact);
    assert!(!args.upsert);
    assert!(args.credentials.is_none());
}

#[test]
fn parses_discover_with_all_flags() {
    let cli = Cli::try_parse_from([
        "ga4d-cli",
        "discover",
        "--credentials",
        "/tmp/key.json",
        "--output",
        "both",
        "--sql-file",
        "out.sql",
        "--csv-file",
        "out.csv",
        "--csv-compact",
        "--upsert",
    ])
    .expect("expected valid cli args");
    let Commands::Discover(args) = cli.command else {
        panic!("expected discover subcommand");
    };
    assert_eq!(args.output, OutputMode::Both);
    assert_eq!(args.sql_file.to_str(), Some("out.sql"));
    assert_eq!(args.csv_file.to_str(), Some("out.csv"));
    assert!(args.csv_compact);
    assert!(args.upsert);
    assert_eq!(args.credentials.as_deref().and_then(|p| p.to_str()), Some("/tmp/key.json"));
}

#[test]
fn parses_grant_access_overrides() {
    let cli = Cli::try_parse_from([
        "ga4d-cli",
        "grant-access",
        "--service-account",
        "robot@example.iam.gserviceaccount.com",
        "--role",
        "predefinedRoles/admin",
    ])
    .expect("expected valid cli args");
    let Commands::GrantAccess(args) = cli.command else {
        panic!("expected grant-access subcommand");
    };
    assert_eq!(
        args.service_account.as_deref(),
        Some("robot@example.iam.gserviceaccount.com")
    );
    assert_eq!(args.role.as_deref(), Some("predefinedRoles/admin"));
}

#[test]
fn rejects_unknown_output_mode() {
    let err = Cli::try_parse_from(["ga4d-cli", "discover", "--output", "yaml"]);
    assert!(err.is_err());
}
