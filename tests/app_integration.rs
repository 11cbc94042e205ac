use fxform::cli::convert::{self, OutputFormat};
use fxform::core::{Converter, Currency, Variant};
use fxform::{AppCommand, Overrides};
use std::fs;
use tracing::info;

mod test_utils {
    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        std::fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test]
fn test_full_app_flow_with_config_file() {
    let config_file = test_utils::write_config(
        r#"
        rate: 600000
        variant: multi
    "#,
    );

    let result = fxform::run_command(
        AppCommand::Convert {
            currency: Currency::Usd,
            amount: "3".to_string(),
            format: OutputFormat::Json,
        },
        Some(config_file.path().to_str().unwrap()),
        Overrides::default(),
    );
    assert!(
        result.is_ok(),
        "run_command failed with: {:?}",
        result.err()
    );
}

#[test_log::test]
fn test_resolve_config_applies_overrides() -> anyhow::Result<()> {
    let config_file = test_utils::write_config("rate: 600000\n");
    let path = config_file.path().to_str().unwrap();

    let config = fxform::resolve_config(Some(path), Overrides::default())?;
    assert_eq!(config.rate, 600_000.0);
    assert_eq!(config.variant, Variant::Multi);

    let config = fxform::resolve_config(
        Some(path),
        Overrides {
            rate: Some(42_000.0),
            pair: true,
        },
    )?;
    info!(?config, "Resolved config with overrides");
    assert_eq!(config.rate, 42_000.0);
    assert_eq!(config.variant, Variant::Pair);
    Ok(())
}

#[test_log::test]
fn test_invalid_rate_fails_fast() {
    let config_file = test_utils::write_config("rate: -10\n");
    let result = fxform::run_command(
        AppCommand::Convert {
            currency: Currency::Usd,
            amount: "1".to_string(),
            format: OutputFormat::Table,
        },
        Some(config_file.path().to_str().unwrap()),
        Overrides::default(),
    );
    let err = result.expect_err("negative rate should be rejected");
    assert!(format!("{err:#}").contains("positive"));

    let valid = test_utils::write_config("rate: 500000\n");
    let result = fxform::resolve_config(
        Some(valid.path().to_str().unwrap()),
        Overrides {
            rate: Some(0.0),
            pair: false,
        },
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");
    let result = fxform::resolve_config(Some(path.to_str().unwrap()), Overrides::default());
    assert!(result.is_err());
}

#[test_log::test]
fn test_pair_form_from_config() -> anyhow::Result<()> {
    let config_file = test_utils::write_config("rate: 500000\nvariant: pair\n");
    let config =
        fxform::resolve_config(Some(config_file.path().to_str().unwrap()), Overrides::default())?;

    let mut converter = Converter::with_variant(config.variant, config.rate)?;
    let json = convert::render(&mut converter, Currency::Irr, "1000000", OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["usd"], "2.00");
    assert_eq!(value["irr"], "1000000");
    assert!(value.get("eur").is_none());

    // A multi-only currency is rejected by the pair form
    let result = convert::render(&mut converter, Currency::Eur, "1", OutputFormat::Json);
    assert!(result.is_err());
    Ok(())
}

#[test_log::test]
fn test_setup_then_run() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("fxform").join("config.yaml");
    fxform::cli::setup::setup_at_path(&path)?;
    assert!(fs::metadata(&path)?.is_file());

    fxform::run_command(
        AppCommand::Convert {
            currency: Currency::Gbp,
            amount: "0.79".to_string(),
            format: OutputFormat::Table,
        },
        Some(path.to_str().unwrap()),
        Overrides::default(),
    )
}
