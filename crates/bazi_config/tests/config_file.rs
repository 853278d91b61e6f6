//! Config file discovery and layering against real files.

use std::fs;

use bazi_config::{BaziConfig, CliOverrides, ConfigError, DEFAULT_CONFIG_FILE, OutputFormat};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn picks_up_bazi_toml_in_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[output]\nformat = \"json\"\npretty = true\n\n[batch]\nparallel = false\n",
    )
    .unwrap();

    let c = BaziConfig::load_with_env(dir.path(), None, None, no_env).unwrap();
    assert_eq!(c.output.effective_format(), OutputFormat::Json);
    assert!(c.output.effective_pretty());
    assert!(!c.batch.effective_parallel());
}

#[test]
fn missing_default_file_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let c = BaziConfig::load_with_env(dir.path(), None, None, no_env).unwrap();
    assert_eq!(c, BaziConfig::default());
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = BaziConfig::load_with_env(dir.path(), Some(&missing), None, no_env).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn explicit_path_wins_over_root_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[log]\nfilter = \"info\"\n").unwrap();
    let other = dir.path().join("other.toml");
    fs::write(&other, "[log]\nfilter = \"trace\"\n").unwrap();

    let c = BaziConfig::load_with_env(dir.path(), Some(&other), None, no_env).unwrap();
    assert_eq!(c.log.effective_filter(), "trace");
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[output\nformat = ").unwrap();

    match BaziConfig::load_with_env(dir.path(), None, None, no_env) {
        Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path.display().to_string()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn layers_stack_file_env_cli() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[output]\nformat = \"json\"\n\n[log]\nfilter = \"info\"\n",
    )
    .unwrap();
    let env = |key: &str| (key == "BAZI_OUTPUT_FORMAT").then(|| "text".to_string());
    let cli = CliOverrides {
        pretty: Some(true),
        ..Default::default()
    };

    let c = BaziConfig::load_with_env(dir.path(), None, Some(&cli), env).unwrap();
    assert_eq!(c.output.effective_format(), OutputFormat::Text);
    assert!(c.output.effective_pretty());
    assert_eq!(c.log.effective_filter(), "info");
}
