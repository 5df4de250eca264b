//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Removes the var on drop so a failing test does not leak it.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_ends_with_listport_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("listport") && path_str.ends_with("config.toml"),
        "Path should contain 'listport' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_listport_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("listport.log"),
        "Default log path should end with 'listport.log', got: {:?}",
        path
    );
}

// ===== Loading =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/listport.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "listport_test_valid.toml",
        r#"
scroll_off_margin = 4
live_highlight = true
log_file_path = "/tmp/listport-test.log"

[lists.menu]
scroll_off_margin = 0
"#,
    );

    let config = load_config_file(&path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.scroll_off_margin, Some(4));
    assert_eq!(config.live_highlight, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/listport-test.log"))
    );
    assert_eq!(
        config.lists.get("menu"),
        Some(&ListConfigSection {
            scroll_off_margin: Some(0),
            live_highlight: None,
        })
    );

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("listport_test_invalid.toml", "scroll_off_margin = [");

    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got: {:?}",
        result
    );

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_negative_margin() {
    let path = write_temp_config("listport_test_negative.toml", "scroll_off_margin = -1");

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown top-level key should be rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[lists.menu]\nwrap = true");
    assert!(result.is_err(), "Unknown list key should be rejected");
}

#[test]
fn empty_file_parses_to_all_none() {
    let config: ConfigFile = toml::from_str("").expect("Empty TOML is valid");
    assert_eq!(config, ConfigFile::default());
}

// ===== Merging =====

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.scroll_off_margin, 2);
    assert!(!resolved.live_highlight);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        scroll_off_margin: Some(5),
        live_highlight: Some(true),
        ..Default::default()
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.scroll_off_margin, 5);
    assert!(resolved.live_highlight);
    assert_eq!(
        resolved.log_file_path,
        default_log_path(),
        "Unset log path should fall back to the default"
    );
}

#[test]
fn list_config_falls_back_to_global_values() {
    let resolved = ResolvedConfig {
        scroll_off_margin: 3,
        live_highlight: true,
        ..Default::default()
    };

    assert_eq!(
        resolved.list_config("anything"),
        ListConfig {
            scroll_off_margin: 3,
            live_highlight: true,
        }
    );
}

#[test]
fn list_config_applies_section_field_by_field() {
    let mut lists = HashMap::new();
    lists.insert(
        "menu".to_string(),
        ListConfigSection {
            scroll_off_margin: Some(0),
            live_highlight: None,
        },
    );
    let resolved = ResolvedConfig {
        live_highlight: true,
        lists,
        ..Default::default()
    };

    let menu = resolved.list_config("menu");
    assert_eq!(menu.scroll_off_margin, 0);
    assert!(menu.live_highlight, "Unset section field inherits global");
}

// ===== Environment =====

#[test]
#[serial(listport_margin)]
fn apply_env_overrides_reads_margin() {
    let _guard = EnvGuard::new(MARGIN_ENV_VAR);
    env::set_var(MARGIN_ENV_VAR, "7");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.scroll_off_margin, 7);
}

#[test]
#[serial(listport_margin)]
fn apply_env_overrides_ignores_unparsable_margin() {
    let _guard = EnvGuard::new(MARGIN_ENV_VAR);
    env::set_var(MARGIN_ENV_VAR, "lots");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result, ResolvedConfig::default());
}

#[test]
#[serial(listport_margin)]
fn apply_env_overrides_no_change_when_unset() {
    let _guard = EnvGuard::new(MARGIN_ENV_VAR);

    let base = ResolvedConfig {
        scroll_off_margin: 9,
        ..Default::default()
    };
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(listport_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = write_temp_config("listport_explicit.toml", "scroll_off_margin = 1");
    let from_env = write_temp_config("listport_env.toml", "scroll_off_margin = 8");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("Should load")
        .expect("Should find explicit file");
    assert_eq!(
        config.scroll_off_margin,
        Some(1),
        "Should use explicit path, not LISTPORT_CONFIG"
    );

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(listport_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = write_temp_config("listport_env_only.toml", "live_highlight = true");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("Should load")
        .expect("Should find env file");
    assert_eq!(config.live_highlight, Some(true));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(listport_config)]
fn load_config_with_precedence_env_path_missing_is_not_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/listport/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn apply_cli_overrides_replace_list_sections() {
    let mut lists = HashMap::new();
    lists.insert(
        "menu".to_string(),
        ListConfigSection {
            scroll_off_margin: Some(0),
            live_highlight: Some(false),
        },
    );
    let base = ResolvedConfig {
        lists,
        ..Default::default()
    };

    let resolved = apply_cli_overrides(base, Some(4), Some(true));
    assert_eq!(
        resolved.list_config("menu"),
        ListConfig {
            scroll_off_margin: 4,
            live_highlight: true,
        },
        "CLI flags should win over per-list sections"
    );
}

#[test]
#[serial(listport_margin)]
fn precedence_chain_file_then_env_then_cli() {
    let _guard = EnvGuard::new(MARGIN_ENV_VAR);
    let file = ConfigFile {
        scroll_off_margin: Some(5),
        live_highlight: Some(true),
        ..Default::default()
    };

    env::set_var(MARGIN_ENV_VAR, "6");
    let resolved = apply_env_overrides(merge_config(Some(file)));
    assert_eq!(resolved.scroll_off_margin, 6, "Env should beat file");
    assert!(resolved.live_highlight, "File value kept when env is silent");

    let resolved = apply_cli_overrides(resolved, Some(1), None);
    assert_eq!(resolved.scroll_off_margin, 1, "CLI should beat env");
}
