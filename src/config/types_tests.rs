//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_clipboard_config_default() {
    let config = ClipboardConfig::default();
    assert_eq!(config.backend, ClipboardBackend::Auto);
}

#[test]
fn test_parse_auto_backend() {
    let toml = r#"
[clipboard]
backend = "auto"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_parse_system_backend() {
    let toml = r#"
[clipboard]
backend = "system"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::System);
}

#[test]
fn test_parse_osc52_backend() {
    let toml = r#"
[clipboard]
backend = "osc52"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_unknown_sections_are_ignored() {
    let toml = r#"
[theme]
name = "galaxy"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
}

// Feature: config-system, Property 1: Valid backend parsing
// For any valid clipboard backend value ("auto", "system", or "osc52") in a TOML config file,
// parsing the config should successfully extract and store that backend preference.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
        let toml_content = format!(r#"
[clipboard]
backend = "{}"
"#, backend);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse valid backend: {}", backend);

        let expected = match backend {
            "auto" => ClipboardBackend::Auto,
            "system" => ClipboardBackend::System,
            "osc52" => ClipboardBackend::Osc52,
            _ => unreachable!(),
        };

        prop_assert_eq!(config.unwrap().clipboard.backend, expected);
    }
}

// Feature: config-system, Property 2: Missing fields use defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_fields_use_defaults(
        include_clipboard_section in prop::bool::ANY,
        include_backend_field in prop::bool::ANY
    ) {
        let toml_content = if !include_clipboard_section {
            String::new()
        } else if !include_backend_field {
            "[clipboard]\n".to_string()
        } else {
            "[clipboard]\nbackend = \"system\"\n".to_string()
        };

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

        let config = config.unwrap();
        if !include_clipboard_section || !include_backend_field {
            prop_assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        } else {
            prop_assert_eq!(config.clipboard.backend, ClipboardBackend::System);
        }
    }
}
