//! TOML parsing into a generic value tree or a caller-chosen type

use serde::de::DeserializeOwned;

use super::file::ConfigError;

/// Parse TOML text into an ordered table of generic values.
///
/// The whole document is parsed eagerly; the first grammar error aborts with
/// [`ConfigError::Parse`] and no partial table is returned.
pub fn parse_config(text: &str) -> Result<toml::Table, ConfigError> {
    let table: toml::Table = toml::from_str(text)?;
    Ok(table)
}

/// Parse TOML text directly into a concrete type.
///
/// Fails with [`ConfigError::Parse`] both on grammar errors and when the
/// document does not have the shape `T` expects.
pub fn parse_config_as<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use toml::Value;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Nix {
        channel: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Replit {
        run: String,
        #[serde(default)]
        hidden: Vec<String>,
        nix: Nix,
    }

    #[test]
    fn test_parse_scalars() {
        let table = parse_config(
            r#"
name = "demo"
port = 8080
ratio = 0.5
enabled = true
"#,
        )
        .unwrap();

        assert_eq!(table["name"], Value::String("demo".into()));
        assert_eq!(table["port"], Value::Integer(8080));
        assert_eq!(table["ratio"], Value::Float(0.5));
        assert_eq!(table["enabled"], Value::Boolean(true));
    }

    #[test]
    fn test_parse_section() {
        let table = parse_config("[section]\nkey = \"value\"\n").unwrap();

        let section = table["section"].as_table().unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section["key"].as_str(), Some("value"));
    }

    #[test]
    fn test_parse_nested_tables_and_arrays() {
        let table = parse_config(
            r#"
modules = ["rust-stable", "nodejs-20"]

[deployment]
run = ["cargo", "run"]

[[ports]]
localPort = 3000
externalPort = 80
"#,
        )
        .unwrap();

        assert_eq!(table["modules"].as_array().unwrap().len(), 2);
        assert_eq!(
            table["deployment"]["run"].as_array().unwrap()[0].as_str(),
            Some("cargo")
        );
        let ports = table["ports"].as_array().unwrap();
        assert_eq!(ports[0]["localPort"].as_integer(), Some(3000));
    }

    #[test]
    fn test_parse_preserves_source_order() {
        let table = parse_config("zeta = 1\nalpha = 2\nmid = 3\n").unwrap();

        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty_document() {
        let table = parse_config("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_unterminated_string() {
        let result = parse_config("run = \"cargo run\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_duplicate_key() {
        let result = parse_config("run = \"a\"\nrun = \"b\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_malformed_table_header() {
        let result = parse_config("[section\nkey = 1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_round_trip_preserves_keys_and_scalars() {
        let source = r#"
run = "cargo run"
language = "rust"
hidden = ["target", ".cargo"]

[nix]
channel = "stable-24_05"

[env]
PORT = 3000
DEBUG = false
"#;
        let parsed = parse_config(source).unwrap();
        let reserialized = toml::to_string(&parsed).unwrap();
        let reparsed = parse_config(&reserialized).unwrap();

        assert_eq!(parsed, reparsed);
        let keys: Vec<_> = reparsed.keys().collect();
        assert_eq!(keys, ["run", "language", "hidden", "nix", "env"]);
    }

    #[test]
    fn test_parse_config_as_concrete_type() {
        let config: Replit = parse_config_as(
            r#"
run = "cargo run"

[nix]
channel = "stable-24_05"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Replit {
                run: "cargo run".into(),
                hidden: vec![],
                nix: Nix {
                    channel: "stable-24_05".into()
                },
            }
        );
    }

    #[test]
    fn test_parse_config_as_shape_mismatch() {
        let result: Result<Replit, _> = parse_config_as("run = 42\n[nix]\nchannel = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
