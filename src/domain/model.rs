use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection defaults read from the local config file.
///
/// Keys match case-insensitively and a repeated key overwrites the earlier
/// one. A `null` value leaves the field at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Connection")]
    pub connection: String,
    /// Not used when building adapters.
    #[serde(rename = "Enforcer")]
    pub enforcer: String,
    #[serde(rename = "DBSpecified")]
    pub db_specified: bool,
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConfigurationVisitor)
    }
}

struct ConfigurationVisitor;

impl<'de> Visitor<'de> for ConfigurationVisitor {
    type Value = Configuration;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a connection config object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Configuration, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = Configuration::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("Driver") {
                Some(&mut config.driver)
            } else if key.eq_ignore_ascii_case("Connection") {
                Some(&mut config.connection)
            } else if key.eq_ignore_ascii_case("Enforcer") {
                Some(&mut config.enforcer)
            } else {
                None
            };

            if let Some(slot) = slot {
                if let Some(value) = map.next_value::<Option<String>>()? {
                    *slot = value;
                }
            } else if key.eq_ignore_ascii_case("DBSpecified") {
                if let Some(value) = map.next_value::<Option<bool>>()? {
                    config.db_specified = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(config)
    }
}

/// Caller-supplied adapter parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRequest {
    pub driver_name: String,
    pub connect_string: String,
    pub db_specified: bool,
}

impl AdapterRequest {
    pub fn new(
        driver_name: impl Into<String>,
        connect_string: impl Into<String>,
        db_specified: bool,
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            connect_string: connect_string.into(),
            db_specified,
        }
    }

    /// True when the caller left both the driver and the connection string out.
    pub fn is_unset(&self) -> bool {
        self.driver_name.is_empty() && self.connect_string.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Driver {
    File,
    Delegated(String),
}

impl Driver {
    pub const FILE: &'static str = "file";

    pub fn from_name(name: &str) -> Self {
        if name == Self::FILE {
            Driver::File
        } else {
            Driver::Delegated(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Driver::File => Self::FILE,
            Driver::Delegated(name) => name,
        }
    }
}

/// One policy line, e.g. `p, alice, data1, read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRule {
    pub ptype: String,
    pub values: Vec<String>,
}

impl PolicyRule {
    pub fn new<I, S>(ptype: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ptype: ptype.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_reads_documented_keys() {
        let cfg: Configuration = serde_json::from_str(
            r#"{"Driver": "mysql", "Connection": "root:@tcp(127.0.0.1:3306)/", "Enforcer": "rbac", "DBSpecified": true}"#,
        )
        .unwrap();

        assert_eq!(cfg.driver, "mysql");
        assert_eq!(cfg.connection, "root:@tcp(127.0.0.1:3306)/");
        assert_eq!(cfg.enforcer, "rbac");
        assert!(cfg.db_specified);
    }

    #[test]
    fn test_configuration_missing_keys_default() {
        let cfg: Configuration = serde_json::from_str(r#"{"driver": "file"}"#).unwrap();
        assert_eq!(
            cfg,
            Configuration {
                driver: "file".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_configuration_keys_ignore_case() {
        let cfg: Configuration = serde_json::from_str(
            r#"{"DRIVER": "mysql", "CONNECTION": "x", "enforcer": "rbac", "dbspecified": true}"#,
        )
        .unwrap();

        assert_eq!(
            cfg,
            Configuration {
                driver: "mysql".to_string(),
                connection: "x".to_string(),
                enforcer: "rbac".to_string(),
                db_specified: true,
            }
        );
    }

    #[test]
    fn test_configuration_last_duplicate_key_wins() {
        let cfg: Configuration =
            serde_json::from_str(r#"{"Driver": "mysql", "driver": "postgres"}"#).unwrap();
        assert_eq!(cfg.driver, "postgres");
    }

    #[test]
    fn test_configuration_null_field_keeps_default() {
        let cfg: Configuration = serde_json::from_str(
            r#"{"Driver": "mysql", "Connection": null, "DBSpecified": null, "Extra": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(cfg.driver, "mysql");
        assert_eq!(cfg.connection, "");
        assert!(!cfg.db_specified);
    }

    #[test]
    fn test_configuration_wrong_value_type_fails() {
        assert!(serde_json::from_str::<Configuration>(r#"{"DBSpecified": "yes"}"#).is_err());
        assert!(serde_json::from_str::<Configuration>(r#"["mysql"]"#).is_err());
    }

    #[test]
    fn test_driver_from_name() {
        assert_eq!(Driver::from_name("file"), Driver::File);
        assert_eq!(
            Driver::from_name("postgres"),
            Driver::Delegated("postgres".to_string())
        );
        // Exact match only.
        assert_eq!(Driver::from_name("File"), Driver::Delegated("File".to_string()));
        assert_eq!(Driver::from_name("").name(), "");
    }
}
