use policy_adapter_factory::config::CONFIG_PATH_ENV_VAR;
use policy_adapter_factory::{AdapterError, AdapterRequest, ConfigResolver};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

fn resolver_for(dir: &TempDir, content: Option<&str>, vars: &[(&str, &str)]) -> ConfigResolver {
    let path = dir.path().join("connection_config.json");
    if let Some(content) = content {
        std::fs::write(&path, content).unwrap();
    }

    let mut env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    env.insert(
        CONFIG_PATH_ENV_VAR.to_string(),
        path.to_str().unwrap().to_string(),
    );
    ConfigResolver::with_env(Arc::new(env))
}

#[test]
fn test_full_request_ignores_config_file() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(
        &dir,
        Some(r#"{"Driver": "mysql", "Connection": "root:@tcp(127.0.0.1:3306)/", "DBSpecified": true}"#),
        &[],
    );

    let request = AdapterRequest::new("postgres", "host=localhost dbname=casbin", false);
    assert_eq!(resolver.resolve(request.clone()).unwrap(), request);
}

#[test]
fn test_empty_request_takes_config_triple() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(
        &dir,
        Some(
            r#"{
                "Driver": "mysql",
                "Connection": "$DB_USER:$DB_PASS@tcp(127.0.0.1:3306)/casbin",
                "Enforcer": "ignored",
                "DBSpecified": true
            }"#,
        ),
        &[("DB_USER", "root"), ("DB_PASS", "s3cret")],
    );

    let resolved = resolver.resolve(AdapterRequest::default()).unwrap();
    assert_eq!(
        resolved,
        AdapterRequest::new("mysql", "root:s3cret@tcp(127.0.0.1:3306)/casbin", true)
    );
}

#[test]
fn test_empty_request_drops_caller_db_specified_flag() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(&dir, Some(r#"{"Driver": "file", "Connection": "policy.csv"}"#), &[]);

    let resolved = resolver.resolve(AdapterRequest::new("", "", true)).unwrap();
    assert_eq!(resolved, AdapterRequest::new("file", "policy.csv", false));
}

#[test]
fn test_missing_config_file_yields_zero_request() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(&dir, None, &[]);

    let resolved = resolver.resolve(AdapterRequest::default()).unwrap();
    assert_eq!(resolved, AdapterRequest::default());
}

#[test]
fn test_unset_placeholder_becomes_empty() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(
        &dir,
        Some(r#"{"Driver": "mssql", "Connection": "host=$HOST;user=$USER"}"#),
        &[("HOST", "db1")],
    );

    let resolved = resolver.resolve(AdapterRequest::default()).unwrap();
    assert_eq!(resolved.connect_string, "host=db1;user=");
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(&dir, Some("{ this is not json"), &[]);

    let err = resolver.resolve(AdapterRequest::default()).unwrap_err();
    assert!(matches!(err, AdapterError::ConfigParse { .. }));
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(&dir, Some(r#"{"DBSpecified": "yes"}"#), &[]);

    let err = resolver.resolve(AdapterRequest::default()).unwrap_err();
    assert!(matches!(err, AdapterError::ConfigParse { .. }));
}

#[test]
fn test_config_path_pointing_at_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::with_env(Arc::new(HashMap::<String, String>::new()))
        .with_path(dir.path());

    let err = resolver.resolve(AdapterRequest::default()).unwrap_err();
    assert!(matches!(err, AdapterError::ConfigRead { .. }));
}

#[test]
fn test_config_file_is_reread_on_every_call() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_for(&dir, Some(r#"{"Driver": "mysql", "Connection": "a"}"#), &[]);
    assert_eq!(
        resolver.resolve(AdapterRequest::default()).unwrap().driver_name,
        "mysql"
    );

    std::fs::write(
        dir.path().join("connection_config.json"),
        r#"{"Driver": "postgres", "Connection": "b"}"#,
    )
    .unwrap();
    assert_eq!(
        resolver.resolve(AdapterRequest::default()).unwrap().driver_name,
        "postgres"
    );
}
