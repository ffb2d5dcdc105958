use foliochat::config::Config;
use std::io::Write;
use std::time::Duration;

#[test]
fn constructed_default_matches_deserialized_default() {
    let config = Config::default();
    assert_eq!(config.provider.api_base, "https://api.openai.com/v1");
    assert_eq!(config.agent.model, "gpt-4o-mini");
    assert_eq!(config.endpoints.weather_base, "https://api.weatherapi.com/v1");
}

#[test]
fn empty_document_yields_full_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.agent.model, "gpt-4o-mini");
    assert_eq!(config.agent.max_tool_iterations, 10);
    assert_eq!(config.provider.api_base, "https://api.openai.com/v1");
    assert_eq!(
        config.endpoints.placeholder_base,
        "https://jsonplaceholder.typicode.com"
    );
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn partial_overrides_keep_remaining_defaults() {
    let config: Config = serde_json::from_str(
        r#"{
            "agent": { "max_tool_iterations": 3 },
            "http": { "request_timeout_secs": 5 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.agent.max_tool_iterations, 3);
    assert_eq!(config.agent.model, "gpt-4o-mini");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
}

#[test]
fn load_reads_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "provider": {{ "api_key": "sk-test", "api_base": "http://localhost:8080/v1" }},
            "endpoints": {{ "placeholder_base": "http://localhost:9090" }}
        }}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.provider.api_key, "sk-test");
    assert_eq!(config.provider.api_base, "http://localhost:8080/v1");
    assert_eq!(config.endpoints.placeholder_base, "http://localhost:9090");
}

#[test]
fn load_or_default_tolerates_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("nope.json")).unwrap();
    assert_eq!(config.agent.model, "gpt-4o-mini");
}

#[test]
fn load_or_default_rejects_a_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(Config::load_or_default(file.path()).is_err());
}
