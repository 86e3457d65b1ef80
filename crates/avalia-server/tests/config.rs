use std::collections::HashMap;
use std::time::Duration;

use avalia_server::config::{LogFormat, ServerConfig};
use avalia_server::routes::document::content_disposition;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
    assert_eq!(config.session_ttl, Duration::from_secs(120 * 60));
    assert_eq!(config.max_sessions, 256);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.document_config.is_none());
}

#[test]
fn environment_overrides_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("AVALIA_BIND", "0.0.0.0:9000"),
        ("AVALIA_SESSION_TTL_MINUTES", "5"),
        ("AVALIA_MAX_SESSIONS", "3"),
        ("AVALIA_LOG_FORMAT", "json"),
        ("AVALIA_DOCUMENT_CONFIG", "/etc/avalia/document.json"),
    ]))
    .unwrap();

    assert_eq!(config.bind.port(), 9000);
    assert_eq!(config.session_ttl, Duration::from_secs(300));
    assert_eq!(config.max_sessions, 3);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(
        config.document_config.unwrap().to_str(),
        Some("/etc/avalia/document.json")
    );
}

#[test]
fn malformed_values_are_errors() {
    assert!(ServerConfig::from_lookup(lookup(&[("AVALIA_BIND", "nowhere")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("AVALIA_MAX_SESSIONS", "-1")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("AVALIA_LOG_FORMAT", "xml")])).is_err());
}

#[test]
fn oversized_session_ttl_is_an_error() {
    let result = ServerConfig::from_lookup(lookup(&[(
        "AVALIA_SESSION_TTL_MINUTES",
        "18446744073709551615",
    )]));
    assert!(result.is_err());
}

#[test]
fn disposition_keeps_utf8_name() {
    assert_eq!(
        content_disposition("Avaliacao_João.docx"),
        "attachment; filename=\"Avaliacao_Jo_o.docx\"; filename*=UTF-8''Avaliacao_Jo%C3%A3o.docx"
    );
}

#[test]
fn disposition_escapes_reserved_characters() {
    assert_eq!(
        content_disposition("Avaliacao_D'Ávila.docx"),
        "attachment; filename=\"Avaliacao_D'_vila.docx\"; filename*=UTF-8''Avaliacao_D%27%C3%81vila.docx"
    );
}
