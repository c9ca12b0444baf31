use super::*;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5050);
    assert_eq!(config.allowed_origin, None);
    assert!(config.bind_addr().is_ok());
}

#[test]
fn test_partial_toml_overrides_defaults() {
    let config: ServerConfig = toml::from_str("port = 8080\n").unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_full_toml() {
    let config: ServerConfig = toml::from_str(
        "host = \"0.0.0.0\"\nport = 9000\nallowed_origin = \"http://localhost:3000\"\n",
    )
    .unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9000);
    assert_eq!(
        config.allowed_origin.as_deref(),
        Some("http://localhost:3000")
    );
}

#[test]
fn test_unknown_key_is_rejected() {
    let result: Result<ServerConfig, _> = toml::from_str("listen_port = 5050\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_bind_addr() {
    let config = ServerConfig {
        host: "not a host".to_string(),
        port: 5050,
        allowed_origin: None,
    };
    assert!(config.bind_addr().is_err());
}
