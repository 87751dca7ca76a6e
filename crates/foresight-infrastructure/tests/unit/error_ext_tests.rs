//! Error context extension tests

use foresight_domain::error::Error;
use foresight_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_is_configuration_error() {
    let err = failing_io().context("Failed to read preset").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().contains("Failed to read preset: missing"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::io::Result<u8> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 7);

    let err = failing_io()
        .with_context(|| format!("Failed to open {}", "foresight.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to open foresight.toml"));
}

#[test]
fn test_io_context_is_io_error() {
    let err = failing_io().io_context("Failed to write config file").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
