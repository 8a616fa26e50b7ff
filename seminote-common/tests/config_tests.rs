//! Integration tests for port resolution
//!
//! These tests mutate process environment variables, so they run
//! serially via `serial_test`.

use std::io::Write;

use serial_test::serial;

use seminote_common::config::resolve_port;

fn clear_env(service_env: &str) {
    std::env::remove_var(service_env);
    std::env::remove_var("SEMINOTE_CONFIG");
}

#[test]
#[serial]
fn env_variable_overrides_default() {
    clear_env("SEMINOTE_USER_PORT");
    std::env::set_var("SEMINOTE_USER_PORT", "9123");

    assert_eq!(resolve_port(None, "user", 8081), 9123);

    std::env::remove_var("SEMINOTE_USER_PORT");
}

#[test]
#[serial]
fn cli_argument_overrides_env_variable() {
    clear_env("SEMINOTE_USER_PORT");
    std::env::set_var("SEMINOTE_USER_PORT", "9123");

    assert_eq!(resolve_port(Some(7777), "user", 8081), 7777);

    std::env::remove_var("SEMINOTE_USER_PORT");
}

#[test]
#[serial]
fn malformed_env_value_falls_through_to_default() {
    clear_env("SEMINOTE_USER_PORT");
    std::env::set_var("SEMINOTE_USER_PORT", "concert-pitch");

    assert_eq!(resolve_port(None, "user", 8081), 8081);

    std::env::remove_var("SEMINOTE_USER_PORT");
}

#[test]
#[serial]
fn config_file_overrides_default() {
    clear_env("SEMINOTE_PAYMENT_PORT");

    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(file, "[ports]\npayment = 9555").expect("write temp config");
    std::env::set_var("SEMINOTE_CONFIG", file.path());

    assert_eq!(resolve_port(None, "payment", 8086), 9555);

    std::env::remove_var("SEMINOTE_CONFIG");
}

#[test]
#[serial]
fn env_variable_overrides_config_file() {
    clear_env("SEMINOTE_PAYMENT_PORT");

    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(file, "[ports]\npayment = 9555").expect("write temp config");
    std::env::set_var("SEMINOTE_CONFIG", file.path());
    std::env::set_var("SEMINOTE_PAYMENT_PORT", "9666");

    assert_eq!(resolve_port(None, "payment", 8086), 9666);

    std::env::remove_var("SEMINOTE_PAYMENT_PORT");
    std::env::remove_var("SEMINOTE_CONFIG");
}

#[test]
#[serial]
fn missing_config_entry_falls_through_to_default() {
    clear_env("SEMINOTE_CONTENT_PORT");

    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(file, "[ports]\nuser = 9001").expect("write temp config");
    std::env::set_var("SEMINOTE_CONFIG", file.path());

    assert_eq!(resolve_port(None, "content", 8082), 8082);

    std::env::remove_var("SEMINOTE_CONFIG");
}
