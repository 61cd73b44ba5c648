use form_core::config::FormConfig;
use form_core::SHORTY_BASE_URL_ENV;

use serial_test::serial;

/// **VALUE**: `SHORTY_BASE_URL` overrides the configured base URL.
///
/// **WHY THIS MATTERS**: Deployments point the form at their service through the
/// environment without editing the config file.
#[test]
#[serial]
fn given_env_base_url_when_overrides_applied_then_env_wins() {
    let mut config = FormConfig::default();
    config.service.base_url = Some("http://from-file:7070".to_string());

    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::set_var(SHORTY_BASE_URL_ENV, "https://from-env.example") };
    config.apply_env_overrides();
    unsafe { std::env::remove_var(SHORTY_BASE_URL_ENV) };

    assert_eq!(config.base_url(), "https://from-env.example");
}

/// **VALUE**: A blank variable does not wipe the configured value.
#[test]
#[serial]
fn given_blank_env_base_url_when_overrides_applied_then_file_value_kept() {
    let mut config = FormConfig::default();
    config.service.base_url = Some("http://from-file:7070".to_string());

    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::set_var(SHORTY_BASE_URL_ENV, "  ") };
    config.apply_env_overrides();
    unsafe { std::env::remove_var(SHORTY_BASE_URL_ENV) };

    assert_eq!(config.base_url(), "http://from-file:7070");
}
