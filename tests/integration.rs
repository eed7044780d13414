// SPDX-License-Identifier: MPL-2.0
use alok_site::app::config::{self, Config, ContactBackend};
use alok_site::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("form-submit"), "Send message");

    let mut norwegian = loaded;
    norwegian.general.language = Some("nb-NO".to_string());
    config::save_to_path(&norwegian, &path).expect("Failed to rewrite config file");

    let reloaded = config::load_from_path(&path).expect("Failed to reload config");
    let i18n = I18n::new(None, &reloaded);
    assert_eq!(i18n.current_locale().to_string(), "nb-NO");
    assert_eq!(i18n.tr("form-submit"), "Send melding");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("nb-NO".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_contact_section_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.contact.backend = ContactBackend::Resend;
    config.contact.recipient = Some("kontor@alok.no".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.contact.backend, ContactBackend::Resend);
    assert_eq!(loaded.contact.recipient(), "kontor@alok.no");
    assert_eq!(loaded.contact.sender(), config::DEFAULT_SENDER);
}

#[test]
fn test_corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[contact\nbackend = 3")
        .expect("Failed to write corrupt config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
