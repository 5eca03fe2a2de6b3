// SPDX-License-Identifier: MPL-2.0
use iced_popup::config::{self, Config, GeneralConfig, TimelineSection};
use iced_popup::i18n::fluent::I18n;
use iced_popup::ui::notifications::{NotificationKind, TimelineConfig};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_default_messages_are_translated() {
    let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
    let translate = |key: &str| i18n.tr(key);

    assert_eq!(
        NotificationKind::Success.content().message(None, translate),
        "Your data stored successfully"
    );
    assert_eq!(
        NotificationKind::Error.content().message(None, translate),
        "Your data removed from DB"
    );
    assert_eq!(
        NotificationKind::Error
            .content()
            .message(Some("Disk full"), translate),
        "Disk full"
    );
}

#[test]
fn test_timeline_section_round_trips_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        timeline: TimelineSection {
            appear_delay_ms: Some(50),
            collapse_delay_ms: Some(500),
            ..TimelineSection::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let timeline = config::load_from_path(&path)
        .expect("Failed to load config from path")
        .timeline_config();

    assert_eq!(
        timeline,
        TimelineConfig {
            appear_delay_ms: 50,
            collapse_delay_ms: 500,
            ..TimelineConfig::default()
        }
    );
}
