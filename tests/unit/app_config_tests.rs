/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use log::LevelFilter;
use capbridge::app_config::{Config, LogLevel};
use capbridge::formats::CaptionFormat;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.default_language, "en-US");
    assert!(config.track_languages.is_empty());
    assert_eq!(config.output_format, CaptionFormat::Srt);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fromJsonStr_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config = Config::from_json_str(r#"{ "default_language": "fr-FR", "log_level": "debug" }"#)?;

    assert_eq!(config.default_language, "fr-FR");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.output_format, CaptionFormat::Srt);
    assert!(config.track_languages.is_empty());
    Ok(())
}

#[test]
fn test_fromJsonStr_withUnknownFormat_shouldFail() {
    assert!(Config::from_json_str(r#"{ "output_format": "dfxp" }"#).is_err());
    assert!(Config::from_json_str("not json").is_err());
}

#[test]
fn test_fromFile_withWrittenConfig_shouldLoadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "default_language": "en", "track_languages": ["fr", "de"], "output_format": "srt" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.default_language, "en");
    assert_eq!(config.track_languages, vec!["fr".to_string(), "de".to_string()]);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = Config::from_file(temp_dir.path().join("missing.json"));

    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("Failed to open config file"));
    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid default language
    config.default_language = "".to_string();
    assert!(config.validate().is_err());
    config.default_language = "123".to_string();
    assert!(config.validate().is_err());
    config.default_language = "en-US".to_string();

    // Invalid track language
    config.track_languages = vec!["fr-FR".to_string(), "??".to_string()];
    assert!(config.validate().is_err());

    // Duplicate keys
    config.track_languages = vec!["en-US".to_string()];
    assert!(config.validate().is_err());
    config.track_languages = vec!["fr".to_string(), "fr".to_string()];
    assert!(config.validate().is_err());

    config.track_languages = vec!["fr".to_string(), "de".to_string()];
    assert!(config.validate().is_ok());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

#[test]
fn test_config_serialization_shouldUseLowercaseEnums() -> Result<()> {
    let json = serde_json::to_string(&Config::default())?;

    assert!(json.contains(r#""output_format":"srt""#));
    assert!(json.contains(r#""log_level":"info""#));
    Ok(())
}
