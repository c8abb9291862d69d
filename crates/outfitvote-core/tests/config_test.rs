use outfitvote_core::config::defaults;
use outfitvote_core::{OutfitConfig, OutfitError};

#[test]
fn defaults_match_simulated_latencies() {
    let config = OutfitConfig::default();
    assert_eq!(config.upload.delay_ms, 1_500);
    assert_eq!(config.composer.save_delay_ms, 1_000);
    assert_eq!(config.upload.max_image_bytes, 10 * 1024 * 1024);
    assert_eq!(
        config.voting.share_base_url,
        defaults::DEFAULT_SHARE_BASE_URL
    );
    assert!(config.seed_mock_data);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = OutfitConfig::from_toml_str(
        r#"
        seed_mock_data = false

        [upload]
        delay_ms = 10
        "#,
    )
    .unwrap();

    assert_eq!(config.upload.delay_ms, 10);
    assert_eq!(
        config.upload.max_image_bytes,
        defaults::DEFAULT_MAX_IMAGE_BYTES
    );
    assert_eq!(
        config.composer.save_delay_ms,
        defaults::DEFAULT_SAVE_DELAY_MS
    );
    assert!(!config.seed_mock_data);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(
        OutfitConfig::from_toml_str("").unwrap(),
        OutfitConfig::default()
    );
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = OutfitConfig::from_toml_str("[upload\ndelay_ms = ").unwrap_err();
    assert!(matches!(err, OutfitError::Config(_)));
    assert!(!err.is_user_input());
}

#[test]
fn toml_round_trip() {
    let config = OutfitConfig::instant();
    let rendered = config.to_toml_string().unwrap();
    assert_eq!(OutfitConfig::from_toml_str(&rendered).unwrap(), config);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = OutfitConfig::load("/definitely/not/here/outfitvote.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn instant_config_has_no_latency() {
    let config = OutfitConfig::instant();
    assert!(config.upload.delay().is_zero());
    assert!(config.composer.save_delay().is_zero());
    assert!(!config.seed_mock_data);
}
