use super::*;
use crate::color::rgba::Color;

#[test]
fn empty_document_yields_defaults() {
    let cfg = EngineConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, EngineConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let json = r##"{
        "wave": { "bleed_radius": 0.5 },
        "mask": { "untouched_sentinel": true },
        "color": { "solid": "#00ff00" }
    }"##;
    let cfg = EngineConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.wave.bleed_radius, 0.5);
    assert_eq!(cfg.wave.width, WaveParams::default().width);
    assert!(cfg.mask.untouched_sentinel);
    assert_eq!(cfg.color, WaveColor::Solid(Color::rgb(0.0, 1.0, 0.0)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EngineConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, WaveError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = EngineConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn validate_delegates_to_wave_params() {
    let cfg = EngineConfig {
        wave: WaveParams {
            velocity_per_ms: -1.0,
            ..WaveParams::default()
        },
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());
}
