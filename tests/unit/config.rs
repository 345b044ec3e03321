use super::*;

#[test]
fn defaults_match_cli_defaults() {
    let cfg = RenderConfig::default();
    assert_eq!((cfg.width, cfg.height), (600, 300));
    assert_eq!(cfg.font_size, 48.0);
    assert_eq!(cfg.background, BackgroundKind::Pattern);
    assert_eq!(cfg.font_style.key(), "roboto_bold");
    assert!(!cfg.reveal && !cfg.animate);
    assert_eq!(cfg.output_dir, Path::new("images"));
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_bad_values() {
    let zero_w = RenderConfig {
        width: 0,
        ..Default::default()
    };
    let err = zero_w.validate().unwrap_err();
    assert!(err.to_string().contains("width and height must be positive"));

    for font_size in [0.0, -3.0, f32::NAN, f32::INFINITY, 1e9, MAX_FONT_SIZE + 1.0] {
        let cfg = RenderConfig {
            font_size,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(GlyphloomError::Validation(_))));
    }
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: RenderConfig =
        serde_json::from_str(r#"{"width": 320, "background": "perlin-s", "animate": true}"#)
            .unwrap();
    assert_eq!(cfg.width, 320);
    assert_eq!(cfg.height, 300);
    assert_eq!(cfg.background, BackgroundKind::PerlinSmooth);
    assert!(cfg.animate);
}

#[test]
fn json_rejects_unknown_keys_and_values() {
    assert!(serde_json::from_str::<RenderConfig>(r#"{"colour": "red"}"#).is_err());
    assert!(serde_json::from_str::<RenderConfig>(r#"{"background": "plaid"}"#).is_err());
    assert!(serde_json::from_str::<RenderConfig>(r#"{"font_style": "arial"}"#).is_err());
}

#[test]
fn from_path_reads_json_and_reports_missing_files() {
    let dir = std::env::temp_dir().join(format!("glyphloom_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("job.json");
    std::fs::write(&path, r#"{"font_style": "roboto_light", "reveal": true}"#).unwrap();

    let cfg = RenderConfig::from_path(&path).unwrap();
    assert_eq!(cfg.font_style.key(), "roboto_light");
    assert!(cfg.reveal);

    let err = RenderConfig::from_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, GlyphloomError::Other(_)), "{err}");

    std::fs::write(&path, "{not json").unwrap();
    let err = RenderConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, GlyphloomError::Validation(_)), "{err}");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_accepts_the_largest_font_size() {
    let cfg = RenderConfig {
        font_size: MAX_FONT_SIZE,
        ..Default::default()
    };
    cfg.validate().unwrap();
}
