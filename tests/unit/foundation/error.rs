use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphloomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlyphloomError::asset_load("x")
            .to_string()
            .contains("font asset error:")
    );
    assert!(
        GlyphloomError::face_creation("x")
            .to_string()
            .contains("font face error:")
    );
    assert!(
        GlyphloomError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphloomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
