use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixmatrixError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixmatrixError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        PixmatrixError::font_not_found("comic-sans").to_string(),
        "unknown font: comic-sans"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixmatrixError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
