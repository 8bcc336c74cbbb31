use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShapefieldError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShapefieldError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ShapefieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShapefieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
