use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CollageError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        CollageError::surface("x")
            .to_string()
            .contains("surface error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CollageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
