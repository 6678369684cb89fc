use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MuxuError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MuxuError::asset("x").to_string().contains("asset error:"));
    assert!(
        MuxuError::checkout("x")
            .to_string()
            .contains("checkout error:")
    );
    assert!(MuxuError::contact("x").to_string().contains("contact error:"));
    assert!(
        MuxuError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MuxuError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
