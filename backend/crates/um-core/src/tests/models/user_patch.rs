use crate::{ImageSource, UserPatch};

#[test]
fn test_default_patch_is_empty() {
    assert!(UserPatch::default().is_empty());
}

#[test]
fn test_patch_with_any_field_is_not_empty() {
    assert!(!UserPatch::default().name("B").is_empty());
    assert!(!UserPatch::default().role("user").is_empty());
    assert!(!UserPatch::default().email("b@x").is_empty());
    assert!(!UserPatch::default().contact("2").is_empty());
    assert!(
        !UserPatch::default()
            .image(ImageSource::file("avatar.png"))
            .is_empty()
    );
}
