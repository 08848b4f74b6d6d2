use crate::tests::user;
use crate::{NewUser, PLACEHOLDER_IMAGE_URI, UserPatch, UserRecord};

use googletest::prelude::*;

#[test]
fn given_patch_with_name_only_when_merged_then_other_fields_preserved() {
    // Given
    let original = UserRecord {
        id: "1".into(),
        name: "A".into(),
        role: "admin".into(),
        email: "a@x".into(),
        contact: "".into(),
        image: PLACEHOLDER_IMAGE_URI.into(),
    };

    // When
    let updated = original.merged(&UserPatch::default().name("B"), None);

    // Then
    assert_that!(updated.id, eq("1"));
    assert_that!(updated.name, eq("B"));
    assert_that!(updated.role, eq("admin"));
    assert_that!(updated.email, eq("a@x"));
    assert_that!(updated.image, eq(PLACEHOLDER_IMAGE_URI));
}

#[test]
fn given_new_image_when_merged_then_image_replaced() {
    let original = user("42", "Ann", "admin");

    let updated = original.merged(&UserPatch::default(), Some("data:image/png;base64,AA==".into()));

    assert_that!(updated.image, eq("data:image/png;base64,AA=="));
    assert_that!(updated.name, eq("Ann"));
}

#[test]
fn given_empty_patch_when_merged_then_record_unchanged() {
    let original = user("42", "Ann", "admin");

    let updated = original.merged(&UserPatch::default(), None);

    assert_eq!(updated, original);
}

#[test]
fn given_new_user_when_from_new_then_fields_copied() {
    let input = NewUser::new("X", "user", "x@y", "1");

    let record = UserRecord::from_new(input, "123456".into(), PLACEHOLDER_IMAGE_URI.into());

    assert_that!(record.id, eq("123456"));
    assert_that!(record.name, eq("X"));
    assert_that!(record.role, eq("user"));
    assert_that!(record.email, eq("x@y"));
    assert_that!(record.contact, eq("1"));
}

#[test]
fn given_record_when_serialized_then_uses_flat_six_key_object() {
    let record = user("123456", "Ann", "admin");

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    let object = json.as_object().unwrap();

    assert_that!(object.len(), eq(6));
    for key in ["id", "name", "role", "email", "contact", "image"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
}

#[test]
fn given_record_missing_a_field_when_deserialized_then_fails() {
    let json = r#"{"id":"1","name":"A","role":"admin","email":"a@x","contact":""}"#;

    let result = serde_json::from_str::<UserRecord>(json);

    assert!(result.is_err());
}
