use crate::EditForm;
use crate::tests::user;

#[test]
fn given_record_when_edit_form_built_then_prefilled_with_editing_id() {
    let record = user("123456", "Ann", "admin");

    let form = EditForm::from_record(&record);

    assert_eq!(form.editing_id, "123456");
    assert_eq!(form.name, "Ann");
    assert_eq!(form.role, "admin");
    assert_eq!(form.email, record.email);
    assert_eq!(form.contact, record.contact);
}

#[test]
fn given_unchanged_values_when_diff_then_patch_is_empty() {
    let form = EditForm::from_record(&user("1", "Ann", "admin"));

    let patch = form.diff(&form.name, &form.role, &form.email, &form.contact);

    assert!(patch.is_empty());
}

#[test]
fn given_changed_role_when_diff_then_patch_has_role_only() {
    let form = EditForm::from_record(&user("1", "Ann", "admin"));

    let patch = form.diff(&form.name, "user", &form.email, &form.contact);

    assert_eq!(patch.role.as_deref(), Some("user"));
    assert!(patch.name.is_none());
    assert!(patch.email.is_none());
    assert!(patch.contact.is_none());
}
