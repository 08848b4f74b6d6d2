use crate::messages::{IMAGE_FAILED, USER_ADDED, duplicate_id};
use crate::tests::{dashboard, dashboard_with, names};
use crate::{DashboardError, UserDashboard};

use um_core::{ImageSource, NewUser, NotificationKind, PLACEHOLDER_IMAGE_URI, is_generated_id};
use um_db::{KeyValueStorage, MemoryStorage, USERS_KEY, UserRepository};

use std::collections::HashSet;
use std::sync::Arc;

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[tokio::test]
async fn given_no_id_and_no_image_when_create_then_generated_id_and_placeholder() {
    // Given
    let mut dash = dashboard();

    // When
    let created = dash
        .create(NewUser::new("Anna", "user", "anna@example.com", "555"))
        .await
        .unwrap();

    // Then
    assert!(is_generated_id(&created.id));
    assert_that!(created.image, eq(PLACEHOLDER_IMAGE_URI));
    assert_eq!(dash.users(), &[created]);
}

#[tokio::test]
async fn given_create_when_done_then_persisted_rendered_and_notified() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut dash = UserDashboard::open_with_seed(
        Arc::clone(&storage),
        crate::tests::RecordingNotifier::default(),
        crate::tests::ScriptedConfirmer::answering(true),
        crate::tests::RecordingRenderer::default(),
        1,
    )
    .unwrap();

    // When
    dash.create(NewUser::new("Anna", "user", "a@x", "").with_id("1"))
        .await
        .unwrap();

    // Then
    let stored = UserRepository::open(&*storage).unwrap();
    assert_eq!(stored.all(), dash.users());
    assert_eq!(
        dash.renderer().last_frame().map(|f| f.len()),
        Some(1)
    );
    assert_eq!(
        dash.notifier().toasts(),
        vec![(USER_ADDED.to_string(), NotificationKind::Success)]
    );
}

#[tokio::test]
async fn given_existing_users_when_create_then_appended_at_end() {
    let mut dash = dashboard();
    dash.create(NewUser::new("Anna", "user", "", "")).await.unwrap();
    dash.create(NewUser::new("Bob", "admin", "", "")).await.unwrap();

    dash.create(NewUser::new("Cleo", "user", "", "")).await.unwrap();

    assert_eq!(names(dash.users()), vec!["Anna", "Bob", "Cleo"]);
}

#[tokio::test]
async fn given_image_bytes_when_create_then_data_uri_stored() {
    let mut dash = dashboard();
    let image = ImageSource::Bytes {
        file_name: "avatar.png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };

    let created = dash
        .create(NewUser::new("Anna", "user", "", "").with_image(image))
        .await
        .unwrap();

    assert_that!(created.image, eq("data:image/png;base64,iVBORw=="));
}

#[tokio::test]
async fn given_missing_image_file_when_create_then_error_toast_and_store_untouched() {
    // Given
    let mut dash = dashboard();
    let image = ImageSource::file("/definitely/not/here.png");

    // When
    let result = dash
        .create(NewUser::new("Anna", "user", "", "").with_image(image))
        .await;

    // Then
    assert!(matches!(result, Err(DashboardError::Core { .. })));
    assert!(dash.users().is_empty());
    assert_eq!(
        dash.notifier().toasts(),
        vec![(IMAGE_FAILED.to_string(), NotificationKind::Error)]
    );
    assert_that!(dash.renderer().frame_count(), eq(0));
}

#[tokio::test]
async fn given_taken_id_when_create_with_same_id_then_rejected() {
    let mut dash = dashboard();
    dash.create(NewUser::new("Anna", "user", "", "").with_id("42"))
        .await
        .unwrap();

    let result = dash
        .create(NewUser::new("Impostor", "admin", "", "").with_id("42"))
        .await;

    assert!(result.is_err());
    assert_eq!(names(dash.users()), vec!["Anna"]);
    assert_eq!(
        dash.notifier().last(),
        Some((duplicate_id("42"), NotificationKind::Error))
    );
    assert_that!(duplicate_id("42"), eq("User id 42 already exists!"));
}

#[tokio::test]
async fn given_thousand_creates_without_id_then_all_ids_unique() {
    let mut dash = dashboard();

    for i in 0..1000 {
        dash.create(NewUser::new(format!("user{i}"), "user", "", ""))
            .await
            .unwrap();
    }

    let ids: HashSet<&str> = dash.users().iter().map(|u| u.id.as_str()).collect();
    assert_that!(ids.len(), eq(1000));
}

#[tokio::test]
async fn given_next_generated_id_already_stored_when_create_then_draws_another() {
    // Given: the first id seed 7 yields is already taken
    let mut rng = StdRng::seed_from_u64(7);
    let first_draw = um_core::generate_id_with(&mut rng);
    let storage = MemoryStorage::with_value(
        USERS_KEY,
        &format!(
            r#"[{{"id":"{first_draw}","name":"Old","role":"user","email":"","contact":"","image":""}}]"#
        ),
    );
    let mut dash = dashboard_with(storage, true);

    // When
    let created = dash.create(NewUser::new("New", "user", "", "")).await.unwrap();

    // Then
    assert_that!(created.id.as_str(), not(eq(first_draw.as_str())));
    assert!(is_generated_id(&created.id));
    assert_that!(dash.users().len(), eq(2));
}

#[tokio::test]
async fn given_empty_fields_when_create_then_accepted_as_is() {
    let storage = MemoryStorage::new();
    let mut dash = dashboard_with(storage, true);

    let created = dash.create(NewUser::new("", "", "", "")).await.unwrap();

    assert_that!(created.email, eq(""));
    assert_that!(dash.users().len(), eq(1));
}

#[test]
fn given_persisted_users_when_dashboard_opened_then_loaded() {
    let storage = MemoryStorage::with_value(
        USERS_KEY,
        r#"[{"id":"1","name":"Anna","role":"user","email":"","contact":"","image":""}]"#,
    );
    assert!(storage.get(USERS_KEY).unwrap().is_some());

    let dash = dashboard_with(storage, true);

    assert_eq!(names(dash.users()), vec!["Anna"]);
}
