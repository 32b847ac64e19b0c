//! Contract Test: Mutations
//!
//! Constraints verified:
//! - Local state changes only after the service confirms
//! - Updates replace the local record with the service's copy, never duplicate it
//! - Failures keep prior state and surface a message
//! - Creating a contact does not touch an already loaded list

mod common;

use common::*;
use contacts_core::{
    ContactField, ContactForm, ContactId, ContactListController, ListEvent, SearchScope,
    ViewError,
};
use std::sync::Arc;

async fn loaded(
    repository: &Arc<MockRepository>,
) -> (
    ContactListController,
    tokio::sync::mpsc::Receiver<ListEvent>,
) {
    let (mut controller, events) =
        ContactListController::new(repository.clone(), &view_config(SearchScope::Collection))
            .expect("controller construction succeeds");
    controller.mount().await.expect("load succeeds");
    (controller, events)
}

#[tokio::test]
async fn delete_removes_contact_after_confirmation() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;

    controller.delete(&ContactId::new("t3")).await.unwrap();

    assert_eq!(repository.deleted_ids(), vec![ContactId::new("t3")]);
    assert_eq!(controller.contacts().len(), 5);
    assert!(controller.contacts().iter().all(|c| c.id.as_str() != "t3"));
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn delete_of_unknown_id_still_calls_service() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;
    let before = controller.contacts().to_vec();

    controller.delete(&ContactId::new("X")).await.unwrap();

    assert_eq!(repository.delete_calls(), 1);
    assert_eq!(controller.contacts(), before.as_slice());
}

#[tokio::test]
async fn failed_delete_keeps_collection() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;
    let before = controller.contacts().to_vec();
    repository.fail_mutations(true);

    let err = controller.delete(&ContactId::new("t3")).await.unwrap_err();

    assert!(matches!(err, ViewError::Mutation(_)));
    assert_eq!(controller.error(), Some(&err));
    assert_eq!(controller.contacts(), before.as_slice());

    controller.clear_error();
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn update_replaces_without_duplicating() {
    let mut records = six_contacts();
    records[2] = contact_at("42", "Alice", 3);
    let repository = Arc::new(MockRepository::new(records));
    let (mut controller, mut events) = loaded(&repository).await;
    while events.try_recv().is_ok() {}

    let form = controller
        .edit(&ContactId::new("42"))
        .expect("contact 42 is loaded");
    assert_eq!(form.value(ContactField::FullName), "Alice");
    form.set_field("fullName", "Alicia").unwrap();

    controller.submit_edit().await.unwrap();

    let matching: Vec<_> = controller
        .contacts()
        .iter()
        .filter(|c| c.id.as_str() == "42")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].full_name, "Alicia");
    assert_eq!(controller.contacts().len(), 6);
    assert!(controller.edit_form().is_none());

    assert!(matches!(events.try_recv(), Ok(ListEvent::EditOpened { .. })));
    assert!(matches!(events.try_recv(), Ok(ListEvent::Updated { id }) if id.as_str() == "42"));
}

#[tokio::test]
async fn update_keeps_position_in_list() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;

    controller
        .edit(&ContactId::new("t4"))
        .unwrap()
        .set(ContactField::Email, "new@example.com");
    controller.submit_edit().await.unwrap();

    // T6 T5 T4 ...: the edited record stays third
    assert_eq!(controller.contacts()[2].id.as_str(), "t4");
    assert_eq!(controller.contacts()[2].email, "new@example.com");
}

#[tokio::test]
async fn failed_update_keeps_form_open() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;
    let before = controller.contacts().to_vec();

    controller
        .edit(&ContactId::new("t1"))
        .unwrap()
        .set(ContactField::FullName, "Changed");
    repository.fail_mutations(true);

    let err = controller.submit_edit().await.unwrap_err();

    assert!(matches!(err, ViewError::Mutation(_)));
    let form = controller.edit_form().expect("form stays open");
    assert_eq!(form.error(), Some(&err));
    assert_eq!(form.value(ContactField::FullName), "Changed");
    assert_eq!(controller.contacts(), before.as_slice());
}

#[tokio::test]
async fn close_discards_edits() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;

    controller
        .edit(&ContactId::new("t2"))
        .unwrap()
        .set(ContactField::FullName, "Discarded");
    controller.close_edit();

    assert!(controller.edit_form().is_none());
    controller.submit_edit().await.unwrap();
    assert_eq!(repository.update_calls(), 0);
    assert!(controller.contacts().iter().all(|c| c.full_name != "Discarded"));
}

#[tokio::test]
async fn edit_requires_a_loaded_contact() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;

    assert!(controller.edit(&ContactId::new("missing")).is_none());
    assert!(controller.edit_form().is_none());
}

#[tokio::test]
async fn deleting_the_edited_contact_closes_the_form() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (mut controller, _events) = loaded(&repository).await;

    controller.edit(&ContactId::new("t5")).unwrap();
    controller.delete(&ContactId::new("t5")).await.unwrap();

    assert!(controller.edit_form().is_none());
}

#[tokio::test]
async fn create_does_not_alter_loaded_list() {
    let repository = Arc::new(MockRepository::new(six_contacts()));
    let (controller, _events) = loaded(&repository).await;

    let mut form = ContactForm::new();
    form.set_field("fullName", "Zed").unwrap();
    form.set_field("workProfile", "Designer").unwrap();
    form.set_field("contactNo", "5559999").unwrap();
    form.set_field("email", "zed@example.com").unwrap();

    let created = form.submit(repository.as_ref()).await.unwrap();

    assert_eq!(created.full_name, "Zed");
    for field in ContactField::ALL {
        assert_eq!(form.value(field), "");
    }
    assert_eq!(repository.create_calls(), 1);
    assert_eq!(repository.records().len(), 7);
    assert_eq!(controller.contacts().len(), 6);

    // A fresh controller sees it
    let (fresh, _events) = loaded(&repository).await;
    assert_eq!(fresh.contacts()[0].full_name, "Zed");
}

#[tokio::test]
async fn failed_create_keeps_fields_and_reports() {
    let repository = Arc::new(MockRepository::new(Vec::new()));
    repository.fail_mutations(true);

    let mut form = ContactForm::new();
    for field in ContactField::ALL {
        form.set(field, "x");
    }

    let err = form.submit(repository.as_ref()).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error adding contact. Please try again later."
    );
    assert_eq!(form.error(), Some(&err));
    assert_eq!(form.value(ContactField::Email), "x");
    assert!(repository.records().is_empty());
}

#[tokio::test]
async fn incomplete_create_sends_no_request() {
    let repository = Arc::new(MockRepository::new(Vec::new()));

    let mut form = ContactForm::new();
    form.set(ContactField::FullName, "Zed");
    form.set(ContactField::Email, "   ");

    let err = form.submit(repository.as_ref()).await.unwrap_err();

    assert_eq!(
        err,
        ViewError::Incomplete(vec![
            ContactField::WorkProfile,
            ContactField::ContactNo,
            ContactField::Email,
        ])
    );
    assert_eq!(repository.create_calls(), 0);
    assert_eq!(form.value(ContactField::FullName), "Zed");
}
