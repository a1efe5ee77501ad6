//! Mutation coordinator: validation, writes, error surfacing and reloads

mod common;

use catalog_core::error::ApiError;
use catalog_core::notify::drain;
use catalog_core::{
    AuthorForm, BookForm, Catalog, ClientConfig, EntityKind, FormValues, ModalPhase, Outcome,
    RefreshPolicy,
};
use common::MockApi;
use serde_json::json;

async fn loaded(api: &MockApi) -> Catalog<MockApi> {
    let mut catalog = Catalog::new(api.clone(), ClientConfig::default());
    catalog.load().await;
    catalog
}

#[tokio::test]
async fn test_six_categories_rejected_before_request() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;
    let counts = catalog.cache().refresh_counts();

    catalog.open_create(EntityKind::Book);
    let outcome = catalog
        .submit(
            None,
            FormValues::Book(BookForm {
                name: "Too Many".to_string(),
                author_id: Some(1),
                category_ids: vec![1, 2, 3, 4, 5, 6],
            }),
        )
        .await;

    match outcome {
        Outcome::Invalid(errors) => assert!(errors.for_field("categoryIds").is_some()),
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(api.writes().is_empty());
    assert_eq!(catalog.cache().refresh_counts(), counts);

    let modal = catalog.modal(EntityKind::Book);
    assert_eq!(modal.phase(), ModalPhase::Open);
    assert!(modal.field_errors().for_field("categoryIds").is_some());
}

#[tokio::test]
async fn test_successful_create_reloads_everything_once() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;
    let mut notices = catalog.subscribe();
    let (tables, selections) = catalog.cache().refresh_counts();
    let book_calls = api.calls("GET books");

    catalog.open_create(EntityKind::Book);
    let outcome = catalog
        .submit(
            None,
            FormValues::Book(BookForm {
                name: "The Dispossessed".to_string(),
                author_id: Some(2),
                category_ids: vec![10],
            }),
        )
        .await;

    assert_eq!(outcome, Outcome::Saved);
    assert_eq!(api.calls("POST books"), 1);
    assert_eq!(
        catalog.cache().refresh_counts(),
        (tables + 1, selections + 1)
    );
    assert_eq!(api.calls("GET books"), book_calls + 2);

    let modal = catalog.modal(EntityKind::Book);
    assert_eq!(modal.phase(), ModalPhase::Closed);
    assert!(modal.editing().is_none());

    assert_eq!(catalog.cache().books.data().len(), 2);
    assert_eq!(
        catalog.cache().selections.current().books[1].author_name.as_deref(),
        Some("Le Guin")
    );
    let raised = drain(&mut notices);
    assert_eq!(raised[0].message, "Book added successfully!");
}

#[tokio::test]
async fn test_book_payload_sends_both_field_pairs() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;

    let record = catalog.find(EntityKind::Book, 100).unwrap();
    catalog.open_edit(record);
    catalog.submit_open(EntityKind::Book).await;

    let writes = api.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].method, "PUT");
    assert_eq!(writes[0].id, Some(100));
    insta::assert_json_snapshot!(writes[0].body, @r###"
    {
      "authorId": 1,
      "bookName": "Dune",
      "categoriesIds": [
        10
      ],
      "categoryIds": [
        10
      ],
      "name": "Dune"
    }
    "###);
}

#[tokio::test]
async fn test_failed_update_keeps_modal_open_with_message() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;
    let mut notices = catalog.subscribe();
    let counts = catalog.cache().refresh_counts();

    api.reject_writes(ApiError::new(
        400,
        Some("Bad Request".to_string()),
        json!({"name": "max 20 chars"}),
    ));

    let record = catalog.find(EntityKind::Author, 1).unwrap();
    catalog.open_edit(record);
    let values = FormValues::Author(AuthorForm {
        name: "Frank Herbert".to_string(),
    });
    catalog.modal_mut(EntityKind::Author).set_values(values.clone());

    let outcome = catalog.submit_open(EntityKind::Author).await;

    assert_eq!(outcome, Outcome::Failed("name: max 20 chars".to_string()));
    let modal = catalog.modal(EntityKind::Author);
    assert_eq!(modal.phase(), ModalPhase::Open);
    assert_eq!(modal.error(), Some("name: max 20 chars"));
    assert_eq!(modal.editing_id(), Some(1));
    assert_eq!(modal.values(), Some(&values));
    assert_eq!(catalog.cache().refresh_counts(), counts);

    let raised = drain(&mut notices);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].message, "Failed to save author: name: max 20 chars");
}

#[tokio::test]
async fn test_delete_reloads_after_success() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;
    let (tables, selections) = catalog.cache().refresh_counts();

    let outcome = catalog.remove(EntityKind::Category, 11).await;

    assert_eq!(outcome, Outcome::Saved);
    assert_eq!(
        catalog.cache().refresh_counts(),
        (tables + 1, selections + 1)
    );
    assert_eq!(catalog.cache().categories.data().len(), 1);
    assert_eq!(catalog.cache().selections.current().categories.len(), 1);
}

#[tokio::test]
async fn test_failed_delete_only_notifies() {
    let api = MockApi::seeded();
    let mut catalog = loaded(&api).await;
    let mut notices = catalog.subscribe();
    let counts = catalog.cache().refresh_counts();
    api.fail("DELETE books");

    let outcome = catalog.remove(EntityKind::Book, 100).await;

    assert_eq!(outcome, Outcome::Failed("boom".to_string()));
    assert_eq!(catalog.cache().refresh_counts(), counts);
    assert_eq!(catalog.cache().books.data().len(), 1);
    let raised = drain(&mut notices);
    assert_eq!(raised[0].message, "Failed to delete Book: boom");
}

#[tokio::test]
async fn test_manual_refresh_policy_skips_reload() {
    let api = MockApi::seeded();
    let config = ClientConfig {
        refresh_policy: RefreshPolicy::Manual,
        ..ClientConfig::default()
    };
    let mut catalog = Catalog::new(api.clone(), config);

    let outcome = catalog
        .submit(
            None,
            FormValues::Author(AuthorForm {
                name: "Banks".to_string(),
            }),
        )
        .await;

    assert!(outcome.is_saved());
    assert_eq!(catalog.cache().refresh_counts(), (0, 0));
    assert_eq!(api.calls("GET authors"), 0);
}
