//! Integration tests for `SeaOrmItemService` against a real PostgreSQL.
//!
//! These start a container through `test_utils::TestDatabase` and are
//! ignored by default; run them with `cargo test -- --ignored` when Docker
//! is available.

use domain_items::*;
use test_utils::{TestDataBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_round_trip() {
    let db = TestDatabase::new().await;
    let service = SeaOrmItemService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_get");

    let created = service
        .create(CreateItem {
            name: builder.name("item", "main"),
            description: Some("stored".into()),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, builder.name("item", "main"));
    assert_eq!(fetched.description.as_deref(), Some("stored"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_refreshes_updated_at_and_keeps_absent_fields() {
    let db = TestDatabase::new().await;
    let service = SeaOrmItemService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update");

    let created = service
        .create(CreateItem {
            name: builder.name("item", "before"),
            description: Some("kept".into()),
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateItem {
                name: Some(builder.name("item", "after")),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, builder.name("item", "after"));
    assert_eq!(updated.description.as_deref(), Some("kept"));
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_rows_are_not_found() {
    let db = TestDatabase::new().await;
    let service = SeaOrmItemService::new(db.connection());

    assert!(service.get_by_id(12345).await.unwrap().is_none());

    let err = service
        .update(12345, UpdateItem::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ItemError::NotFound(ref m) if m == "Item not found for update"));

    let err = service.remove(12345).await.unwrap_err();
    assert!(matches!(err, ItemError::NotFound(ref m) if m == "Item not found for deletion"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_remove_then_get_is_none_and_ids_not_reused() {
    let db = TestDatabase::new().await;
    let service = SeaOrmItemService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_remove");

    let first = service
        .create(CreateItem {
            name: builder.name("item", "first"),
            description: None,
        })
        .await
        .unwrap();

    let removed = service.remove(first.id).await.unwrap();
    assert_eq!(removed.id, first.id);
    assert!(service.get_by_id(first.id).await.unwrap().is_none());

    let second = service
        .create(CreateItem {
            name: builder.name("item", "second"),
            description: None,
        })
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_substring_filter() {
    let db = TestDatabase::new().await;
    db.truncate_items().await;
    let service = SeaOrmItemService::new(db.connection());

    for name in ["blue widget", "red widget", "gadget"] {
        service
            .create(CreateItem {
                name: name.to_string(),
                description: None,
            })
            .await
            .unwrap();
    }

    let widgets = service.list(Some("widget".into())).await.unwrap();
    assert_eq!(widgets.len(), 2);
    assert_eq!(service.list(None).await.unwrap().len(), 3);
    assert!(service.list(Some("gizmo".into())).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_treats_wildcards_literally() {
    let db = TestDatabase::new().await;
    let service = SeaOrmItemService::new(db.connection());

    for name in ["a_b", "axb", "50% off", "500 off"] {
        service
            .create(CreateItem {
                name: name.into(),
                description: None,
            })
            .await
            .unwrap();
    }

    let names = |items: Vec<Item>| items.into_iter().map(|i| i.name).collect::<Vec<_>>();

    assert_eq!(names(service.list(Some("_".into())).await.unwrap()), ["a_b"]);
    assert_eq!(names(service.list(Some("50%".into())).await.unwrap()), ["50% off"]);
    assert_eq!(service.list(Some("x".into())).await.unwrap().len(), 1);
}
