use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Storage-agnostic item operations.
///
/// Implementations translate their store's "record missing" failures into
/// [`ItemError::NotFound`](crate::ItemError::NotFound) for `update` and
/// `remove`; every other store failure is returned as
/// [`ItemError::Database`](crate::ItemError::Database).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Store a new item and return it with its id and timestamps
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// All items, or those whose name contains `name`
    async fn list(&self, name: Option<String>) -> ItemResult<Vec<Item>>;

    /// `None` when no item has this id
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Item>;

    /// Delete and return the removed item
    async fn remove(&self, id: i32) -> ItemResult<Item>;
}

#[async_trait]
impl<S: ItemService + ?Sized> ItemService for Arc<S> {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        (**self).create(input).await
    }

    async fn list(&self, name: Option<String>) -> ItemResult<Vec<Item>> {
        (**self).list(name).await
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        (**self).get_by_id(id).await
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        (**self).update(id, input).await
    }

    async fn remove(&self, id: i32) -> ItemResult<Item> {
        (**self).remove(id).await
    }
}
