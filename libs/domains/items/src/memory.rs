use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::{
    error::{ItemError, ItemResult, NOT_FOUND_FOR_DELETION, NOT_FOUND_FOR_UPDATE},
    models::{CreateItem, Item, UpdateItem},
    service::ItemService,
};

#[derive(Default)]
struct Store {
    last_id: i32,
    items: BTreeMap<i32, Item>,
}

/// In-process [`ItemService`] test double.
///
/// Ids start at 1 and are never reused, matching a `SERIAL` column.
/// Every call is counted; an [`unavailable`](Self::unavailable) instance
/// fails each one with a store error.
#[derive(Clone, Default)]
pub struct InMemoryItemService {
    store: Arc<RwLock<Store>>,
    calls: Arc<AtomicUsize>,
    unavailable: bool,
}

impl InMemoryItemService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose store is down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of service calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> ItemResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(ItemError::Database(DbErr::Custom(
                "connection to 10.0.0.5:5432 refused".into(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemService for InMemoryItemService {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        self.enter()?;
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let item = Item {
            id: store.last_id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        store.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn list(&self, name: Option<String>) -> ItemResult<Vec<Item>> {
        self.enter()?;
        let store = self.store.read().await;

        Ok(store
            .items
            .values()
            .filter(|item| name.as_deref().is_none_or(|n| item.name.contains(n)))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        self.enter()?;
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        self.enter()?;
        let mut store = self.store.write().await;
        let item = store
            .items
            .get_mut(&id)
            .ok_or_else(|| ItemError::NotFound(NOT_FOUND_FOR_UPDATE.to_string()))?;

        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = Some(description);
        }
        item.updated_at = Utc::now();

        Ok(item.clone())
    }

    async fn remove(&self, id: i32) -> ItemResult<Item> {
        self.enter()?;
        self.store
            .write()
            .await
            .items
            .remove(&id)
            .ok_or_else(|| ItemError::NotFound(NOT_FOUND_FOR_DELETION.to_string()))
    }
}
