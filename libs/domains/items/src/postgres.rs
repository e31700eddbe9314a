use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ItemError, ItemResult, NOT_FOUND_FOR_DELETION, NOT_FOUND_FOR_UPDATE},
    models::{CreateItem, Item, UpdateItem},
    service::ItemService,
};

/// [`ItemService`] backed by PostgreSQL through Sea-ORM.
#[derive(Clone)]
pub struct SeaOrmItemService {
    db: DatabaseConnection,
}

impl SeaOrmItemService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemService for SeaOrmItemService {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn list(&self, name: Option<String>) -> ItemResult<Vec<Item>> {
        let mut query = entity::Entity::find();

        if let Some(name) = name {
            query = query.filter(entity::Column::Name.like(contains_pattern(&name)));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        let mut active_model = entity::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(Some(description));
        }

        let model = active_model
            .update(&self.db)
            .await
            .map_err(|e| ItemError::from_missing_record(e, NOT_FOUND_FOR_UPDATE))?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn remove(&self, id: i32) -> ItemResult<Item> {
        let not_found = || ItemError::NotFound(NOT_FOUND_FOR_DELETION.to_string());

        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ItemError::from_missing_record(e, NOT_FOUND_FOR_DELETION))?
            .ok_or_else(not_found)?;

        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ItemError::from_missing_record(e, NOT_FOUND_FOR_DELETION))?;

        // Deleted concurrently between the lookup and the delete
        if result.rows_affected == 0 {
            return Err(not_found());
        }

        tracing::info!(item_id = id, "Deleted item");
        Ok(model.into())
    }
}

/// `LIKE` pattern matching `needle` literally anywhere in the column.
fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
