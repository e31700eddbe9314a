use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{ErrorResponse, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemResult, NOT_FOUND};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};
use crate::service::ItemService;

/// OpenAPI documentation for the items routes
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(Item, CreateItem, UpdateItem, ItemFilter, ErrorResponse)),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Item routes, relative to wherever they are nested (the service uses `/items`).
pub fn router<S: ItemService + 'static>(service: S) -> Router {
    Router::new()
        .route("/", get(list_items::<S>).post(create_item::<S>))
        .route(
            "/{id}",
            get(get_item::<S>)
                .put(update_item::<S>)
                .delete(delete_item::<S>),
        )
        .with_state(Arc::new(service))
}

/// List items, optionally filtered by name
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn list_items<S: ItemService>(
    State(service): State<Arc<S>>,
    Query(filter): Query<ItemFilter>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list(filter.name).await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn create_item<S: ItemService>(
    State(service): State<Arc<S>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn get_item<S: ItemService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> ItemResult<Response> {
    let response = match service.get_by_id(id).await? {
        Some(item) => Json(item).into_response(),
        None => (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOT_FOUND))).into_response(),
    };
    Ok(response)
}

/// Update an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid payload or id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found for update", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn update_item<S: ItemService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found for deletion", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn delete_item<S: ItemService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> ItemResult<StatusCode> {
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ItemError, NOT_FOUND_FOR_DELETION, NOT_FOUND_FOR_UPDATE};
    use crate::service::MockItemService;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::UNCLASSIFIED_MESSAGE;
    use chrono::Utc;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn item(id: i32, name: &str) -> Item {
        let now = Utc::now();
        Item {
            id,
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    async fn send(mock: MockItemService, request: Request<Body>) -> (StatusCode, Value) {
        let response = router(mock).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_existing_item() {
        let mut mock = MockItemService::new();
        mock.expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(item(id, "widget"))));

        let (status, body) = send(mock, get("/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "widget");
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_get_missing_item_writes_404() {
        let mut mock = MockItemService::new();
        mock.expect_get_by_id().times(1).returning(|_| Ok(None));

        let (status, body) = send(mock, get("/404")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Item not found"}));
    }

    #[tokio::test]
    async fn test_get_non_integer_id_skips_service() {
        let mut mock = MockItemService::new();
        mock.expect_get_by_id().never();

        let (status, _) = send(mock, get("/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let mut mock = MockItemService::new();
        mock.expect_create()
            .withf(|input| input.name == "widget" && input.description.as_deref() == Some("blue"))
            .times(1)
            .returning(|input| {
                let mut created = item(1, &input.name);
                created.description = input.description;
                Ok(created)
            });

        let (status, body) = send(
            mock,
            json_request("POST", "/", json!({"name": "widget", "description": "blue"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["description"], "blue");
    }

    #[tokio::test]
    async fn test_create_empty_name_skips_service() {
        let mut mock = MockItemService::new();
        mock.expect_create().never();

        let (status, body) = send(mock, json_request("POST", "/", json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_list_passes_name_filter() {
        let mut mock = MockItemService::new();
        mock.expect_list()
            .with(eq(Some("wid".to_string())))
            .times(1)
            .returning(|_| Ok(vec![item(1, "widget"), item(2, "widgetry")]));

        let (status, body) = send(mock, get("/?name=wid")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_without_filter() {
        let mut mock = MockItemService::new();
        mock.expect_list()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![]));

        let (status, body) = send(mock, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_update_missing_forwards_not_found() {
        let mut mock = MockItemService::new();
        mock.expect_update()
            .times(1)
            .returning(|_, _| Err(ItemError::NotFound(NOT_FOUND_FOR_UPDATE.to_string())));

        let (status, body) =
            send(mock, json_request("PUT", "/9", json!({"name": "renamed"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Item not found for update"}));
    }

    #[tokio::test]
    async fn test_update_returns_item() {
        let mut mock = MockItemService::new();
        mock.expect_update()
            .withf(|id, input| *id == 3 && input.name.as_deref() == Some("renamed"))
            .times(1)
            .returning(|id, input| Ok(item(id, input.name.as_deref().unwrap_or_default())));

        let (status, body) =
            send(mock, json_request("PUT", "/3", json!({"name": "renamed"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "renamed");
    }

    #[tokio::test]
    async fn test_delete_returns_204_with_empty_body() {
        let mut mock = MockItemService::new();
        mock.expect_remove()
            .with(eq(4))
            .times(1)
            .returning(|id| Ok(item(id, "widget")));

        let request = Request::builder()
            .method("DELETE")
            .uri("/4")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(mock, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_delete_missing_forwards_not_found() {
        let mut mock = MockItemService::new();
        mock.expect_remove()
            .times(1)
            .returning(|_| Err(ItemError::NotFound(NOT_FOUND_FOR_DELETION.to_string())));

        let request = Request::builder()
            .method("DELETE")
            .uri("/4")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(mock, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Item not found for deletion");
    }

    #[tokio::test]
    async fn test_database_failure_is_generic_500() {
        let mut mock = MockItemService::new();
        mock.expect_list().times(1).returning(|_| {
            Err(ItemError::Database(sea_orm::DbErr::Custom(
                "password authentication failed".into(),
            )))
        });

        let (status, body) = send(mock, get("/")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": UNCLASSIFIED_MESSAGE}));
    }
}
