//! Items Domain
//!
//! CRUD for the `Item` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ ItemService │  ← trait; SeaOrmItemService (InMemoryItemService in tests)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← Sea-ORM model for the `items` table
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, SeaOrmItemService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://localhost/items").await?;
//! let service = SeaOrmItemService::new(db);
//!
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod models;
pub mod postgres;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryItemService;
pub use models::{CreateItem, Item, ItemFilter, UpdateItem};
pub use postgres::SeaOrmItemService;
pub use service::ItemService;
