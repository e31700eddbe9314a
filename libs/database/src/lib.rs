//! PostgreSQL connectivity for the items service.
//!
//! The connection is an explicit resource: the binary builds it once with
//! [`postgres::connect_from_config_with_retry`], hands clones of the pool
//! handle to the layers that need it, and closes it on shutdown.
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "items_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
