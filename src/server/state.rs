//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Push gateway client, when push delivery is configured
//! - Login ids promoted to admin on login

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::push::client::PushClient;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `PushClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `admin_login_ids` is shared behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the push gateway. `None` disables push delivery.
    pub push_client: Option<PushClient>,

    /// Login ids that receive the admin role on their next login.
    pub admin_login_ids: Arc<[String]>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `push_client` - Push gateway client, or `None` when push is not configured
    /// - `admin_login_ids` - Login ids to promote to admin on login
    pub fn new(
        db: DatabaseConnection,
        push_client: Option<PushClient>,
        admin_login_ids: Vec<String>,
    ) -> Self {
        Self {
            db,
            push_client,
            admin_login_ids: admin_login_ids.into(),
        }
    }
}
