use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, service::push::client::PushClient};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and otherwise logs at `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite database as application data. The session table is
/// migrated on startup and sessions expire after `session_ttl_days` of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::SqlxErr)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_ttl_days)));

    Ok(layer)
}

/// Builds the shared outbound HTTP client.
///
/// Redirects are not followed so a misconfigured gateway URL fails loudly.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Creates the push gateway client when both the URL and server key are configured.
pub fn setup_push_client(config: &Config, http: reqwest::Client) -> Option<PushClient> {
    match (&config.push_api_url, &config.push_server_key) {
        (Some(api_url), Some(server_key)) => {
            Some(PushClient::new(http, api_url.clone(), server_key.clone()))
        }
        _ => {
            tracing::warn!("PUSH_API_URL or PUSH_SERVER_KEY not set, push delivery disabled");
            None
        }
    }
}
