//! Builders wiring the employee repository into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use roster::domain::ports::{EmployeeRepository, EmployeeRequests};
use roster::domain::{AccountNumberFormatValidator, EmployeeRequestHandler};
use roster::inbound::http::state::HttpState;
use roster::outbound::memory::InMemoryEmployeeRepository;
use roster::outbound::persistence::{
    DbPool, DieselEmployeeRepository, PoolConfig, run_pending_migrations,
};

use super::ServerSettings;

fn handler_for<R>(repository: R) -> Arc<dyn EmployeeRequests>
where
    R: EmployeeRepository + 'static,
{
    Arc::new(EmployeeRequestHandler::new(
        Arc::new(repository),
        Arc::new(AccountNumberFormatValidator),
    ))
}

/// Apply embedded migrations on a blocking thread.
async fn migrate(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = web::block(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");
    Ok(())
}

/// Build the HTTP state from settings.
///
/// Uses the Diesel repository when a database URL is configured, running
/// pending migrations first unless they are skipped. Otherwise the server
/// keeps a seeded in-memory roster.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_http_state(settings: &ServerSettings) -> std::io::Result<web::Data<HttpState>> {
    let employees = match settings.database_url() {
        Some(url) => {
            if settings.skip_migrations {
                info!("skipping database migrations");
            } else {
                migrate(url).await?;
            }
            let config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(config).await.map_err(std::io::Error::other)?;
            info!(
                max_connections = settings.db_max_connections(),
                "using PostgreSQL employee repository"
            );
            handler_for(DieselEmployeeRepository::new(pool))
        }
        None => {
            warn!("no database configured; employees are kept in memory");
            handler_for(InMemoryEmployeeRepository::seeded())
        }
    };
    Ok(web::Data::new(HttpState::new(employees)))
}
