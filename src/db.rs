use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::config::PoolConfig;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Builds the pool without blocking on the database: connections are opened
/// lazily, so a down database surfaces as `Unavailable` on first use.
pub fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(config.max_size)
        .min_idle(Some(0))
        .connection_timeout(config.connection_timeout)
        .build(manager)
}
