//! Shared test harness: a throwaway SQLite database per test.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use b2b_wholesale::repository::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Pool over a temp-file database with all migrations applied. The file is
/// removed when the struct drops.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("temp database file");
        let pool = establish_connection_pool(tempfile.path().to_str().expect("utf-8 temp path"))
            .expect("pool over temp database");
        let mut conn = pool.get().expect("connection from fresh pool");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations apply cleanly");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
