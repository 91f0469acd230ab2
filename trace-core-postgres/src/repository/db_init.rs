//! Schema bootstrap.
//!
//! `migrations/*.sql` create the `batch` and `scan_log` tables; every script is
//! idempotent, so running them against an initialised database changes
//! nothing. `cleanup/*.sql` drop them again, newest first.

use sqlx::PgPool;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOrder {
    Ascending,
    Descending,
}

/// Create the schema by running the migration scripts in file-name order.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use trace_core_postgres::init_database;
///
/// # async fn run(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = script_dir("migrations");
    let applied = run_scripts(pool, &dir, ScriptOrder::Ascending).await?;
    info!(scripts = applied, "Database schema initialized");
    Ok(())
}

/// Drop the schema by running the cleanup scripts in reverse file-name order.
///
/// Scan log rows are dropped together with the batches; only test suites
/// call this.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = script_dir("cleanup");
    let applied = run_scripts(pool, &dir, ScriptOrder::Descending).await?;
    info!(scripts = applied, "Database schema dropped");
    Ok(())
}

fn script_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// `.sql` files in `dir`, sorted by file name.
fn list_scripts(dir: &Path, order: ScriptOrder) -> std::io::Result<Vec<PathBuf>> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .collect();

    scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if order == ScriptOrder::Descending {
        scripts.reverse();
    }
    Ok(scripts)
}

async fn run_scripts(pool: &PgPool, dir: &Path, order: ScriptOrder) -> Result<usize, sqlx::Error> {
    let scripts = list_scripts(dir, order).map_err(sqlx::Error::Io)?;

    for path in &scripts {
        debug!(script = %path.display(), "Running schema script");
        let sql = fs::read_to_string(path).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(scripts.len())
}
