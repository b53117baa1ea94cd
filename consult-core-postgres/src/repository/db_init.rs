//! Schema setup and teardown from the SQL scripts shipped with this crate.
//!
//! `migrations/` holds the creation scripts, applied in file-name order.
//! `cleanup/` holds the matching drop scripts, applied in reverse order.

use sqlx::PgPool;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Creates the consultation tables and types. Safe to run on an existing schema.
///
/// ```rust,no_run
/// use consult_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
/// let applied = init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<usize, sqlx::Error> {
    run_scripts(pool, &script_dir("migrations"), ScriptOrder::Ascending).await
}

/// Drops everything `init_database` created, history rows included.
pub async fn cleanup_database(pool: &PgPool) -> Result<usize, sqlx::Error> {
    run_scripts(pool, &script_dir("cleanup"), ScriptOrder::Descending).await
}

#[derive(Clone, Copy)]
enum ScriptOrder {
    Ascending,
    Descending,
}

fn script_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn sql_scripts(dir: &Path, order: ScriptOrder) -> Result<Vec<PathBuf>, sqlx::Error> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .collect();

    scripts.sort();
    if let ScriptOrder::Descending = order {
        scripts.reverse();
    }
    Ok(scripts)
}

async fn run_scripts(pool: &PgPool, dir: &Path, order: ScriptOrder) -> Result<usize, sqlx::Error> {
    let scripts = sql_scripts(dir, order)?;
    for script in &scripts {
        let sql = fs::read_to_string(script).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
        info!(script = %script.display(), "sql script applied");
    }
    Ok(scripts.len())
}
