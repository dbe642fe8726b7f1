use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::env;
use std::fs;
use std::path::PathBuf;

pub type DbPool = SqlitePool;

const DEFAULT_DB_PATH: &str = "forca-manager.db";

/// Database file location: `FORCA_DB_PATH`, or a file next to the process.
fn get_db_path() -> PathBuf {
  env::var("FORCA_DB_PATH")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db() -> Result<DbPool, Box<dyn std::error::Error>> {
  dotenvy::dotenv().ok();

  let db_path = get_db_path();
  if let Some(parent) = db_path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent)?;
    }
  }

  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
  println!("Initializing database at: {}", db_path.display());

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  println!("Database initialized successfully");

  Ok(pool)
}
