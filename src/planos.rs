//! Mutable plan-name list
//!
//! Plans are free-form strings; the known set is editable from the settings
//! screen and injected wherever a plan picker is needed. The store trait keeps
//! callers decoupled from the storage mechanism: SQLite in the app, in-memory
//! in tests.

use sqlx::SqlitePool;
use std::sync::Mutex;

/// Seed values for a fresh store.
pub const DEFAULT_PLANOS: [&str; 5] = ["CORTESIA", "PRO", "PRO+", "PRO TEAM", "GOLD"];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

/// Every mutation returns the full list so callers can refresh their pickers
/// without a second round trip.
#[allow(async_fn_in_trait)]
pub trait PlanoStore {
  async fn listar(&self) -> Result<Vec<String>, StoreError>;
  /// Adding an existing plan is a no-op.
  async fn adicionar(&self, plano: &str) -> Result<Vec<String>, StoreError>;
  async fn atualizar(&self, antigo: &str, novo: &str) -> Result<Vec<String>, StoreError>;
  async fn remover(&self, plano: &str) -> Result<Vec<String>, StoreError>;
}

/// ---------------------------------------------------------------------------
/// SQLite Store
/// ---------------------------------------------------------------------------

pub struct SqlitePlanoStore {
  pool: SqlitePool,
}

impl SqlitePlanoStore {
  /// Open the store, seeding the defaults when the table is empty.
  pub async fn abrir(pool: SqlitePool) -> Result<Self, StoreError> {
    let store = Self { pool };
    if store.listar().await?.is_empty() {
      for plano in DEFAULT_PLANOS {
        sqlx::query("INSERT OR IGNORE INTO planos (nome) VALUES (?1)")
          .bind(plano)
          .execute(&store.pool)
          .await?;
      }
    }
    Ok(store)
  }
}

impl PlanoStore for SqlitePlanoStore {
  async fn listar(&self) -> Result<Vec<String>, StoreError> {
    let nomes: Vec<(String,)> = sqlx::query_as("SELECT nome FROM planos ORDER BY rowid")
      .fetch_all(&self.pool)
      .await?;
    Ok(nomes.into_iter().map(|(nome,)| nome).collect())
  }

  async fn adicionar(&self, plano: &str) -> Result<Vec<String>, StoreError> {
    sqlx::query("INSERT OR IGNORE INTO planos (nome) VALUES (?1)")
      .bind(plano)
      .execute(&self.pool)
      .await?;
    self.listar().await
  }

  async fn atualizar(&self, antigo: &str, novo: &str) -> Result<Vec<String>, StoreError> {
    sqlx::query("UPDATE planos SET nome = ?1 WHERE nome = ?2")
      .bind(novo)
      .bind(antigo)
      .execute(&self.pool)
      .await?;
    self.listar().await
  }

  async fn remover(&self, plano: &str) -> Result<Vec<String>, StoreError> {
    sqlx::query("DELETE FROM planos WHERE nome = ?1")
      .bind(plano)
      .execute(&self.pool)
      .await?;
    self.listar().await
  }
}

/// ---------------------------------------------------------------------------
/// In-Memory Store
/// ---------------------------------------------------------------------------

pub struct PlanosEmMemoria {
  planos: Mutex<Vec<String>>,
}

impl Default for PlanosEmMemoria {
  fn default() -> Self {
    Self {
      planos: Mutex::new(DEFAULT_PLANOS.iter().map(|p| p.to_string()).collect()),
    }
  }
}

impl PlanosEmMemoria {
  fn com_lista<R>(&self, f: impl FnOnce(&mut Vec<String>) -> R) -> R {
    let mut planos = self.planos.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut planos)
  }
}

impl PlanoStore for PlanosEmMemoria {
  async fn listar(&self) -> Result<Vec<String>, StoreError> {
    Ok(self.com_lista(|planos| planos.clone()))
  }

  async fn adicionar(&self, plano: &str) -> Result<Vec<String>, StoreError> {
    Ok(self.com_lista(|planos| {
      if !planos.iter().any(|p| p == plano) {
        planos.push(plano.to_string());
      }
      planos.clone()
    }))
  }

  async fn atualizar(&self, antigo: &str, novo: &str) -> Result<Vec<String>, StoreError> {
    Ok(self.com_lista(|planos| {
      for p in planos.iter_mut() {
        if p == antigo {
          *p = novo.to_string();
        }
      }
      planos.clone()
    }))
  }

  async fn remover(&self, plano: &str) -> Result<Vec<String>, StoreError> {
    Ok(self.com_lista(|planos| {
      planos.retain(|p| p != plano);
      planos.clone()
    }))
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
