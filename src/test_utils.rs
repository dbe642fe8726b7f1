//! Test utilities and helpers for unit testing
//!
//! Mock data factories, date helpers relative to a fixed "today", and
//! in-memory database setup/teardown.

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::models::{Ambiente, Atleta, Lembrete, LogConversa, NivelExperiencia, Status, Treinador};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// ISO date string `offset` days from the given anchor.
pub fn data_relativa(hoje: NaiveDate, offset: i64) -> String {
  (hoje + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// An active athlete assigned to coach "t1", awaiting a plan.
pub fn mock_atleta(id: &str, nome: &str, pronto_ate: &str) -> Atleta {
  Atleta {
    id: id.to_string(),
    nome: nome.to_string(),
    professor_id: Some("t1".to_string()),
    treinador_corrida_id: None,
    plano: "PRO".to_string(),
    ambiente: Ambiente::Academia,
    dias_treina: 3,
    bloco_mfit: "Força Base A".to_string(),
    pronto_ate: pronto_ate.to_string(),
    status: Status::AguardandoTreino,
    prova_alvo: String::new(),
    data_prova: None,
    lesoes_ativas: String::new(),
    limitacoes: String::new(),
    perfil_comportamento: String::new(),
    objetivos: String::new(),
    nivel_experiencia: NivelExperiencia::Intermediario,
    equipamentos: String::new(),
    notas_treinador: String::new(),
    observacao: String::new(),
    ativo: true,
    inativado_em: None,
    motivo_inativacao: None,
    created_at: "2026-01-15T12:00:00Z".to_string(),
    updated_at: "2026-01-15T12:00:00Z".to_string(),
  }
}

pub fn mock_treinador(id: &str, nome: &str) -> Treinador {
  Treinador {
    id: id.to_string(),
    nome: nome.to_string(),
    email: format!("{}@goon.com", nome.to_lowercase()),
    created_at: "2026-01-10T09:00:00Z".to_string(),
  }
}

pub fn mock_log_conversa(atleta_id: &str, created_at: &str) -> LogConversa {
  LogConversa {
    id: format!("log-{}", atleta_id),
    atleta_id: atleta_id.to_string(),
    treinador_id: "t1".to_string(),
    created_at: created_at.to_string(),
  }
}

/// An open reminder due on the given date.
pub fn mock_lembrete(id: &str, atleta_id: &str, data: &str) -> Lembrete {
  Lembrete {
    id: id.to_string(),
    atleta_id: atleta_id.to_string(),
    treinador_id: "t1".to_string(),
    conteudo: "Cobrar feedback do bloco".to_string(),
    data: data.to_string(),
    realizado: false,
    realizado_em: None,
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> =
      sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = 'planos'")
        .fetch_all(&pool)
        .await
        .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let hoje = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();

    let atleta = mock_atleta("a1", "João Silva", &data_relativa(hoje, 3));
    assert_eq!(atleta.pronto_ate, "2026-08-29");
    assert!(atleta.ativo);

    let treinador = mock_treinador("t1", "Wesley");
    assert_eq!(treinador.email, "wesley@goon.com");

    let lembrete = mock_lembrete("1", "a1", "2026-08-27");
    assert!(!lembrete.realizado);
  }
}
