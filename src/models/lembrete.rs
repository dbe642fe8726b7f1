use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled follow-up task tied to an athlete and a due date.
///
/// Lifecycle is one-way: created, then optionally marked done. There is no
/// un-done path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lembrete {
  pub id: String,
  pub atleta_id: String,
  pub treinador_id: String,
  pub conteudo: String,
  /// Due date (ISO date string).
  pub data: String,
  #[serde(default)]
  pub realizado: bool,
  #[serde(default)]
  pub realizado_em: Option<String>,
}

impl Lembrete {
  /// Mark the reminder done. Already-done reminders keep their original
  /// completion timestamp.
  pub fn concluir(&mut self, agora: DateTime<Utc>) {
    if self.realizado {
      return;
    }
    self.realizado = true;
    self.realizado_em = Some(agora.to_rfc3339());
  }
}

/// For creating a new reminder (without id, completion fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoLembrete {
  pub atleta_id: String,
  pub treinador_id: String,
  pub conteudo: String,
  pub data: String,
}
