use serde::{Deserialize, Serialize};

/// Append-only record that a coach talked to an athlete. No update or delete;
/// several logs per athlete are normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConversa {
  pub id: String,
  pub atleta_id: String,
  pub treinador_id: String,
  pub created_at: String,
}

/// For registering a new conversation (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoLogConversa {
  pub atleta_id: String,
  pub treinador_id: String,
}

/// Append-only free-text note passed between coaches about an athlete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffNote {
  pub id: String,
  pub atleta_id: String,
  pub treinador_id: String,
  pub conteudo: String,
  pub created_at: String,
}

/// For creating a new handoff note (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovaHandoffNote {
  pub atleta_id: String,
  pub treinador_id: String,
  pub conteudo: String,
}
