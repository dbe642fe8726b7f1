use serde::{Deserialize, Serialize};

/// A coach. Athletes reference coaches by id; a deleted coach leaves a
/// dangling reference that the engine resolves to "no name", never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treinador {
  pub id: String,
  pub nome: String,
  pub email: String,
  pub created_at: String,
}

/// For creating new coaches (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoTreinador {
  pub nome: String,
  pub email: String,
}
