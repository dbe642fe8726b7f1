//! Client for the spreadsheet-backed operations API
//!
//! The upstream service is action-based over a single URL: reads are GET with
//! an `action` query parameter, writes are POST with `{"action": ...}` in the
//! body, and every response carries a `{success, data | error}` envelope.
//! This module only moves already-shaped records; all derived state lives in
//! `calculos`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::env;
use url::Url;

use crate::dashboard::DashboardStats;
use crate::models::{
  Atleta, AtletaPatch, HandoffNote, Lembrete, LogConversa, NovaHandoffNote, NovoAtleta,
  NovoLembrete, NovoLogConversa, NovoTreinador, Treinador,
};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

impl ApiConfig {
  pub fn from_env() -> Result<Self, ApiError> {
    dotenvy::dotenv().ok();
    Ok(Self {
      base_url: env::var("FORCA_API_URL")
        .map_err(|_| ApiError::MissingConfig("FORCA_API_URL".into()))?,
    })
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid API URL: {0}")]
  Url(#[from] url::ParseError),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("API returned HTTP {0}")]
  Http(reqwest::StatusCode),

  #[error("API error: {0}")]
  Api(String),

  #[error("Failed to parse API response: {0}")]
  Parse(#[from] serde_json::Error),
}

/// ---------------------------------------------------------------------------
/// Response Envelope
/// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Envelope {
  success: bool,
  #[serde(default)]
  data: serde_json::Value,
  #[serde(default)]
  error: Option<String>,
}

impl Envelope {
  fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
    if !self.success {
      return Err(ApiError::Api(
        self.error.unwrap_or_else(|| "Erro desconhecido".to_string()),
      ));
    }
    Ok(serde_json::from_value(self.data)?)
  }
}

/// ---------------------------------------------------------------------------
/// Client
/// ---------------------------------------------------------------------------

pub struct ApiClient {
  http: Client,
  base_url: Url,
}

impl ApiClient {
  pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
    Ok(Self {
      http: Client::new(),
      base_url: Url::parse(&config.base_url)?,
    })
  }

  pub fn from_env() -> Result<Self, ApiError> {
    Self::new(&ApiConfig::from_env()?)
  }

  async fn buscar<T: DeserializeOwned>(
    &self,
    action: &str,
    params: &[(&str, &str)],
  ) -> Result<T, ApiError> {
    let mut url = self.base_url.clone();
    url.query_pairs_mut().append_pair("action", action);
    for (chave, valor) in params {
      url.query_pairs_mut().append_pair(chave, valor);
    }

    let response = self.http.get(url).send().await?;
    if !response.status().is_success() {
      return Err(ApiError::Http(response.status()));
    }

    let envelope: Envelope = response.json().await?;
    envelope.into_data()
  }

  async fn enviar<T: DeserializeOwned>(
    &self,
    action: &str,
    mut corpo: serde_json::Value,
  ) -> Result<T, ApiError> {
    if let Some(objeto) = corpo.as_object_mut() {
      objeto.insert("action".to_string(), json!(action));
    }

    // The Apps Script endpoint only parses the body when it arrives as
    // text/plain, hence the manual serialization.
    let response = self
      .http
      .post(self.base_url.clone())
      .header("Content-Type", "text/plain")
      .body(serde_json::to_string(&corpo)?)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(ApiError::Http(response.status()));
    }

    let envelope: Envelope = response.json().await?;
    envelope.into_data()
  }

  /// -------------------------------------------------------------------------
  /// Atletas
  /// -------------------------------------------------------------------------

  pub async fn get_atletas(&self) -> Result<Vec<Atleta>, ApiError> {
    self.buscar("getAtletas", &[]).await
  }

  pub async fn get_atleta(&self, id: &str) -> Result<Option<Atleta>, ApiError> {
    self.buscar("getAtleta", &[("id", id)]).await
  }

  pub async fn criar_atleta(&self, novo: &NovoAtleta) -> Result<Atleta, ApiError> {
    self.enviar("createAtleta", json!({ "data": novo })).await
  }

  pub async fn atualizar_atleta(&self, id: &str, patch: &AtletaPatch) -> Result<Atleta, ApiError> {
    self.enviar("updateAtleta", json!({ "id": id, "data": patch })).await
  }

  pub async fn excluir_atleta(&self, id: &str) -> Result<(), ApiError> {
    self.enviar("deleteAtleta", json!({ "id": id })).await
  }

  /// -------------------------------------------------------------------------
  /// Treinadores
  /// -------------------------------------------------------------------------

  pub async fn get_treinadores(&self) -> Result<Vec<Treinador>, ApiError> {
    self.buscar("getTreinadores", &[]).await
  }

  pub async fn criar_treinador(&self, novo: &NovoTreinador) -> Result<Treinador, ApiError> {
    self.enviar("createTreinador", json!({ "data": novo })).await
  }

  pub async fn atualizar_treinador(
    &self,
    id: &str,
    dados: &NovoTreinador,
  ) -> Result<Treinador, ApiError> {
    self.enviar("updateTreinador", json!({ "id": id, "data": dados })).await
  }

  pub async fn excluir_treinador(&self, id: &str) -> Result<(), ApiError> {
    self.enviar("deleteTreinador", json!({ "id": id })).await
  }

  /// -------------------------------------------------------------------------
  /// Handoff Notes
  /// -------------------------------------------------------------------------

  pub async fn get_handoff_notes(
    &self,
    atleta_id: Option<&str>,
  ) -> Result<Vec<HandoffNote>, ApiError> {
    match atleta_id {
      Some(id) => self.buscar("getHandoffNotes", &[("atleta_id", id)]).await,
      None => self.buscar("getHandoffNotes", &[]).await,
    }
  }

  pub async fn criar_handoff_note(&self, nova: &NovaHandoffNote) -> Result<HandoffNote, ApiError> {
    self.enviar("createHandoffNote", json!({ "data": nova })).await
  }

  /// -------------------------------------------------------------------------
  /// Log de Conversas
  /// -------------------------------------------------------------------------

  pub async fn get_log_conversas(
    &self,
    atleta_id: Option<&str>,
  ) -> Result<Vec<LogConversa>, ApiError> {
    match atleta_id {
      Some(id) => self.buscar("getLogConversas", &[("atleta_id", id)]).await,
      None => self.buscar("getLogConversas", &[]).await,
    }
  }

  pub async fn criar_log_conversa(&self, novo: &NovoLogConversa) -> Result<LogConversa, ApiError> {
    self.enviar("createLogConversa", json!({ "data": novo })).await
  }

  /// -------------------------------------------------------------------------
  /// Lembretes
  /// -------------------------------------------------------------------------

  pub async fn get_lembretes(&self, atleta_id: Option<&str>) -> Result<Vec<Lembrete>, ApiError> {
    match atleta_id {
      Some(id) => self.buscar("getLembretes", &[("atleta_id", id)]).await,
      None => self.buscar("getLembretes", &[]).await,
    }
  }

  pub async fn criar_lembrete(&self, novo: &NovoLembrete) -> Result<Lembrete, ApiError> {
    self.enviar("createLembrete", json!({ "data": novo })).await
  }

  pub async fn concluir_lembrete(&self, id: &str) -> Result<Lembrete, ApiError> {
    self.enviar("concluirLembrete", json!({ "id": id })).await
  }

  /// -------------------------------------------------------------------------
  /// Dashboard
  /// -------------------------------------------------------------------------

  /// Server-side counters; the same numbers can be computed locally with
  /// `DashboardStats::computar`.
  pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
    self.buscar("getDashboardStats", &[]).await
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
