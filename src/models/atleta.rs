use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Status
/// ---------------------------------------------------------------------------

/// Stored training status, set manually by the coach. The dashboard shows the
/// *inferred* status computed in `calculos`; the manual value is kept next to
/// it as `status_original`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
  AguardandoTreino,
  TreinoMontado,
  Atrasado,
  PrecisaAjuste,
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::AguardandoTreino => write!(f, "aguardando_treino"),
      Self::TreinoMontado => write!(f, "treino_montado"),
      Self::Atrasado => write!(f, "atrasado"),
      Self::PrecisaAjuste => write!(f, "precisa_ajuste"),
    }
  }
}

impl std::str::FromStr for Status {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "aguardando_treino" => Ok(Self::AguardandoTreino),
      "treino_montado" => Ok(Self::TreinoMontado),
      "atrasado" => Ok(Self::Atrasado),
      "precisa_ajuste" => Ok(Self::PrecisaAjuste),
      _ => Err(format!("Unknown status: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Training Environment / Experience Level
/// ---------------------------------------------------------------------------

/// Where the athlete trains. Wire values are the display strings the
/// spreadsheet stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ambiente {
  Academia,
  #[serde(rename = "Home Gym")]
  HomeGym,
  #[serde(rename = "No Equip")]
  NoEquip,
  Corrida,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NivelExperiencia {
  Iniciante,
  Intermediario,
  Avancado,
}

/// ---------------------------------------------------------------------------
/// Atleta
/// ---------------------------------------------------------------------------

/// An athlete as stored by the spreadsheet-backed API.
///
/// Date fields stay as wire strings: the upstream sheet emits anything from
/// `YYYY-MM-DD` to full RFC3339 to garbage, and parsing is the engine's
/// soft-fail responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atleta {
  pub id: String,
  pub nome: String,
  pub professor_id: Option<String>,
  /// Running coach, tracked separately from the strength coach.
  #[serde(default)]
  pub treinador_corrida_id: Option<String>,
  /// Free-form plan name; the known set lives in the plan store.
  pub plano: String,
  pub ambiente: Ambiente,
  pub dias_treina: i64,
  pub bloco_mfit: String,
  /// Deadline for the next training block to be ready (ISO date, may be empty).
  pub pronto_ate: String,
  pub status: Status,
  pub prova_alvo: String,
  pub data_prova: Option<String>,
  pub lesoes_ativas: String,
  pub limitacoes: String,
  pub perfil_comportamento: String,
  pub objetivos: String,
  pub nivel_experiencia: NivelExperiencia,
  pub equipamentos: String,
  pub notas_treinador: String,
  pub observacao: String,
  #[serde(default = "default_ativo")]
  pub ativo: bool,
  #[serde(default)]
  pub inativado_em: Option<String>,
  #[serde(default)]
  pub motivo_inativacao: Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

fn default_ativo() -> bool {
  true
}

/// Creation payload: the subset the intake form sends. The API fills the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoAtleta {
  pub nome: String,
  pub professor_id: Option<String>,
  pub treinador_corrida_id: Option<String>,
  pub plano: String,
  pub ambiente: Ambiente,
  pub dias_treina: i64,
  pub bloco_mfit: String,
  pub pronto_ate: String,
  pub status: Status,
}

/// Partial update payload. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtletaPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nome: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub professor_id: Option<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub treinador_corrida_id: Option<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub plano: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ambiente: Option<Ambiente>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dias_treina: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bloco_mfit: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pronto_ate: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<Status>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prova_alvo: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data_prova: Option<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lesoes_ativas: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limitacoes: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub perfil_comportamento: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub objetivos: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nivel_experiencia: Option<NivelExperiencia>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equipamentos: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notas_treinador: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub observacao: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ativo: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub motivo_inativacao: Option<Option<String>>,
}
