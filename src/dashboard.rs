//! Stat-card counters and athlete filtering
//!
//! Consumes the computed view model from `calculos`; every predicate here
//! reads the *inferred* status and day count, so the cards and the filtered
//! table always agree with row urgency.

use serde::{Deserialize, Serialize};

use crate::calculos::AtletaComCalculos;
use crate::models::{Ambiente, Status};

/// ---------------------------------------------------------------------------
/// Dashboard Stats
/// ---------------------------------------------------------------------------

/// The seven stat-card counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
  /// Due within a week and not yet built.
  pub para_montar_semana: usize,
  /// Built and not overdue.
  pub ja_com_treino: usize,
  /// Deadline 8 to 14 days out.
  pub fecham_proxima_semana: usize,
  pub sem_treinador: usize,
  pub atrasados: usize,
  pub precisam_ajuste: usize,
  pub sem_conversa_semana: usize,
}

impl DashboardStats {
  pub fn computar(atletas: &[AtletaComCalculos]) -> Self {
    let conta =
      |especial: FiltroEspecial| atletas.iter().filter(|a| especial.aplica(a)).count();

    Self {
      para_montar_semana: conta(FiltroEspecial::ParaMontarSemana),
      ja_com_treino: conta(FiltroEspecial::JaComTreino),
      fecham_proxima_semana: conta(FiltroEspecial::FechamProximaSemana),
      sem_treinador: conta(FiltroEspecial::SemTreinador),
      atrasados: conta(FiltroEspecial::Atrasados),
      precisam_ajuste: conta(FiltroEspecial::PrecisamAjuste),
      sem_conversa_semana: conta(FiltroEspecial::SemConversaSemana),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Filters
/// ---------------------------------------------------------------------------

/// One filter per stat card; clicking a card applies the matching predicate,
/// so each variant must count exactly what its card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiltroEspecial {
  ParaMontarSemana,
  JaComTreino,
  FechamProximaSemana,
  SemTreinador,
  Atrasados,
  PrecisamAjuste,
  SemConversaSemana,
}

impl FiltroEspecial {
  pub fn aplica(&self, atleta: &AtletaComCalculos) -> bool {
    match self {
      Self::ParaMontarSemana => {
        (0..=7).contains(&atleta.dias) && atleta.status() != Status::TreinoMontado
      }
      Self::JaComTreino => atleta.status() == Status::TreinoMontado && atleta.dias >= 0,
      Self::FechamProximaSemana => (8..=14).contains(&atleta.dias),
      Self::SemTreinador => atleta.atleta.professor_id.is_none(),
      Self::Atrasados => atleta.dias < 0,
      Self::PrecisamAjuste => atleta.status() == Status::PrecisaAjuste,
      Self::SemConversaSemana => !atleta.conversou_semana,
    }
  }
}

/// Strength-coach filter: either "nobody assigned" or a specific coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiltroProfessor {
  SemProfessor,
  Treinador(String),
}

/// Table filters. All criteria are conjunctive; `Default` matches everything
/// except inactive athletes.
#[derive(Debug, Clone, Default)]
pub struct FiltrosAtleta {
  /// Case-insensitive substring match on the athlete's name.
  pub busca: Option<String>,
  pub professor: Option<FiltroProfessor>,
  /// Matches the effective (inferred) status shown in the table.
  pub status: Option<Status>,
  pub plano: Option<String>,
  pub ambiente: Option<Ambiente>,
  pub dias_treina: Option<i64>,
  pub especial: Option<FiltroEspecial>,
  /// Inactivated athletes are hidden unless this is set.
  pub incluir_inativos: bool,
}

pub fn filtrar_atletas(
  atletas: &[AtletaComCalculos],
  filtros: &FiltrosAtleta,
) -> Vec<AtletaComCalculos> {
  atletas
    .iter()
    .filter(|a| passa_filtros(a, filtros))
    .cloned()
    .collect()
}

fn passa_filtros(atleta: &AtletaComCalculos, filtros: &FiltrosAtleta) -> bool {
  if !atleta.atleta.ativo && !filtros.incluir_inativos {
    return false;
  }

  if let Some(especial) = &filtros.especial {
    if !especial.aplica(atleta) {
      return false;
    }
  }

  if let Some(busca) = &filtros.busca {
    let busca = busca.to_lowercase();
    if !atleta.atleta.nome.to_lowercase().contains(&busca) {
      return false;
    }
  }

  match &filtros.professor {
    Some(FiltroProfessor::SemProfessor) if atleta.atleta.professor_id.is_some() => return false,
    Some(FiltroProfessor::Treinador(id)) if atleta.atleta.professor_id.as_deref() != Some(id) => {
      return false;
    }
    _ => {}
  }

  if let Some(status) = filtros.status {
    if atleta.status() != status {
      return false;
    }
  }
  if let Some(plano) = &filtros.plano {
    if &atleta.atleta.plano != plano {
      return false;
    }
  }
  if let Some(ambiente) = filtros.ambiente {
    if atleta.atleta.ambiente != ambiente {
      return false;
    }
  }
  if let Some(dias_treina) = filtros.dias_treina {
    if atleta.atleta.dias_treina != dias_treina {
      return false;
    }
  }

  true
}

/// ---------------------------------------------------------------------------
/// Visibility
/// ---------------------------------------------------------------------------

/// Which athletes the signed-in coach may see: masters see everyone, a coach
/// sees their own athletes, an email with no coach record sees nothing.
pub fn atletas_visiveis(
  atletas: &[AtletaComCalculos],
  is_master: bool,
  treinador_atual_id: Option<&str>,
) -> Vec<AtletaComCalculos> {
  if is_master {
    return atletas.to_vec();
  }
  let Some(id) = treinador_atual_id else {
    return Vec::new();
  };
  atletas
    .iter()
    .filter(|a| a.atleta.professor_id.as_deref() == Some(id))
    .cloned()
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calculos::processar_atletas;
  use crate::test_utils::*;
  use chrono::NaiveDate;

  fn hoje() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
  }

  /// Five athletes covering every card: due soon, built, closing next week,
  /// unassigned, overdue + needs-adjustment.
  fn cenario() -> Vec<AtletaComCalculos> {
    let mut a1 = mock_atleta("a1", "João Silva", &data_relativa(hoje(), 3));
    a1.status = Status::AguardandoTreino;

    let mut a2 = mock_atleta("a2", "Maria Santos", &data_relativa(hoje(), 10));
    a2.status = Status::TreinoMontado;

    let mut a3 = mock_atleta("a3", "Pedro Costa", &data_relativa(hoje(), -2));
    a3.status = Status::TreinoMontado;

    let mut a4 = mock_atleta("a4", "Ana Oliveira", &data_relativa(hoje(), 5));
    a4.professor_id = None;

    let mut a5 = mock_atleta("a5", "Lucas Ferreira", &data_relativa(hoje(), 6));
    a5.status = Status::PrecisaAjuste;

    let logs = vec![mock_log_conversa("a1", &format!("{}T09:00:00Z", data_relativa(hoje(), -1)))];

    processar_atletas(
      &[a1, a2, a3, a4, a5],
      &[mock_treinador("t1", "Wesley")],
      &logs,
      &[],
      hoje(),
    )
  }

  #[test]
  fn test_stats_counters() {
    let stats = DashboardStats::computar(&cenario());

    // a1 (3d, aguardando), a4 (5d), a5 (6d, precisa_ajuste) need a plan built
    assert_eq!(stats.para_montar_semana, 3);
    // only a2 is built and not overdue (a2 has 10d -> treino_montado)
    assert_eq!(stats.ja_com_treino, 1);
    assert_eq!(stats.fecham_proxima_semana, 1);
    assert_eq!(stats.sem_treinador, 1);
    assert_eq!(stats.atrasados, 1);
    assert_eq!(stats.precisam_ajuste, 1);
    // only a1 talked this week
    assert_eq!(stats.sem_conversa_semana, 4);
  }

  #[test]
  fn test_cards_and_filters_agree() {
    let atletas = cenario();
    let stats = DashboardStats::computar(&atletas);

    let casos = [
      (FiltroEspecial::ParaMontarSemana, stats.para_montar_semana),
      (FiltroEspecial::JaComTreino, stats.ja_com_treino),
      (FiltroEspecial::FechamProximaSemana, stats.fecham_proxima_semana),
      (FiltroEspecial::SemTreinador, stats.sem_treinador),
      (FiltroEspecial::Atrasados, stats.atrasados),
      (FiltroEspecial::PrecisamAjuste, stats.precisam_ajuste),
      (FiltroEspecial::SemConversaSemana, stats.sem_conversa_semana),
    ];

    for (especial, esperado) in casos {
      let filtros = FiltrosAtleta { especial: Some(especial), ..Default::default() };
      assert_eq!(filtrar_atletas(&atletas, &filtros).len(), esperado, "{:?}", especial);
    }
  }

  #[test]
  fn test_filtro_busca_ignora_caixa() {
    let atletas = cenario();
    let filtros = FiltrosAtleta { busca: Some("maria".into()), ..Default::default() };

    let resultado = filtrar_atletas(&atletas, &filtros);
    assert_eq!(resultado.len(), 1);
    assert_eq!(resultado[0].atleta.nome, "Maria Santos");
  }

  #[test]
  fn test_filtro_professor() {
    let atletas = cenario();

    let sem = FiltrosAtleta {
      professor: Some(FiltroProfessor::SemProfessor),
      ..Default::default()
    };
    assert_eq!(filtrar_atletas(&atletas, &sem).len(), 1);

    let de_t1 = FiltrosAtleta {
      professor: Some(FiltroProfessor::Treinador("t1".into())),
      ..Default::default()
    };
    assert_eq!(filtrar_atletas(&atletas, &de_t1).len(), 4);

    let de_outro = FiltrosAtleta {
      professor: Some(FiltroProfessor::Treinador("t2".into())),
      ..Default::default()
    };
    assert!(filtrar_atletas(&atletas, &de_outro).is_empty());
  }

  #[test]
  fn test_filtro_status_usa_status_calculado() {
    // a3 is stored treino_montado but overdue: it must show up under
    // atrasado, not under treino_montado
    let atletas = cenario();

    let atrasados = FiltrosAtleta { status: Some(Status::Atrasado), ..Default::default() };
    let resultado = filtrar_atletas(&atletas, &atrasados);
    assert_eq!(resultado.len(), 1);
    assert_eq!(resultado[0].atleta.id, "a3");
  }

  #[test]
  fn test_inativos_escondidos_por_padrao() {
    let mut inativo = mock_atleta("a9", "Inativo", &data_relativa(hoje(), 3));
    inativo.ativo = false;
    let vistas = processar_atletas(&[inativo], &[], &[], &[], hoje());

    assert!(filtrar_atletas(&vistas, &FiltrosAtleta::default()).is_empty());

    let com_inativos = FiltrosAtleta { incluir_inativos: true, ..Default::default() };
    assert_eq!(filtrar_atletas(&vistas, &com_inativos).len(), 1);
  }

  #[test]
  fn test_atletas_visiveis() {
    let atletas = cenario();

    assert_eq!(atletas_visiveis(&atletas, true, None).len(), atletas.len());

    // t1 coaches everyone except the unassigned a4
    let de_t1 = atletas_visiveis(&atletas, false, Some("t1"));
    assert_eq!(de_t1.len(), 4);
    assert!(de_t1.iter().all(|a| a.atleta.professor_id.as_deref() == Some("t1")));

    assert!(atletas_visiveis(&atletas, false, Some("t2")).is_empty());
    assert!(atletas_visiveis(&atletas, false, None).is_empty());
  }
}
