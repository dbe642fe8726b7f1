//! Deterministic derived-state layer for the dashboard
//!
//! This module turns the raw athlete/coach/conversation/reminder collections
//! into the enriched per-athlete view the dashboard renders. Everything here
//! is a pure function of its inputs: "today" is threaded in explicitly, there
//! is no I/O, and malformed input degrades to `None` instead of failing.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Atleta, Lembrete, LogConversa, Status, Treinador};

/// ---------------------------------------------------------------------------
/// Date Parsing (soft-fail)
/// ---------------------------------------------------------------------------

/// Parse a wire date string (`YYYY-MM-DD` or RFC3339). Empty or malformed
/// input yields `None`; this function never panics.
pub fn parse_data(valor: &str) -> Option<NaiveDate> {
  let valor = valor.trim();
  if valor.is_empty() {
    return None;
  }

  if let Some(prefixo) = valor.get(..10) {
    if let Ok(data) = NaiveDate::parse_from_str(prefixo, "%Y-%m-%d") {
      return Some(data);
    }
  }

  DateTime::parse_from_rfc3339(valor).ok().map(|dt| dt.date_naive())
}

/// Parse a wire timestamp. Accepts RFC3339 (normalized to the UTC clock), a
/// plain `YYYY-MM-DDTHH:MM:SS` datetime, or a bare date (taken at midnight).
pub fn parse_data_hora(valor: &str) -> Option<NaiveDateTime> {
  let valor = valor.trim();
  if valor.is_empty() {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
    return Some(dt.naive_utc());
  }

  if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S%.f") {
    return Some(dt);
  }

  parse_data(valor).map(|d| d.and_time(NaiveTime::MIN))
}

/// ---------------------------------------------------------------------------
/// Date Math
/// ---------------------------------------------------------------------------

/// Signed day count from `hoje` to the readiness deadline, both normalized to
/// midnight. Negative means overdue; `None` means no (parseable) deadline.
pub fn dias_ate(data: &str, hoje: NaiveDate) -> Option<i64> {
  parse_data(data).map(|alvo| (alvo - hoje).num_days())
}

/// Human-readable time until the target race, decomposed into whole weeks and
/// leftover days, with each unit pluralized on its own.
pub fn tempo_ate_prova(data_prova: Option<&str>, hoje: NaiveDate) -> Option<String> {
  let prova = parse_data(data_prova?)?;
  let delta = (prova - hoje).num_days();

  if delta < 0 {
    return Some("Prova já passou".to_string());
  }

  let semanas = delta / 7;
  let dias = delta % 7;

  if semanas == 0 {
    return Some(format!("{} dia{}", dias, if dias != 1 { "s" } else { "" }));
  }
  if dias == 0 {
    return Some(format!("{} semana{}", semanas, if semanas != 1 { "s" } else { "" }));
  }

  Some(format!(
    "{} semana{} e {} dia{}",
    semanas,
    if semanas != 1 { "s" } else { "" },
    dias,
    if dias != 1 { "s" } else { "" }
  ))
}

/// ---------------------------------------------------------------------------
/// Status Inference
/// ---------------------------------------------------------------------------

/// Effective status for display, derived from the stored status and the day
/// count. Rules apply in order, first match wins:
///
/// 1. no deadline: keep the stored status, nothing to infer
/// 2. past the deadline: atrasado, regardless of what the coach set
/// 3. coach flagged precisa_ajuste: keep it until the deadline lapses
/// 4. due within a week: aguardando_treino
/// 5. more than a week out: treino_montado
///
/// The result is never persisted; the stored value travels with the view as
/// `status_original`.
pub fn calcular_status(original: Status, dias: Option<i64>) -> Status {
  let Some(dias) = dias else {
    return original;
  };

  if dias < 0 {
    return Status::Atrasado;
  }
  if original == Status::PrecisaAjuste {
    return Status::PrecisaAjuste;
  }
  if dias <= 7 {
    Status::AguardandoTreino
  } else {
    Status::TreinoMontado
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Windows
/// ---------------------------------------------------------------------------
///
/// Two windows with intentionally different anchoring: conversations use a
/// trailing 7-day window ending today, reminders use the Monday-anchored
/// calendar week containing today. Do not conflate them.

/// Monday of the week containing `hoje` (a Sunday rolls back six days).
pub fn inicio_da_semana(hoje: NaiveDate) -> NaiveDate {
  hoje - Duration::days(hoje.weekday().num_days_from_monday() as i64)
}

/// The calendar-week reminder window: Monday 00:00:00 through Sunday
/// 23:59:59.999.
pub fn janela_da_semana(hoje: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
  let inicio = inicio_da_semana(hoje).and_time(NaiveTime::MIN);
  let fim = inicio + Duration::days(7) - Duration::milliseconds(1);
  (inicio, fim)
}

/// Lower bound of the trailing conversation window: midnight, seven days ago.
fn limite_conversa(hoje: NaiveDate) -> NaiveDateTime {
  (hoje - Duration::days(7)).and_time(NaiveTime::MIN)
}

// Inclusive lower bound, matching the upstream comparison.
fn conversa_na_janela(log: &LogConversa, limite: NaiveDateTime) -> bool {
  parse_data_hora(&log.created_at).map_or(false, |quando| quando >= limite)
}

fn lembrete_na_janela(lembrete: &Lembrete, inicio: NaiveDateTime, fim: NaiveDateTime) -> bool {
  if lembrete.realizado {
    return false;
  }
  parse_data_hora(&lembrete.data).map_or(false, |quando| quando >= inicio && quando <= fim)
}

/// True iff the athlete has at least one conversation log in the last seven
/// days (inclusive of the lower bound).
pub fn conversou_na_semana(logs: &[LogConversa], atleta_id: &str, hoje: NaiveDate) -> bool {
  let limite = limite_conversa(hoje);
  logs
    .iter()
    .filter(|log| log.atleta_id == atleta_id)
    .any(|log| conversa_na_janela(log, limite))
}

/// The athlete's open reminders due inside the current calendar week.
pub fn lembretes_da_semana(
  lembretes: &[Lembrete],
  atleta_id: &str,
  hoje: NaiveDate,
) -> Vec<Lembrete> {
  let (inicio, fim) = janela_da_semana(hoje);
  lembretes
    .iter()
    .filter(|l| l.atleta_id == atleta_id && lembrete_na_janela(l, inicio, fim))
    .cloned()
    .collect()
}

/// ---------------------------------------------------------------------------
/// View Model
/// ---------------------------------------------------------------------------

/// An athlete enriched with everything the dashboard needs: day count to the
/// readiness deadline, inferred status (the flattened `status` field), both
/// resolved coach names, the weekly follow-up flags, and the reminder window.
///
/// Pure projection: recomputed from scratch on every refresh, no identity of
/// its own beyond the athlete's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtletaComCalculos {
  /// The athlete record, with `status` replaced by the inferred value.
  #[serde(flatten)]
  pub atleta: Atleta,
  /// Days until `pronto_ate`; a missing deadline reads as 0 (due today) so
  /// sorting and urgency coloring have something to work with.
  pub dias: i64,
  pub tempo_ate_prova: Option<String>,
  pub professor_nome: Option<String>,
  pub treinador_corrida_nome: Option<String>,
  pub conversou_semana: bool,
  /// The coach-entered status, before inference.
  pub status_original: Status,
  pub tem_lembrete_ativo: bool,
  pub lembretes_ativos: Vec<Lembrete>,
}

impl AtletaComCalculos {
  /// The effective (inferred) status.
  pub fn status(&self) -> Status {
    self.atleta.status
  }
}

/// Build the dashboard view model for every athlete.
///
/// Each athlete is processed independently; the only cross-collection work is
/// id lookups, so coaches are indexed by id and logs/reminders grouped by
/// athlete up front. Output order follows input order; sorting and filtering
/// are the caller's concern.
pub fn processar_atletas(
  atletas: &[Atleta],
  treinadores: &[Treinador],
  logs: &[LogConversa],
  lembretes: &[Lembrete],
  hoje: NaiveDate,
) -> Vec<AtletaComCalculos> {
  let treinadores_por_id: HashMap<&str, &Treinador> =
    treinadores.iter().map(|t| (t.id.as_str(), t)).collect();

  let mut logs_por_atleta: HashMap<&str, Vec<&LogConversa>> = HashMap::new();
  for log in logs {
    logs_por_atleta.entry(log.atleta_id.as_str()).or_default().push(log);
  }

  let mut lembretes_por_atleta: HashMap<&str, Vec<&Lembrete>> = HashMap::new();
  for lembrete in lembretes {
    lembretes_por_atleta
      .entry(lembrete.atleta_id.as_str())
      .or_default()
      .push(lembrete);
  }

  let limite = limite_conversa(hoje);
  let (inicio_semana, fim_semana) = janela_da_semana(hoje);

  let nome_de = |id: Option<&str>| -> Option<String> {
    treinadores_por_id.get(id?).map(|t| t.nome.clone())
  };

  atletas
    .iter()
    .map(|atleta| {
      let professor_nome = nome_de(atleta.professor_id.as_deref());
      let treinador_corrida_nome = nome_de(atleta.treinador_corrida_id.as_deref());

      let conversou_semana = logs_por_atleta
        .get(atleta.id.as_str())
        .map_or(false, |logs| logs.iter().any(|log| conversa_na_janela(log, limite)));

      let lembretes_ativos: Vec<Lembrete> = lembretes_por_atleta
        .get(atleta.id.as_str())
        .map(|ls| {
          ls.iter()
            .filter(|l| lembrete_na_janela(l, inicio_semana, fim_semana))
            .map(|l| (*l).clone())
            .collect()
        })
        .unwrap_or_default();

      // Inference sees the raw day count; the view field defaults to 0 so an
      // athlete without a deadline surfaces as "due today".
      let dias_brutos = dias_ate(&atleta.pronto_ate, hoje);
      let status_original = atleta.status;

      let mut atleta = atleta.clone();
      atleta.status = calcular_status(status_original, dias_brutos);

      AtletaComCalculos {
        dias: dias_brutos.unwrap_or(0),
        tempo_ate_prova: tempo_ate_prova(atleta.data_prova.as_deref(), hoje),
        professor_nome,
        treinador_corrida_nome,
        conversou_semana,
        status_original,
        tem_lembrete_ativo: !lembretes_ativos.is_empty(),
        lembretes_ativos,
        atleta,
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
