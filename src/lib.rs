//! Coaching operations core for the Força Manager dashboard.
//!
//! The heart of the crate is `calculos`: a pure derived-state layer that turns
//! raw athlete/coach/conversation/reminder collections into the enriched view
//! the dashboard renders (readiness day counts, inferred status, weekly
//! follow-up windows). Around it sit thin collaborators: the spreadsheet-backed
//! REST client, the plan-name store, stat-card counters and filters, and the
//! master-email visibility rule.

pub mod api;
pub mod calculos;
pub mod dashboard;
pub mod db;
pub mod models;
pub mod permissions;
pub mod planos;

#[cfg(test)]
mod test_utils;
