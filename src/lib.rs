//! Villain roster service: a Postgres-backed CRUD + random-pick API over the
//! villain roster, plus an append-only fight outcome ledger.

pub mod config;
pub mod db;
pub mod http;
pub mod validation;
