//! Append-only fight ledger. Rows are written once; there is no update path.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::models::Fight;

/// A fight outcome to record. All fields are mandatory on the wire; a missing
/// one fails deserialization before it gets anywhere near the ledger.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFight {
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: String,
    pub winner_team: String,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: String,
    pub loser_team: String,
}

pub async fn record(db: &PgPool, fight: &NewFight) -> Result<Fight> {
    sqlx::query_as::<_, Fight>(
        "INSERT INTO fights (fight_date, winner_name, winner_level, winner_picture,
                             winner_team, loser_name, loser_level, loser_picture, loser_team)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id, fight_date, winner_name, winner_level, winner_picture,
                   winner_team, loser_name, loser_level, loser_picture, loser_team",
    )
    .bind(fight.fight_date)
    .bind(&fight.winner_name)
    .bind(fight.winner_level)
    .bind(&fight.winner_picture)
    .bind(&fight.winner_team)
    .bind(&fight.loser_name)
    .bind(fight.loser_level)
    .bind(&fight.loser_picture)
    .bind(&fight.loser_team)
    .fetch_one(db)
    .await
    .context("recording fight")
}

pub async fn get(db: &PgPool, id: i64) -> Result<Option<Fight>> {
    sqlx::query_as::<_, Fight>(
        "SELECT id, fight_date, winner_name, winner_level, winner_picture,
                winner_team, loser_name, loser_level, loser_picture, loser_team
           FROM fights
          WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("fetching fight by id")
}

pub async fn list(db: &PgPool) -> Result<Vec<Fight>> {
    sqlx::query_as::<_, Fight>(
        "SELECT id, fight_date, winner_name, winner_level, winner_picture,
                winner_team, loser_name, loser_level, loser_picture, loser_team
           FROM fights
          ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("listing fights")
}
