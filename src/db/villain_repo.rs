use anyhow::{Context, Result};
use rand::Rng;
use sqlx::PgPool;

use crate::db::models::Villain;
use crate::validation::ValidVillain;

/// Insert a new villain and return it with its store-assigned id. Ids come
/// from a sequence, so they are unique and never reused after a delete.
pub async fn create(db: &PgPool, candidate: &ValidVillain) -> Result<Villain> {
    sqlx::query_as::<_, Villain>(
        "INSERT INTO villains (name, other_name, picture, powers, level)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, other_name, picture, powers, level",
    )
    .bind(&candidate.name)
    .bind(&candidate.other_name)
    .bind(&candidate.picture)
    .bind(&candidate.powers)
    .bind(candidate.level)
    .fetch_one(db)
    .await
    .context("inserting villain")
}

/// Fetch one villain by id; `None` when the id is not in the roster.
pub async fn get(db: &PgPool, id: i64) -> Result<Option<Villain>> {
    sqlx::query_as::<_, Villain>(
        "SELECT id, name, other_name, picture, powers, level
           FROM villains
          WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("fetching villain by id")
}

/// The whole roster, insertion order.
pub async fn list(db: &PgPool) -> Result<Vec<Villain>> {
    sqlx::query_as::<_, Villain>(
        "SELECT id, name, other_name, picture, powers, level
           FROM villains
          ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("listing villains")
}

pub async fn count(db: &PgPool) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM villains")
        .fetch_one(db)
        .await
        .context("counting villains")
}

/// Uniform pick over the current roster: count the rows, draw an index, read
/// at that offset. `None` on an empty roster. Each call draws independently.
///
/// Count and read run on one repeatable-read snapshot, so a delete landing
/// between them cannot leave the drawn offset pointing past the last row.
pub async fn random(db: &PgPool, rng: &mut impl Rng) -> Result<Option<Villain>> {
    let mut tx = db.begin().await.context("starting random pick")?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
        .execute(&mut *tx)
        .await
        .context("pinning snapshot for random pick")?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM villains")
        .fetch_one(&mut *tx)
        .await
        .context("counting villains")?;
    if total == 0 {
        return Ok(None);
    }
    let index = rng.random_range(0..total);

    let villain = sqlx::query_as::<_, Villain>(
        "SELECT id, name, other_name, picture, powers, level
           FROM villains
          ORDER BY id
         OFFSET $1 LIMIT 1",
    )
    .bind(index)
    .fetch_optional(&mut *tx)
    .await
    .context("fetching random villain")?;
    tx.commit().await.context("finishing random pick")?;
    Ok(villain)
}

/// Replace every mutable field of an existing villain in one statement.
/// `None` when the id is unknown; the roster is left untouched in that case
/// (no create-on-update).
pub async fn update(db: &PgPool, id: i64, candidate: &ValidVillain) -> Result<Option<Villain>> {
    sqlx::query_as::<_, Villain>(
        "UPDATE villains
            SET name = $2, other_name = $3, picture = $4, powers = $5, level = $6
          WHERE id = $1
         RETURNING id, name, other_name, picture, powers, level",
    )
    .bind(id)
    .bind(&candidate.name)
    .bind(&candidate.other_name)
    .bind(&candidate.picture)
    .bind(&candidate.powers)
    .bind(candidate.level)
    .fetch_optional(db)
    .await
    .context("updating villain")
}

/// Remove a villain. Returns whether a row was actually deleted; either way
/// the id is absent afterwards.
pub async fn delete(db: &PgPool, id: i64) -> Result<bool> {
    let rows = sqlx::query("DELETE FROM villains WHERE id = $1")
        .bind(id)
        .execute(db)
        .await
        .context("deleting villain")?
        .rows_affected();
    Ok(rows > 0)
}
