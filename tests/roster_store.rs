// tests/roster_store.rs
//
// Repository round trips against a real Postgres instance. Set DATABASE_URL
// (a .env file works) to run them; without it each test skips.

use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;

use villain_service::db::villain_repo;
use villain_service::validation::ValidVillain;

async fn test_pool() -> Option<PgPool> {
    dotenv().ok();
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url).await.ok()?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS villains (
             id         BIGSERIAL PRIMARY KEY,
             name       TEXT    NOT NULL,
             other_name TEXT    NOT NULL,
             picture    TEXT    NOT NULL,
             powers     TEXT    NOT NULL,
             level      INTEGER NOT NULL
         )",
    )
    .execute(&pool)
    .await
    .ok()?;
    Some(pool)
}

fn chocolatine() -> ValidVillain {
    ValidVillain {
        name: "Super Chocolatine".into(),
        other_name: "Super Chocolatine chocolate in".into(),
        picture: "super_chocolatine.png".into(),
        powers: "does not eat pain au chocolat".into(),
        level: 42,
    }
}

#[tokio::test]
async fn create_update_delete_round_trip() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    let n = villain_repo::count(&pool).await.unwrap();

    // Create: the stored record echoes the input, plus an assigned id.
    let created = villain_repo::create(&pool, &chocolatine()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(villain_repo::count(&pool).await.unwrap(), n + 1);

    let fetched = villain_repo::get(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(ValidVillain::from(fetched.clone()), chocolatine());

    // A non-empty roster always yields a random member.
    let mut rng = StdRng::seed_from_u64(7);
    assert!(villain_repo::random(&pool, &mut rng)
        .await
        .unwrap()
        .is_some());

    // Update replaces every field wholesale; nothing leaks from the old row.
    let v2 = ValidVillain {
        name: "Super Chocolatine (updated)".into(),
        other_name: "Super Chocolatine chocolate in (updated)".into(),
        picture: "super_chocolatine_updated.png".into(),
        powers: "does not eat pain au chocolat (updated)".into(),
        level: 43,
    };
    let updated = villain_repo::update(&pool, created.id, &v2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(ValidVillain::from(updated), v2);
    let refetched = villain_repo::get(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(ValidVillain::from(refetched), v2);
    assert_eq!(villain_repo::count(&pool).await.unwrap(), n + 1);

    // Delete, then the id is gone and the count is back where it started.
    assert!(villain_repo::delete(&pool, created.id).await.unwrap());
    assert_eq!(villain_repo::count(&pool).await.unwrap(), n);
    assert!(villain_repo::get(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn missing_id_is_an_empty_outcome_not_an_error() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    let unknown = i64::MAX;
    assert!(villain_repo::get(&pool, unknown).await.unwrap().is_none());
    assert!(!villain_repo::delete(&pool, unknown).await.unwrap());
}

#[tokio::test]
async fn update_of_unknown_id_creates_nothing() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    let n = villain_repo::count(&pool).await.unwrap();
    let outcome = villain_repo::update(&pool, i64::MAX, &chocolatine())
        .await
        .unwrap();
    assert!(outcome.is_none());
    assert_eq!(villain_repo::count(&pool).await.unwrap(), n);
}

#[tokio::test]
async fn random_always_yields_a_present_member() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(villain_repo::create(&pool, &chocolatine()).await.unwrap());
    }

    // Every draw on a non-empty roster lands on a row that is fetchable at
    // that moment; never a spurious empty outcome.
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let picked = villain_repo::random(&pool, &mut rng)
            .await
            .unwrap()
            .expect("non-empty roster must yield a member");
        assert!(villain_repo::get(&pool, picked.id)
            .await
            .unwrap()
            .is_some());
    }

    for v in created {
        villain_repo::delete(&pool, v.id).await.unwrap();
    }
}

#[tokio::test]
async fn random_on_empty_roster_is_none() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    // An empty villains table in a scratch schema, so the shared roster is
    // left alone.
    sqlx::query("CREATE SCHEMA IF NOT EXISTS empty_roster_test")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS empty_roster_test.villains (
             id         BIGSERIAL PRIMARY KEY,
             name       TEXT    NOT NULL,
             other_name TEXT    NOT NULL,
             picture    TEXT    NOT NULL,
             powers     TEXT    NOT NULL,
             level      INTEGER NOT NULL
         )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("TRUNCATE empty_roster_test.villains")
        .execute(&pool)
        .await
        .unwrap();

    let url = std::env::var("DATABASE_URL").unwrap();
    let scoped = sqlx::postgres::PgPoolOptions::new()
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::Executor::execute(&mut *conn, "SET search_path TO empty_roster_test")
                    .await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .unwrap();

    assert_eq!(villain_repo::count(&scoped).await.unwrap(), 0);
    let mut rng = StdRng::seed_from_u64(7);
    assert!(villain_repo::random(&scoped, &mut rng)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set or unreachable; skipping");
        return;
    };

    let first = villain_repo::create(&pool, &chocolatine()).await.unwrap();
    villain_repo::delete(&pool, first.id).await.unwrap();
    let second = villain_repo::create(&pool, &chocolatine()).await.unwrap();
    assert!(second.id > first.id);
    villain_repo::delete(&pool, second.id).await.unwrap();
}
