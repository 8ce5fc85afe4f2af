//! Villain roster CRUD (list / get / random / create / update / delete).
//!
//! Outcome mapping: an unknown id on a read is 204 No Content, not an error;
//! delete always acknowledges with 204 whether or not the row existed; only
//! update distinguishes an unknown id, with 404.

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::{debug, error};
use sqlx::PgPool;

use crate::db::villain_repo;
use crate::validation::{self, VillainPayload};

/// GET /api/villains/hello
#[get("/villains/hello")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("hello")
}

/// GET /api/villains
#[get("/villains")]
pub async fn list_villains(db: web::Data<PgPool>) -> impl Responder {
    match villain_repo::list(&db).await {
        Ok(villains) => HttpResponse::Ok().json(villains),
        Err(e) => {
            error!("listing villains failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/villains/random
#[get("/villains/random")]
pub async fn random_villain(db: web::Data<PgPool>) -> impl Responder {
    let mut rng = rand::rng();
    match villain_repo::random(&db, &mut rng).await {
        Ok(Some(villain)) => {
            debug!("found random villain {villain}");
            HttpResponse::Ok().json(villain)
        }
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("random villain failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/villains/{id}
#[get("/villains/{id}")]
pub async fn get_villain(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let id = path.into_inner();
    match villain_repo::get(&db, id).await {
        Ok(Some(villain)) => HttpResponse::Ok().json(villain),
        Ok(None) => {
            debug!("no villain found with id {id}");
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            error!("fetching villain {id} failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST /api/villains
#[post("/villains")]
pub async fn create_villain(
    payload: web::Json<VillainPayload>,
    db: web::Data<PgPool>,
) -> impl Responder {
    // The store assigns the id; one supplied by the client is ignored.
    let candidate = match validation::validate(&payload) {
        Ok(c) => c,
        Err(problems) => return HttpResponse::BadRequest().json(problems),
    };

    match villain_repo::create(&db, &candidate).await {
        Ok(villain) => {
            debug!("created villain {villain}");
            HttpResponse::Created()
                .insert_header(("Location", format!("/api/villains/{}", villain.id)))
                .json(villain)
        }
        Err(e) => {
            error!("creating villain failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// PUT /api/villains
#[put("/villains")]
pub async fn update_villain(
    payload: web::Json<VillainPayload>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let Some(id) = payload.id else {
        return HttpResponse::BadRequest().json(vec!["id must not be null".to_string()]);
    };
    let candidate = match validation::validate(&payload) {
        Ok(c) => c,
        Err(problems) => return HttpResponse::BadRequest().json(problems),
    };

    match villain_repo::update(&db, id, &candidate).await {
        Ok(Some(villain)) => {
            debug!("updated villain {villain}");
            HttpResponse::Ok().json(villain)
        }
        // Unknown id: nothing created, nothing changed.
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("updating villain {id} failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/villains/{id}
#[delete("/villains/{id}")]
pub async fn delete_villain(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let id = path.into_inner();
    match villain_repo::delete(&db, id).await {
        Ok(deleted) => {
            if deleted {
                debug!("deleted villain {id}");
            }
            // The end state is the same either way: the id is gone.
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            error!("deleting villain {id} failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // `hello` and `random` before `{id}` so the literal segments win.
    cfg.service(hello)
        .service(random_villain)
        .service(list_villains)
        .service(get_villain)
        .service(create_villain)
        .service(update_villain)
        .service(delete_villain);
}
