//! Fight ledger endpoints. Read and append only; fights are immutable.

use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};
use sqlx::PgPool;

use crate::db::fight_repo::{self, NewFight};

/// GET /api/fights
#[get("/fights")]
pub async fn list_fights(db: web::Data<PgPool>) -> impl Responder {
    match fight_repo::list(&db).await {
        Ok(fights) => HttpResponse::Ok().json(fights),
        Err(e) => {
            error!("listing fights failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/fights/{id}
#[get("/fights/{id}")]
pub async fn get_fight(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let id = path.into_inner();
    match fight_repo::get(&db, id).await {
        Ok(Some(fight)) => HttpResponse::Ok().json(fight),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("fetching fight {id} failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST /api/fights
#[post("/fights")]
pub async fn record_fight(payload: web::Json<NewFight>, db: web::Data<PgPool>) -> impl Responder {
    match fight_repo::record(&db, &payload).await {
        Ok(fight) => {
            debug!("recorded fight {fight}");
            HttpResponse::Created()
                .insert_header(("Location", format!("/api/fights/{}", fight.id)))
                .json(fight)
        }
        Err(e) => {
            error!("recording fight failed: {e:#}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_fights)
        .service(get_fight)
        .service(record_fight);
}
