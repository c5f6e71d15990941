//! Create/read/replace/delete routes shared by every storefront entity.

use actix_web::{web, HttpResponse, Scope};
use serde_json::json;

use crate::application::entity_service::EntityService;
use crate::domain::entity::Entity;
use crate::errors::AppError;

/// A scope mounted at `path` carrying the five CRUD routes for `E`.
/// Callers chain their entity-specific routes onto the returned scope.
pub fn crud_scope<E: Entity>(path: &str) -> Scope {
    web::scope(path)
        .service(
            web::resource("")
                .route(web::get().to(list::<E>))
                .route(web::post().to(create::<E>)),
        )
        .service(
            web::resource("/{id:\\d+}")
                .route(web::get().to(get::<E>))
                .route(web::put().to(update::<E>))
                .route(web::delete().to(delete::<E>)),
        )
}

/// POST {scope}
pub async fn create<E: Entity>(
    service: web::Data<EntityService<E>>,
    body: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let data = body.into_inner();
    let id = web::block(move || service.create(data)).await??;
    Ok(HttpResponse::Created().json(json!({ "id": id })))
}

/// GET {scope}
pub async fn list<E: Entity>(
    service: web::Data<EntityService<E>>,
) -> Result<HttpResponse, AppError> {
    let records = web::block(move || service.list()).await??;
    Ok(HttpResponse::Ok().json(records))
}

/// GET {scope}/{id}
pub async fn get<E: Entity>(
    service: web::Data<EntityService<E>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = web::block(move || service.get(id)).await??;
    Ok(HttpResponse::Ok().json(record))
}

/// PUT {scope}/{id}
///
/// Replaces the whole record; every field must be supplied.
pub async fn update<E: Entity>(
    service: web::Data<EntityService<E>>,
    path: web::Path<i32>,
    body: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let data = body.into_inner();
    web::block(move || service.update(id, data)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE {scope}/{id}
pub async fn delete<E: Entity>(
    service: web::Data<EntityService<E>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || service.delete(id)).await??;
    Ok(HttpResponse::NoContent().finish())
}
