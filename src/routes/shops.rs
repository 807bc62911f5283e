use actix_session::Session;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::shops::{ShopForm, ShopFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_body, service_error_response, session_admin, unauthorized_response};
use crate::services::shops as service;

#[get("/shops")]
pub async fn list_shops(repo: web::Data<DieselRepository>) -> impl Responder {
    match service::list_shops(repo.get_ref()) {
        Ok(shops) => HttpResponse::Ok().json(shops),
        Err(e) => service_error_response(e),
    }
}

#[post("/shops")]
pub async fn create_shop(
    form: web::Json<ShopForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: ShopFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::create_shop(&claim, payload, repo.get_ref()) {
        Ok(shop) => HttpResponse::Created().json(shop),
        Err(e) => service_error_response(e),
    }
}

#[put("/shops/{shop_id}")]
pub async fn update_shop(
    shop_id: web::Path<i32>,
    form: web::Json<ShopForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: ShopFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::update_shop(shop_id.into_inner(), &claim, payload, repo.get_ref()) {
        Ok(shop) => HttpResponse::Ok().json(shop),
        Err(e) => service_error_response(e),
    }
}

#[delete("/shops/{shop_id}")]
pub async fn delete_shop(
    shop_id: web::Path<i32>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };

    match service::delete_shop(shop_id.into_inner(), &claim, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(error_body("deleted")),
        Err(e) => service_error_response(e),
    }
}
