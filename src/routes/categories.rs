use actix_session::Session;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{
    AddCategoryForm, AddCategoryFormPayload, UpdateCategoryForm, UpdateCategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{error_body, service_error_response, session_admin, unauthorized_response};
use crate::services::categories as service;

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match service::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => service_error_response(e),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::get_category(category_id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => service_error_response(e),
    }
}

#[post("/categories")]
pub async fn create_category(
    form: web::Json<AddCategoryForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: AddCategoryFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::create_category(&claim, payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(e) => service_error_response(e),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    form: web::Json<UpdateCategoryForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: UpdateCategoryFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::update_category(category_id.into_inner(), &claim, payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => service_error_response(e),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };

    match service::delete_category(category_id.into_inner(), &claim, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(error_body("deleted")),
        Err(e) => service_error_response(e),
    }
}
