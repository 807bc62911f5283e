use actix_session::Session;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::products::{ProductForm, ProductFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_body, service_error_response, session_admin, unauthorized_response};
use crate::services::products as service;

#[derive(Debug, Deserialize)]
pub struct ProductsQueryParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    #[serde(rename = "categoryId", alias = "category_id")]
    pub category_id: Option<i32>,
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::list_products(params.page, params.limit, params.category_id, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => service_error_response(e),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::get_product(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => service_error_response(e),
    }
}

#[post("/products")]
pub async fn create_product(
    form: web::Json<ProductForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: ProductFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::create_product(&claim, payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(e) => service_error_response(e),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    form: web::Json<ProductForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    let payload: ProductFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match service::update_product(product_id.into_inner(), &claim, payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => service_error_response(e),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };

    match service::delete_product(product_id.into_inner(), &claim, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(error_body("deleted")),
        Err(e) => service_error_response(e),
    }
}
