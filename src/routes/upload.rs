use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::upload::UploadMediaForm;
use crate::media::{LocalMediaStore, MediaStore};
use crate::repository::DieselRepository;
use crate::routes::{error_body, service_error_response, session_admin, unauthorized_response};
use crate::services::auth::authenticate_admin;

/// Accepts one uploaded file and stores it in the media store. Admin only.
#[post("/upload")]
pub async fn upload_media(
    form: MultipartForm<UploadMediaForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
    media: web::Data<LocalMediaStore>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return unauthorized_response();
    };
    if let Err(e) = authenticate_admin(&claim, repo.get_ref()) {
        return service_error_response(e);
    }

    let form = form.into_inner();
    let Some(file_name) = form.file.file_name.filter(|name| !name.is_empty()) else {
        return HttpResponse::BadRequest().json(error_body("missing file name"));
    };

    let bytes = match std::fs::read(form.file.file.path()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to read uploaded file: {e}");
            return HttpResponse::InternalServerError().json(error_body("internal error"));
        }
    };

    match media.upload(&file_name, &bytes) {
        Ok(uploaded) => HttpResponse::Ok().json(uploaded),
        Err(e) => {
            log::error!("Failed to store upload: {e}");
            HttpResponse::InternalServerError().json(error_body("internal error"))
        }
    }
}
