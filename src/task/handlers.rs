use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::state::AppState;
use crate::task::models::{SubmitSurveyRequest, SubmitSurveyResponse, UploadResponse};
use crate::task::multipart_parser::MultipartParser;

#[utoipa::path(
    tag = "Assessment",
    post,
    path = "/upload",
    request_body(content = inline(String), content_type = "multipart/form-data",
        description = "Exactly three drawing images in repeated `files` fields"),
    responses(
        (status = 201, description = "Task created", body = UploadResponse),
        (status = 400, description = "Not exactly three files", body = crate::ErrorResponse)
    )
)]
pub async fn upload(multipart: Multipart, data: web::Data<AppState>) -> impl Responder {
    let files = match MultipartParser::parse_upload_multipart(multipart).await {
        Ok(files) => files,
        Err(e) => return HttpResponse::from(e),
    };

    match data.store.create(files) {
        Ok(task_id) => {
            info!("task {} created", task_id);
            HttpResponse::Created().json(UploadResponse { task_id })
        }
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    tag = "Assessment",
    post,
    path = "/submit-survey",
    request_body = SubmitSurveyRequest,
    responses(
        (status = 200, description = "Survey attached", body = SubmitSurveyResponse),
        (status = 404, description = "Unknown task id", body = crate::ErrorResponse)
    )
)]
pub async fn submit_survey(
    req: web::Json<SubmitSurveyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SubmitSurveyRequest { task_id, survey } = req.into_inner();
    match data.store.attach_survey(task_id, survey) {
        Ok(()) => {
            info!("survey attached to task {}", task_id);
            HttpResponse::Ok().json(SubmitSurveyResponse {
                message: "Опросник принят".to_string(),
                task_id,
            })
        }
        Err(e) => e.into(),
    }
}
