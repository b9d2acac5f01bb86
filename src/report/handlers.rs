use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::report::{assembler, markdown};
use crate::state::AppState;
use crate::ErrorResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportStatusResponse {
    #[schema(example = "ready")]
    pub status: String,
    /// Full markdown report document.
    pub report_md: String,
    /// Absolute URL of the PDF rendering of the same report.
    #[schema(example = "http://localhost:4000/report/f1e2d3c4-b5a6-7890-1234-567890abcdef/pdf")]
    pub pdf_url: String,
}

#[utoipa::path(
    tag = "Report",
    get,
    path = "/report/{task_id}",
    responses(
        (status = 200, description = "Report ready", body = ReportStatusResponse),
        (status = 404, description = "Unknown task or report not ready yet", body = crate::ErrorResponse)
    ),
    params(
        ("task_id" = Uuid, Path, description = "Task identifier returned by the upload endpoint")
    )
)]
pub async fn get_report(
    task_id: web::Path<Uuid>,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = task_id.into_inner();
    let task = match data.store.get_ready(task_id) {
        Ok(task) => task,
        Err(e) => return HttpResponse::from(e),
    };

    let survey = task.survey.unwrap_or_default();
    let today = data.clock.now().date_naive();
    let report = assembler::assemble(&survey, &data.content, today);
    let report_md = markdown::render(&report);

    let conn = req.connection_info();
    let pdf_url = format!("{}://{}/report/{}/pdf", conn.scheme(), conn.host(), task_id);

    HttpResponse::Ok().json(ReportStatusResponse {
        status: "ready".to_string(),
        report_md,
        pdf_url,
    })
}

#[utoipa::path(
    tag = "Report",
    get,
    path = "/report/{task_id}/pdf",
    responses(
        (status = 200, description = "PDF report as attachment", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Unknown task or report not ready yet", body = crate::ErrorResponse),
        (status = 500, description = "PDF rendering failed", body = crate::ErrorResponse)
    ),
    params(
        ("task_id" = Uuid, Path, description = "Task identifier returned by the upload endpoint")
    )
)]
pub async fn get_report_pdf(
    task_id: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = task_id.into_inner();
    let task = match data.store.get_ready(task_id) {
        Ok(task) => task,
        Err(e) => return HttpResponse::from(e),
    };

    let survey = task.survey.unwrap_or_default();
    let today = data.clock.now().date_naive();
    let report = assembler::assemble(&survey, &data.content, today);

    match data.pdf.render(task_id, &report) {
        Ok(bytes) => {
            info!("rendered PDF report for task {} ({} bytes)", task_id, bytes.len());
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=report-{task_id}.pdf"),
                ))
                .body(bytes)
        }
        Err(e) => {
            error!("PDF rendering failed for task {}: {}", task_id, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}
