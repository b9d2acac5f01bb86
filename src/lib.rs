use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{web, App, HttpServer};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod clock;
pub mod report;
pub mod state;
pub mod task;

pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn not_ready(message: &str) -> Self {
        Self::new("NotReady", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::task::handlers::upload,
        crate::task::handlers::submit_survey,
        crate::report::handlers::get_report,
        crate::report::handlers::get_report_pdf
    ),
    components(
        schemas(
            task::models::Task,
            task::models::UploadedFile,
            task::models::Survey,
            task::models::UploadResponse,
            task::models::SubmitSurveyRequest,
            task::models::SubmitSurveyResponse,
            report::handlers::ReportStatusResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Assessment", description = "Drawing upload and survey submission."),
        (name = "Report", description = "Report retrieval in markdown and PDF form.")
    )
)]
struct ApiDoc;

fn processing_window_from_env() -> Duration {
    std::env::var("PROCESSING_WINDOW_MS")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .map(Duration::milliseconds)
        .unwrap_or_else(|| {
            Duration::milliseconds(crate::task::store::DEFAULT_PROCESSING_WINDOW_MS)
        })
}

fn content_from_env() -> report::content::ReportContent {
    match std::env::var("REPORT_CONTENT_PATH") {
        Ok(path) => match report::content::ReportContent::from_json_file(&PathBuf::from(&path)) {
            Ok(content) => {
                log::info!("loaded report content bank from {}", path);
                content
            }
            Err(e) => {
                log::error!("Failed to load report content from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => report::content::ReportContent::builtin(),
    }
}

fn pdf_renderer_from_env() -> report::pdf::PdfRenderer {
    let result = match std::env::var("REPORT_FONT_PATH") {
        Ok(path) => report::pdf::PdfRenderer::from_font_file(&PathBuf::from(path)),
        Err(_) => report::pdf::PdfRenderer::from_default_font(),
    };
    match result {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!(
                "Failed to initialize the PDF render path: {}. Install the report font \
                 (see assets/fonts/README.md) or set REPORT_FONT_PATH.",
                e
            );
            std::process::exit(1);
        }
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let content = content_from_env();
    let pdf = pdf_renderer_from_env();

    let app_state = web::Data::new(AppState::new(
        Arc::new(clock::SystemClock),
        processing_window_from_env(),
        content,
        pdf,
    ));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(4000);

    log::info!("Starting server at http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        // The original service accepted any origin; the upload form may be
        // hosted anywhere.
        let cors = Cors::permissive();

        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_state)
            .service(web::resource("/upload").route(web::post().to(task::handlers::upload)))
            .service(
                web::resource("/submit-survey")
                    .route(web::post().to(task::handlers::submit_survey)),
            )
            .service(
                web::resource("/report/{task_id}")
                    .route(web::get().to(report::handlers::get_report)),
            )
            .service(
                web::resource("/report/{task_id}/pdf")
                    .route(web::get().to(report::handlers::get_report_pdf)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(actix_files::Files::new("/", "./public").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
