mod error;

use crate::application::{TestCaseUseCase, REQUIREMENT_REQUIRED};
use crate::domain::error::AppError;
use crate::domain::test_case::TestCase;
use crate::infrastructure::storage::read_artifact;
use actix_cors::Cors;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{
    dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder, ResponseError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};
use validator::Validate;

pub use error::{PARSE_FAILURE_MESSAGE, SERVER_ERROR_MESSAGE};

/// Filename offered to the browser, independent of where the artifact lives.
pub const DOWNLOAD_FILENAME: &str = "testcases.csv";

pub struct HttpState {
    pub test_case_use_case: TestCaseUseCase,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateTestCasesRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub requirement: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestCasesResponse {
    pub test_cases: Vec<TestCase>,
    pub csv_path: String,
}

#[post("/generate-testcases")]
async fn generate_testcases(
    data: web::Data<HttpState>,
    req: web::Json<GenerateTestCasesRequest>,
) -> impl Responder {
    if req.validate().is_err() {
        return AppError::ValidationError(REQUIREMENT_REQUIRED.to_string()).error_response();
    }
    let requirement = req.requirement.as_deref().unwrap_or_default();

    match data
        .test_case_use_case
        .generate_test_cases(requirement)
        .await
    {
        Ok(generated) => HttpResponse::Ok().json(GenerateTestCasesResponse {
            test_cases: generated.test_cases,
            csv_path: generated.csv_path.display().to_string(),
        }),
        Err(e) => {
            // Parse failures are logged where the output is decoded.
            if !matches!(e, AppError::ParseError { .. }) {
                error!(error = ?e, "Test case generation failed");
            }
            e.error_response()
        }
    }
}

#[get("/download-csv")]
async fn download_csv(data: web::Data<HttpState>) -> impl Responder {
    let path = data.test_case_use_case.csv_path();

    match read_artifact(path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(DOWNLOAD_FILENAME.to_string())],
            })
            .body(bytes),
        Err(e) => {
            error!(error = %e, path = %path.display(), "CSV download error");
            e.error_response()
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn json_config() -> web::JsonConfig {
    // An unreadable body counts as a missing requirement.
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected generation request body");
        AppError::ValidationError(REQUIREMENT_REQUIRED.to_string()).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_testcases)
        .service(download_csv)
        .service(health);
}

/// Browser front-end runs on another origin.
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn start_server(state: web::Data<HttpState>, host: &str, port: u16) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}
