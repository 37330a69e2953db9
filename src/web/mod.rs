// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use std::sync::Arc;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, patch, post, put, routes};
use rocket::{Build, Request, Response, Rocket, State};
use tracing::info;

use crate::completion::CompletionBackend;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::types::AnalysisResult;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization, X-Requested-With, Accept, Origin",
        ));
        response.set_header(Header::new("Access-Control-Max-Age", "86400"));
    }
}

#[get("/analyze")]
pub async fn liveness() -> Json<LivenessResponse> {
    handlers::liveness_handler().await
}

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<AnalyzeRequest>,
    config: &State<AnalyzerConfig>,
    completion: &State<Arc<dyn CompletionBackend>>,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    handlers::analyze_handler(request, config, completion).await
}

// CORS preflight
#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Rocket answers 404 for a known path with an unhandled method; the
// endpoint contract wants an explicit 405 instead.
#[put("/analyze")]
pub async fn analyze_put() -> Custom<Json<ErrorBody>> {
    method_not_allowed()
}

#[delete("/analyze")]
pub async fn analyze_delete() -> Custom<Json<ErrorBody>> {
    method_not_allowed()
}

#[patch("/analyze")]
pub async fn analyze_patch() -> Custom<Json<ErrorBody>> {
    method_not_allowed()
}

fn method_not_allowed() -> Custom<Json<ErrorBody>> {
    Custom(
        Status::MethodNotAllowed,
        Json(ErrorBody::new("Method not allowed".to_string())),
    )
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request format".to_string()))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Not found".to_string()))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error".to_string()))
}

pub fn build_rocket(
    config: AnalyzerConfig,
    completion: Arc<dyn CompletionBackend>,
) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(config)
        .manage(completion)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                liveness,
                analyze,
                analyze_put,
                analyze_delete,
                analyze_patch,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(
    config: AnalyzerConfig,
    completion: Arc<dyn CompletionBackend>,
) -> Result<()> {
    info!("Starting resume analyzer API server");
    info!("Completion model: {}", config.model);
    info!("Skills per analysis: {}", config.skill_count);

    let _rocket = build_rocket(config, completion).launch().await?;

    Ok(())
}
