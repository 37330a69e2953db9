// src/web/types.rs
use std::io::Cursor;

use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;

/// POST body. Field presence is validated in the handler so missing fields
/// produce our 400 message instead of a body-deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_pdf_base64: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(error: String) -> Self {
        Self {
            error,
            detail: None,
        }
    }
}

impl<'r> Responder<'r, 'static> for AnalyzeError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = if self.is_client_error() {
            Status::BadRequest
        } else {
            Status::InternalServerError
        };

        // Failure detail only leaves the process in dev mode
        let dev_mode = request
            .rocket()
            .state::<AnalyzerConfig>()
            .map(|config| config.dev_mode)
            .unwrap_or(false);

        let body = ErrorBody {
            error: self.to_string(),
            detail: dev_mode.then(|| format!("{:?}", self)),
        };

        let bytes = serde_json::to_vec(&body).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(bytes.len(), Cursor::new(bytes))
            .ok()
    }
}
