// src/web/handlers.rs
use std::sync::Arc;

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::completion::CompletionBackend;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::types::AnalysisResult;
use crate::web::types::{AnalyzeRequest, LivenessResponse};
use crate::{extractor, parser, prompt};

pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Analyze endpoint is working".to_string(),
    })
}

/// Linear pipeline: validate, extract if needed, build prompt, call the
/// completion service, parse. Any stage error short-circuits straight to
/// the response.
pub async fn analyze_handler(
    request: Json<AnalyzeRequest>,
    config: &State<AnalyzerConfig>,
    completion: &State<Arc<dyn CompletionBackend>>,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    let result = run_pipeline(request.into_inner(), config, completion.inner().as_ref()).await;

    match result {
        Ok(analysis) => {
            info!("Analysis produced {} skill findings", analysis.skills.len());
            Ok(Json(analysis))
        }
        Err(e) => {
            error!("Analysis request failed: {}", e);
            Err(e)
        }
    }
}

async fn run_pipeline(
    request: AnalyzeRequest,
    config: &AnalyzerConfig,
    completion: &dyn CompletionBackend,
) -> Result<AnalysisResult, AnalyzeError> {
    let job_description = match request.job_description.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            return Err(AnalyzeError::Validation(
                "Missing required field. Please provide jobDescription.".to_string(),
            ))
        }
    };

    let resume_text = resolve_resume_text(&request)?;

    let prompt = prompt::build_prompt(&job_description, &resume_text, config.skill_count);
    let raw_output = completion.complete(&prompt).await?;

    parser::parse_analysis(&raw_output)
}

/// Plain text wins when both resume fields are present; the PDF is only
/// extracted when no usable text was supplied.
fn resolve_resume_text(request: &AnalyzeRequest) -> Result<String, AnalyzeError> {
    if let Some(text) = request.resume_text.as_deref() {
        if !text.trim().is_empty() {
            return Ok(text.to_string());
        }
    }

    if let Some(encoded) = request.resume_pdf_base64.as_deref() {
        if !encoded.trim().is_empty() {
            return extractor::extract_resume_text(encoded);
        }
    }

    Err(AnalyzeError::Validation(
        "Missing required field. Please provide resumeText or resumePdfBase64.".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        resume_text: Option<&str>,
        resume_pdf_base64: Option<&str>,
        job_description: Option<&str>,
    ) -> AnalyzeRequest {
        AnalyzeRequest {
            resume_text: resume_text.map(String::from),
            resume_pdf_base64: resume_pdf_base64.map(String::from),
            job_description: job_description.map(String::from),
        }
    }

    #[test]
    fn test_resume_text_preferred_over_pdf() {
        let req = request(Some("plain resume"), Some("JVBERi0="), Some("job"));
        let text = resolve_resume_text(&req).expect("should resolve");
        assert_eq!(text, "plain resume");
    }

    #[test]
    fn test_blank_resume_text_falls_through_to_validation() {
        let req = request(Some("   "), None, Some("job"));
        let result = resolve_resume_text(&req);
        assert!(matches!(result, Err(AnalyzeError::Validation(_))));
    }

    #[test]
    fn test_missing_both_resume_fields_is_validation_error() {
        let req = request(None, None, Some("job"));
        let result = resolve_resume_text(&req);
        assert!(matches!(result, Err(AnalyzeError::Validation(_))));
    }

    #[test]
    fn test_bad_pdf_payload_is_extraction_error() {
        let req = request(None, Some("!!!not-base64!!!"), Some("job"));
        let result = resolve_resume_text(&req);
        assert!(matches!(result, Err(AnalyzeError::Extraction(_))));
    }
}
