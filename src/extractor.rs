// src/extractor.rs
//! PDF to plain text, used when a request carries no resumeText.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::info;

use crate::error::AnalyzeError;

/// Decode the base64 PDF payload. JSON transports tend to wrap long strings,
/// so ASCII whitespace inside the payload is tolerated.
pub fn decode_pdf_base64(encoded: &str) -> Result<Vec<u8>, AnalyzeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AnalyzeError::Extraction(format!("invalid base64 payload: {}", e)))
}

/// Extract the visible text layer of a PDF, all pages concatenated in
/// reading order. Image-only scans have no text layer and are rejected
/// rather than analyzed as empty text. No OCR fallback.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AnalyzeError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AnalyzeError::Extraction(format!("could not read PDF: {}", e)))?;

    if text.trim().is_empty() {
        return Err(AnalyzeError::Extraction(
            "PDF has no extractable text layer".to_string(),
        ));
    }

    Ok(text)
}

/// Full resume path: base64 payload in, resume text out.
pub fn extract_resume_text(encoded: &str) -> Result<String, AnalyzeError> {
    let bytes = decode_pdf_base64(encoded)?;
    info!("Extracting text from {} byte PDF", bytes.len());
    extract_pdf_text(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a one-page uncompressed PDF with the given text, with a valid
    /// xref table so offsets are correct by construction.
    fn minimal_pdf(content_stream: &str) -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content_stream.len(),
                content_stream
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF",
                objects.len() + 1,
                xref
            )
            .as_bytes(),
        );
        out
    }

    fn pdf_with_text(text: &str) -> Vec<u8> {
        minimal_pdf(&format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text))
    }

    #[test]
    fn test_extracts_known_text() {
        let pdf = pdf_with_text("Rust and Python and Docker");
        let text = extract_pdf_text(&pdf).expect("extraction should succeed");
        assert!(text.contains("Rust"));
        assert!(text.contains("Python"));
        assert!(text.contains("Docker"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let pdf = pdf_with_text("Kubernetes expertise");
        let first = extract_pdf_text(&pdf).expect("first pass");
        let second = extract_pdf_text(&pdf).expect("second pass");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = extract_pdf_text(b"this is just plain text");
        assert!(matches!(result, Err(AnalyzeError::Extraction(_))));
    }

    #[test]
    fn test_rejects_pdf_without_text_layer() {
        let pdf = minimal_pdf("");
        let result = extract_pdf_text(&pdf);
        assert!(matches!(result, Err(AnalyzeError::Extraction(_))));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let result = decode_pdf_base64("not//valid==base64!!");
        assert!(matches!(result, Err(AnalyzeError::Extraction(_))));
    }

    #[test]
    fn test_resume_text_from_base64_with_line_breaks() {
        let pdf = pdf_with_text("SQL reporting");
        let mut encoded = STANDARD.encode(&pdf);
        // JSON clients often ship wrapped base64
        encoded.insert(40, '\n');

        let text = extract_resume_text(&encoded).expect("extraction should succeed");
        assert!(text.contains("SQL"));
    }
}
