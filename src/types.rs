// src/types.rs
use serde::{Deserialize, Serialize};

/// One skill from the job description, checked against the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillFinding {
    pub skill: String,
    pub present: bool,
    pub explanation: String,
}

/// Result of a single analysis. Built fresh per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skills: Vec<SkillFinding>,
}
